use anjaylytics_core::calibrate::CalibrationBar;
use anjaylytics_core::domain::metrics::ModelMetrics;
use anjaylytics_core::domain::plan::PlanRequest;
use anjaylytics_core::fetch::plan::PlanState;
use anjaylytics_core::tips::Tip;

pub fn dashboard(
    request: &PlanRequest,
    state: &PlanState,
    metrics: &ModelMetrics,
    bars: &[CalibrationBar],
    tips: &[Tip],
    export_url: &str,
) {
    println!("anjaylytics · daily plan");
    println!(
        "preset {} · risk {} (min win probability {:.0}%) · budget P{:.0} · bankroll P{:.0}",
        request.preset,
        request.risk,
        request.risk.min_win_probability() * 100.0,
        request.daily_budget_pula,
        request.bankroll_pula,
    );
    println!();

    if let Some(error) = state.error() {
        println!("{error}");
    }

    if let Some(plan) = state.plan() {
        println!("plan for {} ({})", plan.asof, plan.preset);

        if plan.cash.suggested {
            match &plan.cash.reason {
                Some(reason) => println!("cash suggested today: {reason}"),
                None => println!("cash suggested today"),
            }
        }

        if plan.ideas.is_empty() {
            println!("no ideas cleared the gate today");
        } else {
            println!(
                "{:<8} {:<24} {:<8} {:>8} {:>8} {:>8} {:>6} {:>7} {:>10}",
                "SYMBOL", "NAME", "MARKET", "ENTRY", "STOP", "TAKE", "WIN%", "EV%", "SIZE(BWP)"
            );
            for idea in &plan.ideas {
                println!(
                    "{:<8} {:<24} {:<8} {:>8.2} {:>8.2} {:>8.2} {:>6.1} {:>7.2} {:>10.0}",
                    idea.symbol,
                    truncated(&idea.name, 24),
                    idea.market,
                    idea.entry,
                    idea.stop,
                    idea.take,
                    idea.p * 100.0,
                    idea.ev * 100.0,
                    idea.size_bwp,
                );
                if !idea.rationale.is_empty() {
                    println!("         {}", idea.rationale);
                }
                for headline in &idea.headlines {
                    println!("         · {headline}");
                }
            }
        }
    } else if state.is_loading() {
        println!("loading plan…");
    }

    println!();
    match metrics.brier {
        Some(brier) => println!("model quality: brier {brier:.3}"),
        None => println!("model quality: brier —"),
    }

    if bars.is_empty() {
        println!("no calibration data yet");
    } else {
        println!("calibration (predicted vs observed):");
        for bar in bars {
            println!(
                "  {:>5.1}% {:<20} | {:>5.1}% {:<20}",
                bar.predicted_pct,
                gauge(bar.predicted_pct),
                bar.actual_pct,
                gauge(bar.actual_pct),
            );
        }
    }

    println!();
    for tip in tips {
        println!("[{}] {}", tip.category, tip.text);
    }

    println!();
    println!("server-side export: {export_url}");
}

fn gauge(pct: f64) -> String {
    "#".repeat((pct / 5.0) as usize)
}

fn truncated(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}
