use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use anjaylytics_core::calibrate;
use anjaylytics_core::domain::plan::{MarketPreset, PlanRequest};
use anjaylytics_core::domain::risk::RiskBand;
use anjaylytics_core::export;
use anjaylytics_core::fetch::http::HttpScoringClient;
use anjaylytics_core::fetch::metrics::MetricsFetcher;
use anjaylytics_core::fetch::plan::PlanFetcher;
use anjaylytics_core::tips;

mod render;

#[derive(Debug, Parser)]
#[command(name = "anjaylytics", about = "Daily trade plan dashboard")]
struct Args {
    /// Daily budget in pula (floored at 50).
    #[arg(long, default_value_t = 500.0)]
    budget: f64,

    /// Total bankroll in pula (floored at 500).
    #[arg(long, default_value_t = 10_000.0)]
    bankroll: f64,

    /// Risk tolerance in [0, 1]. Bands change at 0.34 and 0.67.
    #[arg(long, default_value_t = 0.5)]
    risk: f64,

    /// Market preset: botswana or global.
    #[arg(long, default_value = "global")]
    preset: String,

    /// Write the plan CSV into this directory.
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Reseed today's tips from the clock instead of the calendar date.
    #[arg(long)]
    reshuffle_tips: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = anjaylytics_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    let preset: MarketPreset = args.preset.parse()?;
    let band = RiskBand::from_value(args.risk);
    let request = PlanRequest::clamped(args.budget, args.bankroll, band, preset);

    let client = HttpScoringClient::from_settings(&settings)?;
    let mut plans = PlanFetcher::new(client.clone());
    let mut metrics = MetricsFetcher::new(client.clone());

    // The two fetchers are independent; run them concurrently.
    tokio::join!(plans.refresh(&request), metrics.refresh());

    let daily_tips = if args.reshuffle_tips {
        tips::select_with_seed(tips::DEFAULT_TIP_GROUPS, clock_seed())
    } else {
        tips::select_for_date(tips::DEFAULT_TIP_GROUPS, chrono::Local::now().date_naive())
    };

    let bars = calibrate::calibration_bars(metrics.reliability());

    render::dashboard(
        &request,
        plans.state(),
        metrics.metrics(),
        &bars,
        &daily_tips,
        &client.export_url(&request),
    );

    if let Some(dir) = args.export_dir {
        if let Some(plan) = plans.state().plan() {
            match export::write_plan_csv(plan, &dir) {
                Ok(Some(path)) => {
                    tracing::info!(path = %path.display(), "wrote plan csv");
                }
                Ok(None) => {
                    tracing::info!("nothing to export; plan has no ideas");
                }
                Err(err) => {
                    sentry_anyhow::capture_anyhow(&err);
                    tracing::error!(error = %err, "plan csv export failed");
                }
            }
        }
    }

    Ok(())
}

/// Reshuffle is explicitly non-deterministic and never persists; subsecond
/// clock noise is enough entropy for a cosmetic pick.
fn clock_seed() -> u32 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0)
        | 1
}

fn init_sentry(settings: &anjaylytics_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
