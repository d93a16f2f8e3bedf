use crate::domain::plan::PlanResponse;
use anyhow::Context;
use std::path::{Path, PathBuf};

pub const CSV_HEADER: &str =
    "date,preset,symbol,name,market,entry,stop,take,p_win_pct,ev_pct,size_bwp";

/// Serializes a plan's ideas as CSV: the fixed header row, then one row
/// per idea in the plan's order. Returns `None` for a plan with no ideas;
/// an empty export is a no-op, not an error.
pub fn plan_csv(plan: &PlanResponse) -> Option<String> {
    if plan.ideas.is_empty() {
        return None;
    }

    let mut out = String::from(CSV_HEADER);
    for idea in &plan.ideas {
        let row = [
            plan.asof.to_string(),
            csv_field(&plan.preset),
            csv_field(&idea.symbol),
            csv_field(&idea.name),
            csv_field(&idea.market),
            format!("{:.2}", idea.entry),
            format!("{:.2}", idea.stop),
            format!("{:.2}", idea.take),
            format!("{:.1}", idea.p * 100.0),
            format!("{:.2}", idea.ev * 100.0),
            format!("{:.0}", idea.size_bwp),
        ]
        .join(",");
        out.push('\n');
        out.push_str(&row);
    }
    Some(out)
}

pub fn csv_filename(plan: &PlanResponse) -> String {
    format!("anjaylytics_plan_{}.csv", plan.asof)
}

/// Writes the plan CSV into `dir` under the canonical filename. `Ok(None)`
/// means there was nothing to export.
pub fn write_plan_csv(plan: &PlanResponse, dir: &Path) -> anyhow::Result<Option<PathBuf>> {
    let Some(csv) = plan_csv(plan) else {
        return Ok(None);
    };

    let path = dir.join(csv_filename(plan));
    std::fs::write(&path, csv)
        .with_context(|| format!("failed to write plan csv to {}", path.display()))?;
    Ok(Some(path))
}

// Free-text fields (name, market labels) can carry commas; quote when
// needed and double any embedded quotes.
fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::{CashAdvice, Idea};
    use chrono::NaiveDate;

    fn idea(symbol: &str, name: &str, size_bwp: f64) -> Idea {
        Idea {
            symbol: symbol.to_string(),
            name: name.to_string(),
            market: "BSE".to_string(),
            price: 10.0,
            p: 0.58,
            ev: 0.0215,
            entry: 9.9,
            stop: 9.5,
            take: 10.8,
            size_bwp,
            rationale: "test".to_string(),
            headlines: Vec::new(),
        }
    }

    fn plan(ideas: Vec<Idea>) -> PlanResponse {
        PlanResponse {
            asof: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            preset: "Global".to_string(),
            ideas,
            cash: CashAdvice {
                suggested: false,
                reason: None,
            },
        }
    }

    #[test]
    fn header_plus_one_row_per_idea() {
        let csv = plan_csv(&plan(vec![
            idea("AAA", "Alpha", 200.0),
            idea("BBB", "Beta", 150.0),
        ]))
        .unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].starts_with("2026-08-06,Global,AAA,"));
        assert!(lines[2].starts_with("2026-08-06,Global,BBB,"));

        // Suggested sizes pass through untouched: 200 + 150 = 350.
        let total: f64 = lines[1..]
            .iter()
            .map(|l| l.rsplit(',').next().unwrap().parse::<f64>().unwrap())
            .sum();
        assert_eq!(total, 350.0);
    }

    #[test]
    fn percentages_use_fixed_decimal_places() {
        let csv = plan_csv(&plan(vec![idea("AAA", "Alpha", 200.0)])).unwrap();
        let row = csv.lines().nth(1).unwrap();
        let cols: Vec<&str> = row.split(',').collect();
        assert_eq!(cols[8], "58.0");
        assert_eq!(cols[9], "2.15");
    }

    #[test]
    fn free_text_with_commas_is_quoted() {
        let csv = plan_csv(&plan(vec![idea("AAA", "Alpha, Beta & Co", 200.0)])).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("\"Alpha, Beta & Co\""));
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let csv = plan_csv(&plan(vec![idea("AAA", "The \"Good\" Fund", 200.0)])).unwrap();
        assert!(csv.contains("\"The \"\"Good\"\" Fund\""));
    }

    #[test]
    fn empty_plan_is_a_no_op() {
        assert!(plan_csv(&plan(Vec::new())).is_none());

        let dir = std::env::temp_dir();
        assert!(write_plan_csv(&plan(Vec::new()), &dir).unwrap().is_none());
    }

    #[test]
    fn filename_embeds_the_asof_date() {
        assert_eq!(
            csv_filename(&plan(Vec::new())),
            "anjaylytics_plan_2026-08-06.csv"
        );
    }

    #[test]
    fn write_produces_the_file() {
        let dir = std::env::temp_dir().join("anjaylytics_export_test");
        std::fs::create_dir_all(&dir).unwrap();

        let path = write_plan_csv(&plan(vec![idea("AAA", "Alpha", 200.0)]), &dir)
            .unwrap()
            .unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with(CSV_HEADER));
        assert_eq!(written.lines().count(), 2);

        std::fs::remove_file(path).unwrap();
    }
}
