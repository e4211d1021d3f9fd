//! Fixed-width terminal formatting for the held-out report.

use crate::domain::EstimatorParams;
use crate::report::ReportRow;

/// Format the run summary (table shape + estimator settings).
pub fn format_run_summary(
    n_records: usize,
    n_train: usize,
    holdout_day: &str,
    params: &EstimatorParams,
) -> String {
    let mut out = String::new();

    out.push_str("=== tempcast - current temperature estimate ===\n");
    out.push_str(&format!(
        "Records: n={n_records} | train={n_train} | held-out day: {holdout_day}\n"
    ));
    out.push_str(&format!(
        "Estimator: stages={} lr={} depth={} min-leaf={}\n",
        params.n_estimators, params.learning_rate, params.max_depth, params.min_samples_leaf
    ));

    out
}

/// Format the per-slot prediction table.
pub fn format_report(rows: &[ReportRow]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<16} {:<7} {:>8} {:>8} {:>10} {:>10}\n",
        "day_week", "hour", "temp_min", "temp_max", "temp_atual", "predicted"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<16} {:<7} {:>8.1} {:>8.1} {:>10.1} {:>10.1}\n",
            row.day_week, row.hour, row.temp_min, row.temp_max, row.temp_atual, row.temp_predicted
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> ReportRow {
        ReportRow {
            day_week: "Sexta-Feira".to_string(),
            hour: "manha".to_string(),
            temp_min: 19.0,
            temp_max: 32.0,
            temp_atual: 25.0,
            temp_predicted: 24.6,
        }
    }

    #[test]
    fn report_has_header_plus_one_line_per_row() {
        let text = format_report(&[row(), row()]);
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().next().unwrap().contains("temp_atual"));
        assert!(text.contains("Sexta-Feira"));
        assert!(text.contains("24.6"));
    }

    #[test]
    fn summary_names_the_held_out_day() {
        let text = format_run_summary(9, 6, "Sexta-Feira", &EstimatorParams::default());
        assert!(text.contains("held-out day: Sexta-Feira"));
        assert!(text.contains("stages=300"));
    }
}
