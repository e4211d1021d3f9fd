//! Reporting: held-out projection and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the pipeline stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;

pub use format::*;

use serde::Serialize;

use crate::domain::PredictedRecord;

/// The reported slice of one held-out record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub day_week: String,
    pub hour: String,
    pub temp_min: f64,
    pub temp_max: f64,
    pub temp_atual: f64,
    pub temp_predicted: f64,
}

/// Project the held-out records into report rows, in original order.
///
/// Pure projection; no side effects.
pub fn project(predicted: &[PredictedRecord]) -> Vec<ReportRow> {
    predicted
        .iter()
        .map(|p| {
            let flat = &p.labeled.flat;
            ReportRow {
                day_week: flat.raw.day_week.clone(),
                hour: flat.raw.hour.clone().unwrap_or_default(),
                temp_min: flat.temp_min(),
                temp_max: flat.temp_max(),
                temp_atual: p.labeled.temp_atual,
                temp_predicted: p.temp_predicted,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EstimatorParams, LabeledRecord};
    use crate::features::derive_features;
    use crate::fit::fit_and_predict;
    use crate::ingest::normalize;
    use crate::label::label_records;

    fn predicted_fixture() -> Vec<PredictedRecord> {
        let records = normalize(&crate::data::sample::fixture_forecast()).unwrap();
        let table: Vec<LabeledRecord> = label_records(derive_features(records).unwrap());
        fit_and_predict(&table, &EstimatorParams::default()).unwrap()
    }

    #[test]
    fn projection_keeps_order_and_fields() {
        let rows = project(&predicted_fixture());
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.day_week == "Sexta-Feira"));
        assert_eq!(rows[0].hour, "manha");
        assert_eq!(rows[1].hour, "tarde");
        assert_eq!(rows[2].hour, "noite");
        assert_eq!(rows[0].temp_min, 19.0);
        assert_eq!(rows[0].temp_max, 32.0);
    }
}
