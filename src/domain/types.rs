//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can
//! be:
//!
//! - decoded directly from the provider's already-parsed response
//! - transformed in-memory through each pipeline stage
//! - exported to JSON for downstream consumers
//!
//! Records are created once per run, enriched stage by stage, and discarded
//! after the report is emitted; nothing is persisted.

use serde::{Deserialize, Serialize};

/// One top-level entry of the forecast table.
///
/// The provider returns a chronological sequence of days where the first two
/// days carry sub-slots (`manha`/`tarde`/`noite`) as a sequence of records and
/// the remaining days are a single bare record. The two shapes are modeled as
/// an explicit tagged union; the normalizer pattern-matches on the tag rather
/// than sniffing types at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ForecastEntry {
    /// A day with multiple sub-slot records, in original slot order.
    MultiSlotDay(Vec<RawRecord>),
    /// A day reported as one bare record.
    SingleSlotDay(RawRecord),
}

/// One raw forecast record as supplied by the provider.
///
/// `day_week` is the partition key and always present; every other raw field
/// is optional at the type level because the source records are heterogeneous.
/// Presence of the fields the feature engine needs is validated at table
/// level, not per record (see `features::check_required_fields`).
///
/// The trend labels (`temp_max_goes_to`, `temp_min_goes_to`) are carried
/// through unchanged and never used as features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub day_week: String,

    /// Compass-transition code, e.g. "S-SE".
    pub dir_air: Option<String>,
    /// Sub-slot name: "manha" | "tarde" | "noite".
    pub hour: Option<String>,
    /// Wind intensity label: "Fracos" | "Moderados" | "Fortes".
    pub int_air: Option<String>,
    /// Time string of the form `HHhMM`, e.g. "06h38".
    pub sunrise: Option<String>,
    /// Time string of the form `HHhMM`, e.g. "18h32".
    pub sunset: Option<String>,

    /// Forecast maximum temperature, degrees C.
    pub temp_max: Option<f64>,
    /// Forecast minimum temperature, degrees C.
    pub temp_min: Option<f64>,
    /// Maximum relative humidity, percent.
    pub umi_max: Option<f64>,
    /// Minimum relative humidity, percent.
    pub umi_min: Option<f64>,

    pub temp_max_goes_to: Option<String>,
    pub temp_min_goes_to: Option<String>,
}

/// A raw record augmented with the derived feature fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatRecord {
    #[serde(flatten)]
    pub raw: RawRecord,

    /// `temp_max - temp_min`.
    pub temp_diff: f64,
    /// `umi_max - umi_min`.
    pub umi_diff: f64,
    /// Representative hour of day for the sub-slot (8 / 14 / 20).
    pub hour_numeric: f64,
    /// Wind bearing in degrees; 180 when the code is unrecognized.
    pub wind_dir_angle: f64,
    /// Circular encoding of the bearing, sine component.
    pub wind_dir_sin: f64,
    /// Circular encoding of the bearing, cosine component.
    pub wind_dir_cos: f64,
    /// Ordinal wind intensity (0 / 1 / 2); 0 when unrecognized.
    pub wind_intensity: f64,
    /// Integer hour parsed from the sunrise string.
    pub sunrise_hour: f64,
    /// Integer hour parsed from the sunset string.
    pub sunset_hour: f64,
    /// `sunset_hour - sunrise_hour`.
    pub day_length: f64,
    /// Normalized position of `hour_numeric` between sunrise and sunset,
    /// clamped to [0, 1].
    pub solar_progress: f64,
}

impl FlatRecord {
    /// Forecast minimum temperature. Present by construction: feature
    /// derivation fails before a `FlatRecord` exists without it.
    pub fn temp_min(&self) -> f64 {
        self.raw.temp_min.unwrap_or(f64::NAN)
    }

    /// Forecast maximum temperature (see `temp_min`).
    pub fn temp_max(&self) -> f64 {
        self.raw.temp_max.unwrap_or(f64::NAN)
    }

    /// Maximum relative humidity (see `temp_min`).
    pub fn umi_max(&self) -> f64 {
        self.raw.umi_max.unwrap_or(f64::NAN)
    }

    /// Minimum relative humidity (see `temp_min`).
    pub fn umi_min(&self) -> f64 {
        self.raw.umi_min.unwrap_or(f64::NAN)
    }
}

/// A flat record with its synthetic training target.
///
/// Invariant: `temp_min <= temp_atual <= temp_max`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledRecord {
    #[serde(flatten)]
    pub flat: FlatRecord,
    /// Synthetic "current temperature" label, degrees C, one decimal.
    pub temp_atual: f64,
}

/// A held-out record with the model's estimate attached.
///
/// Invariant: `temp_min <= temp_predicted <= temp_max`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictedRecord {
    #[serde(flatten)]
    pub labeled: LabeledRecord,
    /// Model estimate, clamped to the record's bounds, one decimal.
    pub temp_predicted: f64,
}

/// Gradient boosting hyperparameters.
///
/// Defaults reproduce the production configuration; the seed only matters
/// when `subsample < 1.0` (see `fit::boost`).
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorParams {
    /// Number of boosting stages.
    pub n_estimators: usize,
    /// Shrinkage applied to each stage's contribution.
    pub learning_rate: f64,
    /// Maximum tree depth.
    pub max_depth: usize,
    /// Minimum number of training rows per leaf.
    pub min_samples_leaf: usize,
    /// Fraction of rows drawn (without replacement) for each stage.
    pub subsample: f64,
    /// Seed for the per-stage row sampler.
    pub seed: u64,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            n_estimators: 300,
            learning_rate: 0.05,
            max_depth: 4,
            min_samples_leaf: 3,
            subsample: 1.0,
            seed: 42,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_entry_decodes_both_shapes() {
        let multi: ForecastEntry = serde_json::from_str(
            r#"[{"day_week": "Sexta-Feira", "hour": "manha", "temp_max": 32, "temp_min": 19}]"#,
        )
        .unwrap();
        assert!(matches!(multi, ForecastEntry::MultiSlotDay(ref v) if v.len() == 1));

        let single: ForecastEntry = serde_json::from_str(
            r#"{"day_week": "Domingo", "hour": "noite", "temp_max": 32, "temp_min": 18}"#,
        )
        .unwrap();
        assert!(matches!(single, ForecastEntry::SingleSlotDay(_)));
    }

    #[test]
    fn raw_record_tolerates_absent_fields() {
        let rec: RawRecord = serde_json::from_str(r#"{"day_week": "Domingo"}"#).unwrap();
        assert_eq!(rec.day_week, "Domingo");
        assert!(rec.temp_max.is_none());
        assert!(rec.hour.is_none());
    }

    #[test]
    fn default_params_match_production_configuration() {
        let p = EstimatorParams::default();
        assert_eq!(p.n_estimators, 300);
        assert!((p.learning_rate - 0.05).abs() < 1e-12);
        assert_eq!(p.max_depth, 4);
        assert_eq!(p.min_samples_leaf, 3);
    }
}
