//! Synthetic "current temperature" labels.
//!
//! The provider reports daily min/max bounds but no current reading, so the
//! training target is manufactured from a diurnal curve: temperature follows
//! a half-sine over the daylight window, dampened by humidity and wind, and
//! can never leave the record's stated bounds.
//!
//! The generator is a pure function of one record; calling it twice on the
//! same record yields the same label. It is intentionally decoupled from the
//! estimator so either can be swapped independently.

use std::f64::consts::PI;

use crate::domain::{FlatRecord, LabeledRecord};
use crate::math::round1;

/// Humidity above this level lowers the estimate, below raises it.
const HUMIDITY_PIVOT: f64 = 50.0;
/// Magnitude of the humidity adjustment at full deviation, degrees C.
const HUMIDITY_WEIGHT: f64 = -0.5;
/// Per-step wind cooling, degrees C per intensity level.
const WIND_WEIGHT: f64 = -0.5;

/// Compute the synthetic label for one record.
///
/// `sin(solar_progress * PI)` peaks at mid-daylight and vanishes at the
/// endpoints, so the base estimate sweeps from `temp_min` up to `temp_max`
/// and back; the secondary adjustments are applied before the final clamp to
/// `[temp_min, temp_max]`.
pub fn synthesize_label(flat: &FlatRecord) -> f64 {
    let temp_min = flat.temp_min();
    let temp_max = flat.temp_max();

    let solar_factor = (flat.solar_progress * PI).sin();
    let base = temp_min + solar_factor * (temp_max - temp_min);

    let umi_effect = HUMIDITY_WEIGHT * (flat.umi_max() - HUMIDITY_PIVOT) / HUMIDITY_PIVOT;
    let wind_effect = WIND_WEIGHT * flat.wind_intensity;

    round1((base + umi_effect + wind_effect).clamp(temp_min, temp_max))
}

/// Attach labels to every record, in order.
pub fn label_records(records: Vec<FlatRecord>) -> Vec<LabeledRecord> {
    records
        .into_iter()
        .map(|flat| {
            let temp_atual = synthesize_label(&flat);
            LabeledRecord { flat, temp_atual }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawRecord;
    use crate::features::derive_record;

    fn flat(hour: &str, umi_max: f64, int_air: &str) -> FlatRecord {
        derive_record(RawRecord {
            day_week: "Sexta-Feira".to_string(),
            dir_air: Some("S-SE".to_string()),
            hour: Some(hour.to_string()),
            int_air: Some(int_air.to_string()),
            sunrise: Some("06h38".to_string()),
            sunset: Some("18h32".to_string()),
            temp_max: Some(32.0),
            temp_min: Some(19.0),
            umi_max: Some(umi_max),
            umi_min: Some(50.0),
            temp_max_goes_to: None,
            temp_min_goes_to: None,
        })
        .unwrap()
    }

    #[test]
    fn morning_slot_reproduces_the_reference_value() {
        // solar_progress = 2/12, solar_factor = sin(pi/6) = 0.5,
        // base = 19 + 0.5 * 13 = 25.5, humidity at 100% subtracts 0.5.
        let label = synthesize_label(&flat("manha", 100.0, "Fracos"));
        assert_eq!(label, 25.0);
    }

    #[test]
    fn label_is_deterministic() {
        let record = flat("tarde", 90.0, "Moderados");
        assert_eq!(synthesize_label(&record), synthesize_label(&record));
    }

    #[test]
    fn label_never_leaves_the_record_bounds() {
        // Night slot: solar factor ~0, so base sits at temp_min and both
        // adjustments push below it; the clamp must hold the floor.
        let label = synthesize_label(&flat("noite", 100.0, "Fortes"));
        assert_eq!(label, 19.0);

        // Dry air raises the estimate; the ceiling must hold near midday.
        let label = synthesize_label(&flat("tarde", 0.0, "Fracos"));
        assert!(label <= 32.0);
        assert!(label >= 19.0);
    }

    #[test]
    fn wind_cools_the_estimate() {
        let calm = synthesize_label(&flat("tarde", 90.0, "Fracos"));
        let windy = synthesize_label(&flat("tarde", 90.0, "Fortes"));
        assert!(windy < calm);
    }

    #[test]
    fn label_records_preserves_order() {
        let labeled = label_records(vec![flat("manha", 100.0, "Fracos"), flat("noite", 100.0, "Fracos")]);
        assert_eq!(labeled.len(), 2);
        assert_eq!(labeled[0].flat.hour_numeric, 8.0);
        assert_eq!(labeled[1].flat.hour_numeric, 20.0);
    }
}
