//! Forecast table normalization.
//!
//! This module is responsible for turning the provider's heterogeneous nested
//! day list into a flat, ordered sequence of `RawRecord`s that is safe to
//! derive features from.
//!
//! Design goals:
//! - **Strict shapes**: an entry is a record or a sequence of records,
//!   nothing else (clear errors + exit code 2)
//! - **Order preservation**: days stay in chronological input order and the
//!   sub-slots of a day stay contiguous in their original slot order
//! - **Deterministic behavior** (no hidden reordering, no dropped entries)
//! - **Separation of concerns**: no feature logic here

use serde_json::Value;

use crate::domain::{ForecastEntry, RawRecord};
use crate::error::PipelineError;

/// Classify one top-level entry into the tagged day union.
///
/// The match is explicit: a JSON array is a multi-slot day, a JSON object is
/// a single-slot day, anything else is a schema violation. Array elements
/// must each decode as a record.
pub fn classify_entry(value: &Value) -> Result<ForecastEntry, PipelineError> {
    match value {
        Value::Array(items) => {
            let mut slots = Vec::with_capacity(items.len());
            for item in items {
                slots.push(record_from_value(item)?);
            }
            Ok(ForecastEntry::MultiSlotDay(slots))
        }
        Value::Object(_) => Ok(ForecastEntry::SingleSlotDay(record_from_value(value)?)),
        other => Err(PipelineError::Schema {
            detail: format!(
                "expected a forecast record or a sequence of records, got {}",
                json_type_name(other)
            ),
        }),
    }
}

/// Flatten classified entries into one ordered record sequence.
///
/// A sequence entry contributes one record per element, in element order; a
/// bare entry contributes exactly one record. No entry is dropped or
/// reordered, so the output length is the sum of sequence lengths plus the
/// count of bare entries.
pub fn flatten(entries: Vec<ForecastEntry>) -> Vec<RawRecord> {
    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry {
            ForecastEntry::MultiSlotDay(slots) => records.extend(slots),
            ForecastEntry::SingleSlotDay(record) => records.push(record),
        }
    }
    records
}

/// Normalize the raw forecast structure into a flat record table.
pub fn normalize(days: &[Value]) -> Result<Vec<RawRecord>, PipelineError> {
    let entries = days
        .iter()
        .map(classify_entry)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(flatten(entries))
}

fn record_from_value(value: &Value) -> Result<RawRecord, PipelineError> {
    if !value.is_object() {
        return Err(PipelineError::Schema {
            detail: format!(
                "expected a forecast record inside a sequence, got {}",
                json_type_name(value)
            ),
        });
    }
    serde_json::from_value(value.clone()).map_err(|e| PipelineError::Schema {
        detail: format!("record does not match the forecast schema: {e}"),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a record",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rec(day: &str, hour: &str) -> Value {
        json!({ "day_week": day, "hour": hour })
    }

    #[test]
    fn flatten_preserves_order_and_length() {
        let days = vec![
            json!([rec("Sexta-Feira", "manha"), rec("Sexta-Feira", "tarde")]),
            rec("Domingo", "noite"),
            json!([rec("Sábado", "noite")]),
        ];
        let records = normalize(&days).unwrap();

        assert_eq!(records.len(), 4);
        let hours: Vec<_> = records.iter().map(|r| r.hour.as_deref()).collect();
        assert_eq!(
            hours,
            vec![Some("manha"), Some("tarde"), Some("noite"), Some("noite")]
        );
        assert_eq!(records[2].day_week, "Domingo");
    }

    #[test]
    fn empty_sequence_entry_contributes_nothing() {
        let days = vec![json!([]), rec("Domingo", "noite")];
        let records = normalize(&days).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn scalar_entry_is_a_schema_error() {
        let days = vec![json!(42)];
        let err = normalize(&days).unwrap_err();
        assert!(matches!(err, PipelineError::Schema { .. }));
        assert!(err.to_string().contains("a number"));
    }

    #[test]
    fn non_record_sequence_element_is_a_schema_error() {
        let days = vec![json!(["noite"])];
        let err = normalize(&days).unwrap_err();
        assert!(matches!(err, PipelineError::Schema { .. }));
    }

    #[test]
    fn record_without_day_week_is_a_schema_error() {
        let days = vec![json!({ "hour": "noite" })];
        let err = normalize(&days).unwrap_err();
        assert!(matches!(err, PipelineError::Schema { .. }));
        assert!(err.to_string().contains("day_week"));
    }

    #[test]
    fn classify_matches_the_tag_explicitly() {
        let entry = classify_entry(&json!([rec("Sexta-Feira", "manha")])).unwrap();
        assert!(matches!(entry, ForecastEntry::MultiSlotDay(ref v) if v.len() == 1));

        let entry = classify_entry(&rec("Domingo", "noite")).unwrap();
        assert!(matches!(entry, ForecastEntry::SingleSlotDay(_)));
    }
}
