//! Feature derivation over the flattened record table.
//!
//! Responsibilities:
//!
//! - validate that every required raw field is present somewhere in the table
//!   (a field absent from *every* record is a schema-level defect and all
//!   such fields are reported at once)
//! - derive the numeric/angular/normalized feature fields for each record
//!
//! Derivation is per-record and independent: sub-slots of the same day may
//! carry different sunrise/sunset strings and each record computes its own
//! solar axis from its own values.

pub mod tables;

use std::f64::consts::PI;

use crate::domain::{FlatRecord, RawRecord};
use crate::error::PipelineError;
use self::tables::{HOUR_OF_DAY, WIND_DIRECTION_DEG, WIND_INTENSITY};

/// Raw fields the feature engine cannot work without.
pub const REQUIRED_FIELDS: [&str; 9] = [
    "temp_max", "temp_min", "umi_max", "umi_min", "hour", "dir_air", "int_air", "sunrise",
    "sunset",
];

/// Guards `solar_progress` against a zero-length day (sunrise == sunset).
const DAY_LENGTH_EPS: f64 = 1e-6;

/// Check that each required field is present in at least one record.
///
/// This is a field-set check, not a per-record one: a field only counts as
/// missing when no record in the table carries it. All missing fields are
/// reported together.
pub fn check_required_fields(records: &[RawRecord]) -> Result<(), PipelineError> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|&&field| !records.iter().any(|r| has_field(r, field)))
        .map(|&field| field.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PipelineError::MissingFields { fields: missing })
    }
}

/// Derive the full feature set for every record, in order.
pub fn derive_features(records: Vec<RawRecord>) -> Result<Vec<FlatRecord>, PipelineError> {
    check_required_fields(&records)?;
    records.into_iter().map(derive_record).collect()
}

/// Derive features for one record.
///
/// A record that individually lacks a value the table-level check saw
/// elsewhere fails here with the same missing-field error kind; typed
/// records do not carry NaN placeholders.
pub fn derive_record(raw: RawRecord) -> Result<FlatRecord, PipelineError> {
    let temp_max = require_f64(raw.temp_max, "temp_max")?;
    let temp_min = require_f64(raw.temp_min, "temp_min")?;
    let umi_max = require_f64(raw.umi_max, "umi_max")?;
    let umi_min = require_f64(raw.umi_min, "umi_min")?;
    let hour = require_str(raw.hour.as_deref(), "hour")?;
    let dir_air = require_str(raw.dir_air.as_deref(), "dir_air")?;
    let int_air = require_str(raw.int_air.as_deref(), "int_air")?;
    let sunrise = require_str(raw.sunrise.as_deref(), "sunrise")?;
    let sunset = require_str(raw.sunset.as_deref(), "sunset")?;

    let hour_numeric = HOUR_OF_DAY
        .lookup(hour)
        .ok_or_else(|| PipelineError::UnknownHour {
            value: hour.to_string(),
        })?;

    // The wind tables absorb unknown values by contract.
    let wind_dir_angle = WIND_DIRECTION_DEG.lookup(dir_air).unwrap_or(180.0);
    let wind_intensity = WIND_INTENSITY.lookup(int_air).unwrap_or(0.0);

    let angle_rad = wind_dir_angle * PI / 180.0;
    let sunrise_hour = hour_prefix(sunrise)?;
    let sunset_hour = hour_prefix(sunset)?;
    let day_length = sunset_hour - sunrise_hour;

    let solar_progress =
        ((hour_numeric - sunrise_hour) / (day_length + DAY_LENGTH_EPS)).clamp(0.0, 1.0);

    Ok(FlatRecord {
        temp_diff: temp_max - temp_min,
        umi_diff: umi_max - umi_min,
        hour_numeric,
        wind_dir_angle,
        wind_dir_sin: angle_rad.sin(),
        wind_dir_cos: angle_rad.cos(),
        wind_intensity,
        sunrise_hour,
        sunset_hour,
        day_length,
        solar_progress,
        raw,
    })
}

/// Parse the integer hour prefix of a `HHhMM` time string ("06h38" -> 6.0).
pub fn hour_prefix(time: &str) -> Result<f64, PipelineError> {
    let parse_error = || PipelineError::TimeParse {
        value: time.to_string(),
    };

    let (prefix, _) = time.split_once('h').ok_or_else(parse_error)?;
    if prefix.is_empty() || prefix.len() > 2 || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(parse_error());
    }
    prefix.parse::<u32>().map(f64::from).map_err(|_| parse_error())
}

fn has_field(record: &RawRecord, field: &str) -> bool {
    match field {
        "temp_max" => record.temp_max.is_some(),
        "temp_min" => record.temp_min.is_some(),
        "umi_max" => record.umi_max.is_some(),
        "umi_min" => record.umi_min.is_some(),
        "hour" => record.hour.is_some(),
        "dir_air" => record.dir_air.is_some(),
        "int_air" => record.int_air.is_some(),
        "sunrise" => record.sunrise.is_some(),
        "sunset" => record.sunset.is_some(),
        _ => false,
    }
}

fn require_f64(value: Option<f64>, field: &'static str) -> Result<f64, PipelineError> {
    value.ok_or_else(|| PipelineError::MissingFields {
        fields: vec![field.to_string()],
    })
}

fn require_str<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, PipelineError> {
    value.ok_or_else(|| PipelineError::MissingFields {
        fields: vec![field.to_string()],
    })
}
