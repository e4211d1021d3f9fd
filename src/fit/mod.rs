//! Estimator orchestration.
//!
//! Responsibilities:
//!
//! - assemble the fixed feature vector into a design matrix
//! - partition the table into the first-day holdout and the training rest
//! - fit the boosted ensemble and predict the held-out rows
//! - clamp predictions to each record's physical bounds
//!
//! The holdout is temporal, not random: every record sharing the first
//! record's `day_week` is predicted, everything else trains the model.

pub mod boost;
pub mod tree;

use log::debug;
use nalgebra::{DMatrix, DVector};

use crate::domain::{EstimatorParams, LabeledRecord, PredictedRecord};
use crate::error::PipelineError;
use crate::math::round1;
use self::boost::GradientBoost;

/// The estimator's feature vector, in column order.
pub const FEATURE_NAMES: [&str; 12] = [
    "temp_min",
    "temp_max",
    "temp_diff",
    "umi_min",
    "umi_max",
    "umi_diff",
    "hour_numeric",
    "wind_intensity",
    "wind_dir_sin",
    "wind_dir_cos",
    "solar_progress",
    "day_length",
];

/// First-day holdout partition (row indices into the labeled table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// The `day_week` value being predicted.
    pub holdout_day: String,
    pub train: Vec<usize>,
    pub holdout: Vec<usize>,
}

/// One record's feature row, in `FEATURE_NAMES` order.
pub fn feature_row(record: &LabeledRecord) -> [f64; 12] {
    let flat = &record.flat;
    [
        flat.temp_min(),
        flat.temp_max(),
        flat.temp_diff,
        flat.umi_min(),
        flat.umi_max(),
        flat.umi_diff,
        flat.hour_numeric,
        flat.wind_intensity,
        flat.wind_dir_sin,
        flat.wind_dir_cos,
        flat.solar_progress,
        flat.day_length,
    ]
}

/// Assemble the design matrix for the whole table (one row per record).
pub fn design_matrix(records: &[LabeledRecord]) -> DMatrix<f64> {
    let rows: Vec<[f64; 12]> = records.iter().map(feature_row).collect();
    DMatrix::from_fn(records.len(), FEATURE_NAMES.len(), |i, j| rows[i][j])
}

/// Split the table into held-out rows (first day) and training rows.
///
/// Fails when nothing is left to train on, i.e. every record shares the
/// first record's `day_week`.
pub fn split_by_first_day(records: &[LabeledRecord]) -> Result<Partition, PipelineError> {
    let holdout_day = records
        .first()
        .map(|r| r.flat.raw.day_week.clone())
        .unwrap_or_default();

    let (holdout, train): (Vec<usize>, Vec<usize>) =
        (0..records.len()).partition(|&i| records[i].flat.raw.day_week == holdout_day);

    if train.is_empty() {
        return Err(PipelineError::InsufficientData {
            day: holdout_day,
            n: records.len(),
        });
    }

    Ok(Partition {
        holdout_day,
        train,
        holdout,
    })
}

/// Split by first day, fit on the rest, and predict every held-out record.
pub fn fit_and_predict(
    records: &[LabeledRecord],
    params: &EstimatorParams,
) -> Result<Vec<PredictedRecord>, PipelineError> {
    let partition = split_by_first_day(records)?;
    Ok(predict_holdout(records, &partition, params))
}

/// Fit on the training rows of `partition` and predict its held-out rows.
///
/// Predictions are clamped to `[temp_min, temp_max]` and rounded to one
/// decimal; the raw model output is never trusted to respect the bounds.
/// Held-out records come back in their original table order.
pub fn predict_holdout(
    records: &[LabeledRecord],
    partition: &Partition,
    params: &EstimatorParams,
) -> Vec<PredictedRecord> {
    debug!(
        "fitting on {} records, predicting {} for day '{}'",
        partition.train.len(),
        partition.holdout.len(),
        partition.holdout_day
    );

    let x = design_matrix(records);
    let y = DVector::from_iterator(records.len(), records.iter().map(|r| r.temp_atual));

    let train_x = x.select_rows(partition.train.as_slice());
    let train_y = y.select_rows(partition.train.as_slice());
    let model = GradientBoost::fit(&train_x, &train_y, params);

    partition
        .holdout
        .iter()
        .map(|&row| {
            let labeled = records[row].clone();
            let bounds = (labeled.flat.temp_min(), labeled.flat.temp_max());
            let raw_estimate = model.predict_row(&x, row);
            PredictedRecord {
                temp_predicted: round1(raw_estimate.clamp(bounds.0, bounds.1)),
                labeled,
            }
        })
        .collect()
}
