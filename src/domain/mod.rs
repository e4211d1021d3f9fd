//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the raw forecast shapes (`ForecastEntry`, `RawRecord`)
//! - derived-feature records (`FlatRecord`)
//! - labeled and predicted records (`LabeledRecord`, `PredictedRecord`)
//! - estimator configuration (`EstimatorParams`)

pub mod types;

pub use types::*;
