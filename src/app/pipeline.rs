//! Shared pipeline logic used by the CLI front-end and by tests.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! normalize -> derive features -> synthesize labels -> fit + predict -> report
//!
//! The pipeline is a strict linear sequence: any stage error aborts the run
//! and propagates unchanged. Each invocation builds its own table and model
//! instance; nothing is shared or cached across runs, so independent runs
//! are safe to execute in parallel.

use log::{debug, info};
use serde_json::Value;

use crate::domain::{EstimatorParams, LabeledRecord, PredictedRecord};
use crate::error::PipelineError;
use crate::features::derive_features;
use crate::fit::{predict_holdout, split_by_first_day, Partition};
use crate::ingest::normalize;
use crate::label::label_records;
use crate::report::{project, ReportRow};

/// All computed outputs of a single pipeline run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// The full labeled table, in input order.
    pub table: Vec<LabeledRecord>,
    /// Train/holdout row split actually used.
    pub partition: Partition,
    /// Held-out records with estimates attached, in input order.
    pub predicted: Vec<PredictedRecord>,
    /// The reported projection of `predicted`.
    pub report: Vec<ReportRow>,
}

/// Execute the full pipeline on an already-parsed forecast structure.
pub fn run_pipeline(
    days: &[Value],
    params: &EstimatorParams,
) -> Result<RunOutput, PipelineError> {
    let records = normalize(days)?;
    debug!("normalized {} day entries into {} records", days.len(), records.len());

    let table = label_records(derive_features(records)?);
    let partition = split_by_first_day(&table)?;
    let predicted = predict_holdout(&table, &partition, params);
    let report = project(&predicted);

    info!(
        "estimated {} slot(s) for '{}' from {} training records",
        report.len(),
        partition.holdout_day,
        partition.train.len()
    );

    Ok(RunOutput {
        table,
        partition,
        predicted,
        report,
    })
}
