//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - initializes logging
//! - selects the input table (bundled fixture or generated sample)
//! - runs the pipeline
//! - prints the report

use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::cli::Cli;
use crate::data::sample::{fixture_forecast, generate_forecast, SampleSpec};
use crate::domain::EstimatorParams;
use crate::error::PipelineError;
use crate::report::{format_report, format_run_summary};

pub mod pipeline;

/// Entry point for the `tempcast` binary.
pub fn run() -> Result<(), PipelineError> {
    let cli = Cli::parse();
    init_logging(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    let days = if cli.sample {
        generate_forecast(&SampleSpec {
            days: cli.sample_days,
            seed: cli.sample_seed,
        })
    } else {
        fixture_forecast()
    };

    let params = estimator_params_from_args(&cli);
    let output = pipeline::run_pipeline(&days, &params)?;

    if cli.json {
        match serde_json::to_string_pretty(&output.report) {
            Ok(text) => println!("{text}"),
            Err(e) => log::error!("failed to serialize report: {e}"),
        }
    } else {
        println!(
            "{}",
            format_run_summary(
                output.table.len(),
                output.partition.train.len(),
                &output.partition.holdout_day,
                &params
            )
        );
        println!("{}", format_report(&output.report));
    }

    Ok(())
}

pub fn estimator_params_from_args(cli: &Cli) -> EstimatorParams {
    EstimatorParams {
        n_estimators: cli.estimators,
        learning_rate: cli.learning_rate,
        max_depth: cli.max_depth,
        min_samples_leaf: cli.min_samples_leaf,
        subsample: cli.subsample,
        seed: cli.seed,
    }
}

/// Console logging on stderr; the report itself goes to stdout unformatted
/// by the logger.
fn init_logging(level: LevelFilter) {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level));

    // A second init (e.g. under tests) is harmless; keep whichever won.
    if let Ok(config) = config {
        let _ = log4rs::init_config(config);
    }
}
