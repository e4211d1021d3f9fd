//! CLI argument definitions for the `tempcast` binary.

use clap::Parser;

/// Estimate the current temperature for each slot of a forecast's first day.
#[derive(Debug, Parser)]
#[command(name = "tempcast", version, about)]
pub struct Cli {
    /// Run on a generated table instead of the bundled one.
    #[arg(long)]
    pub sample: bool,

    /// Number of days in the generated table.
    #[arg(long, default_value_t = 6)]
    pub sample_days: usize,

    /// Seed for the generated table.
    #[arg(long, default_value_t = 7)]
    pub sample_seed: u64,

    /// Number of boosting stages.
    #[arg(long, default_value_t = 300)]
    pub estimators: usize,

    /// Learning rate (shrinkage per stage).
    #[arg(long, default_value_t = 0.05)]
    pub learning_rate: f64,

    /// Maximum tree depth.
    #[arg(long, default_value_t = 4)]
    pub max_depth: usize,

    /// Minimum training rows per leaf.
    #[arg(long, default_value_t = 3)]
    pub min_samples_leaf: usize,

    /// Fraction of rows drawn per stage (1.0 = deterministic full fit).
    #[arg(long, default_value_t = 1.0)]
    pub subsample: f64,

    /// Seed for the per-stage row sampler.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Emit the report as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}
