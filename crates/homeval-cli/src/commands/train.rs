//! Train Command Implementation
//!
//! Fits the price model on a CSV dataset and exports the artifact bundle
//! (model, scaler, and category encoders) for the serving process.

use anyhow::Context;
use clap::Args;
use homeval_training::{train, TrainerConfig};

use crate::CliResult;
use std::path::PathBuf;
use tracing::info;

/// Fit the model on a CSV dataset and export the artifact bundle
///
/// Reads the training CSV, fits the category encoders, the feature
/// scaler, and the regression model on a deterministic train split,
/// evaluates on the held-out split, and writes the bundle to the
/// output directory.
///
/// # Example
///
/// ```bash
/// homeval train --data /path/to/train.csv --output /path/to/bundle
/// ```
#[derive(Args, Debug, Clone)]
pub struct TrainCommand {
    /// Path to the training CSV file
    #[arg(long, short = 'd', env = "HOMEVAL_DATA_PATH")]
    pub data: PathBuf,

    /// Directory to write the artifact bundle into
    #[arg(long, short = 'o', env = "HOMEVAL_BUNDLE_DIR")]
    pub output: PathBuf,

    /// Fraction of rows held out for evaluation
    #[arg(long, default_value = "0.2")]
    pub test_fraction: f64,

    /// Seed for the train/test shuffle
    #[arg(long, default_value = "42")]
    pub seed: u64,
}

impl TrainCommand {
    /// Execute the train command
    pub fn run(&self) -> CliResult<()> {
        info!(data = %self.data.display(), output = %self.output.display(), "Starting training");

        let config = TrainerConfig {
            data_path: self.data.clone(),
            output_dir: self.output.clone(),
            test_fraction: self.test_fraction,
            seed: self.seed,
        };
        let report = train(&config)
            .with_context(|| format!("training on {} failed", self.data.display()))?;

        info!(
            rows = report.rows,
            train_rows = report.train_rows,
            test_rows = report.test_rows,
            "Training complete"
        );
        match &report.metrics {
            Some(metrics) => info!(%metrics, "Held-out evaluation"),
            None => info!("Held-out split was empty, skipping evaluation"),
        }
        info!(bundle = %self.output.display(), "Bundle written");

        Ok(())
    }
}
