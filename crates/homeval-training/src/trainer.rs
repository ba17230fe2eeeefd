//! The end-to-end training pipeline.
//!
//! Contract: given a CSV containing the eight feature columns plus the
//! target, produce an [`ArtifactBundle`] on disk and a report of held-out
//! metrics. Any missing column, unparseable numeric value, or I/O failure
//! aborts the run; there is no partial write and no retry.

use crate::artifact::ArtifactBundle;
use crate::error::{TrainingError, TrainingResult};
use crate::metrics::RegressionMetrics;
use crate::model::{LinearModel, Regressor};
use crate::split::train_test_split;
use homeval_data::schema::is_numeric;
use homeval_data::{
    CategoryEncoder, RawTable, StandardScaler, CATEGORICAL_COLUMNS, FEATURE_COLUMNS, TARGET_COLUMN,
};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{info, warn};

/// Default held-out fraction.
pub const DEFAULT_TEST_FRACTION: f64 = 0.2;
/// Default split seed.
pub const DEFAULT_SEED: u64 = 42;

/// Configuration for one training run.
#[derive(Debug, Clone)]
pub struct TrainerConfig {
    /// CSV file with a header row, the eight feature columns, and the target.
    pub data_path: PathBuf,
    /// Directory the artifact bundle is written into.
    pub output_dir: PathBuf,
    /// Fraction of rows held out for evaluation.
    pub test_fraction: f64,
    /// Seed for the deterministic train/test shuffle.
    pub seed: u64,
}

impl TrainerConfig {
    /// Create a config with the default split fraction and seed.
    pub fn new(data_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            output_dir: output_dir.into(),
            test_fraction: DEFAULT_TEST_FRACTION,
            seed: DEFAULT_SEED,
        }
    }
}

/// Summary of a completed training run.
#[derive(Debug, Clone)]
pub struct TrainingReport {
    /// Total data rows ingested.
    pub rows: usize,
    /// Rows the model was fitted on.
    pub train_rows: usize,
    /// Held-out rows.
    pub test_rows: usize,
    /// Held-out metrics; `None` when the test partition is empty.
    pub metrics: Option<RegressionMetrics>,
    /// Vocabulary size per fitted encoder.
    pub encoder_sizes: BTreeMap<String, usize>,
}

/// Run the full pipeline: ingest, fit transforms, fit model, evaluate,
/// persist.
pub fn train(config: &TrainerConfig) -> TrainingResult<TrainingReport> {
    // 1. Select exactly the feature columns plus target; drop all others.
    let mut required: Vec<&str> = FEATURE_COLUMNS.to_vec();
    required.push(TARGET_COLUMN);
    let table = RawTable::from_path(&config.data_path)?.select(&required)?;

    if table.is_empty() {
        return Err(TrainingError::fit("training table has no data rows"));
    }
    let n_rows = table.len();

    // 2. Fit one encoder per categorical column over its observed values.
    let mut encoders = BTreeMap::new();
    for col in CATEGORICAL_COLUMNS {
        let encoder = CategoryEncoder::fit(col, table.column(col)?);
        info!(field = col, vocabulary = encoder.len(), "Fitted encoder");
        encoders.insert(col.to_string(), encoder);
    }

    // 3. Materialize the feature matrix column by column, in schema order,
    //    and split off the target.
    let mut columns: Vec<Vec<f64>> = Vec::with_capacity(FEATURE_COLUMNS.len());
    for &col in &FEATURE_COLUMNS {
        match encoders.get(col) {
            Some(encoder) => {
                let codes = encoder.encode_column(&table.column(col)?)?;
                columns.push(codes.into_iter().map(|c| c as f64).collect());
            }
            None => columns.push(table.numeric_column(col)?),
        }
    }
    let target = table.numeric_column(TARGET_COLUMN)?;

    // 4-5. Fit the scaler over the numeric columns only, then standardize
    //      them in place. Categorical codes stay unscaled.
    let scaler = {
        let numeric: Vec<(&str, &[f64])> = FEATURE_COLUMNS
            .iter()
            .enumerate()
            .filter(|(_, col)| is_numeric(col))
            .map(|(idx, col)| (*col, columns[idx].as_slice()))
            .collect();
        StandardScaler::fit(&numeric)?
    };
    for (idx, &col) in FEATURE_COLUMNS.iter().enumerate() {
        scaler.transform_column(col, &mut columns[idx]);
    }

    let rows: Vec<Vec<f64>> = (0..n_rows)
        .map(|r| columns.iter().map(|c| c[r]).collect())
        .collect();

    // 6. Deterministic partition; the deployed model is fit on the train
    //    side, the test side is evaluation-only.
    let split = train_test_split(n_rows, config.test_fraction, config.seed);
    let train_x: Vec<Vec<f64>> = split.train.iter().map(|&i| rows[i].clone()).collect();
    let train_y: Vec<f64> = split.train.iter().map(|&i| target[i]).collect();

    // 7. Fit the regressor.
    let model = LinearModel::fit(&train_x, &train_y)?;

    // 8. Held-out metrics, informational only.
    let metrics = if split.test.is_empty() {
        warn!("Test partition is empty, skipping evaluation");
        None
    } else {
        let test_y: Vec<f64> = split.test.iter().map(|&i| target[i]).collect();
        let predicted: Vec<f64> = split
            .test
            .iter()
            .map(|&i| model.predict_row(&rows[i]))
            .collect();
        let metrics = RegressionMetrics::evaluate(&test_y, &predicted);
        if let Some(m) = &metrics {
            info!(mae = m.mae, mse = m.mse, rmse = m.rmse, r2 = m.r2, "Held-out evaluation");
        }
        metrics
    };

    // 9. Persist the bundle as three independent blobs.
    let encoder_sizes = encoders
        .iter()
        .map(|(name, e)| (name.clone(), e.len()))
        .collect();
    let bundle = ArtifactBundle {
        model,
        scaler,
        encoders,
    };
    bundle.save(&config.output_dir)?;

    Ok(TrainingReport {
        rows: n_rows,
        train_rows: split.train.len(),
        test_rows: split.test.len(),
        metrics,
        encoder_sizes,
    })
}
