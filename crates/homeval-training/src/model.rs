//! Least-squares linear regressor.
//!
//! The regression algorithm is deliberately unexciting: the interesting part
//! of this system is the train/serve-consistent feature pipeline, and any
//! supervised regressor with a `fit`/`predict` contract slots in here. We
//! solve ordinary least squares via SVD, which stays robust for tall design
//! matrices and is fully deterministic, so training twice on identical data
//! yields bit-identical coefficients.

use crate::error::{TrainingError, TrainingResult};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// A regressor mapping an encoded and scaled feature row to one estimate.
pub trait Regressor: Send + Sync {
    /// Predict a single value for one feature row.
    fn predict_row(&self, row: &[f64]) -> f64;
}

/// A fitted linear model: `y_hat = intercept + weights . row`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    intercept: f64,
    weights: Vec<f64>,
}

impl LinearModel {
    /// Fit by least squares over row-major features `x` and targets `y`.
    ///
    /// # Errors
    ///
    /// Returns [`TrainingError::Fit`] if the input is empty, ragged, or the
    /// design matrix is too ill-conditioned to solve.
    pub fn fit(x: &[Vec<f64>], y: &[f64]) -> TrainingResult<Self> {
        if x.is_empty() {
            return Err(TrainingError::fit("no training rows"));
        }
        if x.len() != y.len() {
            return Err(TrainingError::fit(format!(
                "feature rows ({}) and targets ({}) differ in length",
                x.len(),
                y.len()
            )));
        }
        let dim = x[0].len();
        if x.iter().any(|row| row.len() != dim) {
            return Err(TrainingError::fit("ragged feature rows"));
        }

        // Design matrix with a leading ones column for the intercept.
        let design = DMatrix::from_fn(x.len(), dim + 1, |r, c| {
            if c == 0 {
                1.0
            } else {
                x[r][c - 1]
            }
        });
        let targets = DVector::from_row_slice(y);

        let svd = design.svd(true, true);

        // Try progressively looser tolerances before giving up; collinear
        // feature columns can make the strict solve reject a usable system.
        for &tol in &[1e-10, 1e-8, 1e-6] {
            if let Ok(beta) = svd.solve(&targets, tol) {
                if beta.iter().all(|v| v.is_finite()) {
                    return Ok(Self {
                        intercept: beta[0],
                        weights: beta.iter().skip(1).copied().collect(),
                    });
                }
            }
        }

        Err(TrainingError::fit(
            "design matrix too ill-conditioned to solve",
        ))
    }

    /// The fitted intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// The fitted per-feature weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of features the model was fitted over.
    pub fn input_dim(&self) -> usize {
        self.weights.len()
    }
}

impl Regressor for LinearModel {
    fn predict_row(&self, row: &[f64]) -> f64 {
        self.intercept
            + self
                .weights
                .iter()
                .zip(row)
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }
}
