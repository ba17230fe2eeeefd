//! Regression evaluation metrics.
//!
//! Metrics are informational only; nothing gates on them. They are computed
//! on the held-out partition after fitting and logged alongside the saved
//! bundle.

use serde::{Deserialize, Serialize};

/// Metrics from evaluating a fitted regressor on a labeled partition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionMetrics {
    /// Mean absolute error.
    pub mae: f64,
    /// Mean squared error.
    pub mse: f64,
    /// Root mean squared error.
    pub rmse: f64,
    /// Coefficient of determination.
    pub r2: f64,
}

impl RegressionMetrics {
    /// Evaluate predictions against ground truth.
    ///
    /// Returns `None` for empty input. A zero-variance target yields an R²
    /// of 1.0 for a perfect fit and 0.0 otherwise.
    pub fn evaluate(actual: &[f64], predicted: &[f64]) -> Option<Self> {
        if actual.is_empty() || actual.len() != predicted.len() {
            return None;
        }

        let n = actual.len() as f64;
        let mae = actual
            .iter()
            .zip(predicted)
            .map(|(a, p)| (a - p).abs())
            .sum::<f64>()
            / n;
        let mse = actual
            .iter()
            .zip(predicted)
            .map(|(a, p)| (a - p).powi(2))
            .sum::<f64>()
            / n;

        let mean = actual.iter().sum::<f64>() / n;
        let ss_tot = actual.iter().map(|a| (a - mean).powi(2)).sum::<f64>();
        let ss_res = mse * n;
        let r2 = if ss_tot == 0.0 {
            if ss_res == 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - ss_res / ss_tot
        };

        Some(Self {
            mae,
            mse,
            rmse: mse.sqrt(),
            r2,
        })
    }
}

impl std::fmt::Display for RegressionMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MAE={:.4} MSE={:.4} RMSE={:.4} R2={:.4}",
            self.mae, self.mse, self.rmse, self.r2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_perfect_predictions() {
        let y = [1.0, 2.0, 3.0];
        let m = RegressionMetrics::evaluate(&y, &y).unwrap();
        assert_eq!(m.mae, 0.0);
        assert_eq!(m.mse, 0.0);
        assert_eq!(m.rmse, 0.0);
        assert_eq!(m.r2, 1.0);
    }

    #[test]
    fn test_known_values() {
        let actual = [3.0, -0.5, 2.0, 7.0];
        let predicted = [2.5, 0.0, 2.0, 8.0];

        let m = RegressionMetrics::evaluate(&actual, &predicted).unwrap();
        assert!((m.mae - 0.5).abs() < TOL);
        assert!((m.mse - 0.375).abs() < TOL);
        assert!((m.rmse - 0.375_f64.sqrt()).abs() < TOL);
        assert!((m.r2 - 0.9486081370449679).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input() {
        assert!(RegressionMetrics::evaluate(&[], &[]).is_none());
    }

    #[test]
    fn test_length_mismatch() {
        assert!(RegressionMetrics::evaluate(&[1.0], &[1.0, 2.0]).is_none());
    }

    #[test]
    fn test_constant_target() {
        let actual = [5.0, 5.0, 5.0];

        let perfect = RegressionMetrics::evaluate(&actual, &actual).unwrap();
        assert_eq!(perfect.r2, 1.0);

        let off = RegressionMetrics::evaluate(&actual, &[4.0, 5.0, 6.0]).unwrap();
        assert_eq!(off.r2, 0.0);
    }
}
