//! Fitted per-field standardization.

use crate::error::{DataError, DataResult};
use serde::{Deserialize, Serialize};

/// Mean and standard deviation captured for one field at fit time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldStats {
    /// Training-set mean.
    pub mean: f64,
    /// Training-set population standard deviation.
    pub std: f64,
}

/// A fitted standardizer: `transform(x) = (x - mean) / std` per field.
///
/// Statistics are captured once at training time and never recomputed;
/// recomputing at inference time would leak test-time statistics and break
/// the scale the model was trained against. Fields the scaler was not
/// fitted for pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-field statistics, in the order the fields were fitted.
    fields: Vec<(String, FieldStats)>,
}

impl StandardScaler {
    /// Fit a scaler over named columns of training values.
    ///
    /// A zero-variance column gets a divisor of 1.0 so the transform stays
    /// total (the column collapses to all zeros, same as the original
    /// standardizer).
    ///
    /// # Errors
    ///
    /// Returns [`DataError::EmptyFit`] if any column is empty.
    pub fn fit(columns: &[(&str, &[f64])]) -> DataResult<Self> {
        let mut fields = Vec::with_capacity(columns.len());
        for &(name, values) in columns {
            if values.is_empty() {
                return Err(DataError::EmptyFit(name.to_string()));
            }

            let n = values.len() as f64;
            let mean = values.iter().sum::<f64>() / n;
            let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
            let std = variance.sqrt();

            fields.push((name.to_string(), FieldStats { mean, std }));
        }
        Ok(Self { fields })
    }

    /// Statistics for a field, if the scaler was fitted for it.
    pub fn stats(&self, field: &str) -> Option<FieldStats> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, stats)| *stats)
    }

    /// The fields this scaler applies to, in fit order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Standardize one value. Unfitted fields pass through unchanged.
    pub fn transform(&self, field: &str, x: f64) -> f64 {
        match self.stats(field) {
            Some(FieldStats { mean, std }) => (x - mean) / Self::divisor(std),
            None => x,
        }
    }

    /// Invert [`Self::transform`]. Unfitted fields pass through unchanged.
    pub fn inverse(&self, field: &str, z: f64) -> f64 {
        match self.stats(field) {
            Some(FieldStats { mean, std }) => z * Self::divisor(std) + mean,
            None => z,
        }
    }

    /// Standardize a whole column in place.
    pub fn transform_column(&self, field: &str, values: &mut [f64]) {
        if let Some(FieldStats { mean, std }) = self.stats(field) {
            let divisor = Self::divisor(std);
            for v in values.iter_mut() {
                *v = (*v - mean) / divisor;
            }
        }
    }

    fn divisor(std: f64) -> f64 {
        if std == 0.0 {
            1.0
        } else {
            std
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_fit_stats() {
        let values = [2.0, 4.0, 6.0, 8.0];
        let scaler = StandardScaler::fit(&[("LotArea", &values)]).unwrap();

        let stats = scaler.stats("LotArea").unwrap();
        assert!((stats.mean - 5.0).abs() < TOL);
        assert!((stats.std - 5.0_f64.sqrt()).abs() < TOL);
    }

    #[test]
    fn test_fit_empty_column() {
        let err = StandardScaler::fit(&[("LotArea", &[])]).unwrap_err();
        assert!(matches!(err, DataError::EmptyFit(c) if c == "LotArea"));
    }

    #[test]
    fn test_transformed_column_is_standardized() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let scaler = StandardScaler::fit(&[("TotalBsmtSF", &values)]).unwrap();

        let mut transformed = values;
        scaler.transform_column("TotalBsmtSF", &mut transformed);

        let n = transformed.len() as f64;
        let mean = transformed.iter().sum::<f64>() / n;
        let var = transformed.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        assert!(mean.abs() < TOL);
        assert!((var - 1.0).abs() < TOL);
    }

    #[test]
    fn test_inverse_round_trip() {
        let values = [10.0, 20.0, 30.0];
        let scaler = StandardScaler::fit(&[("GarageCars", &values)]).unwrap();

        for x in [10.0, 17.5, 42.0] {
            let z = scaler.transform("GarageCars", x);
            assert!((scaler.inverse("GarageCars", z) - x).abs() < 1e-9);
        }
    }

    #[test]
    fn test_unfitted_field_passes_through() {
        let values = [1.0, 2.0];
        let scaler = StandardScaler::fit(&[("LotArea", &values)]).unwrap();

        assert_eq!(scaler.transform("HouseStyle", 3.0), 3.0);
        assert_eq!(scaler.inverse("HouseStyle", 3.0), 3.0);

        let mut column = [5.0, 6.0];
        scaler.transform_column("HouseStyle", &mut column);
        assert_eq!(column, [5.0, 6.0]);
    }

    #[test]
    fn test_zero_variance_column() {
        let values = [7.0, 7.0, 7.0];
        let scaler = StandardScaler::fit(&[("FullBath", &values)]).unwrap();

        assert_eq!(scaler.transform("FullBath", 7.0), 0.0);
        assert_eq!(scaler.inverse("FullBath", 0.0), 7.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let values = [1.0, 2.0, 3.0];
        let scaler = StandardScaler::fit(&[("LotArea", &values)]).unwrap();

        let json = serde_json::to_string(&scaler).unwrap();
        let restored: StandardScaler = serde_json::from_str(&json).unwrap();
        assert_eq!(scaler, restored);
    }
}
