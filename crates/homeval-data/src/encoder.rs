//! Fitted categorical label -> integer code mappings.

use crate::error::{DataError, DataResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A fitted bijection from string labels to consecutive integer codes.
///
/// Codes are assigned in sorted label order, so fitting twice over the same
/// distinct values always yields the same mapping regardless of row order.
/// The mapping is immutable once fitted: encoding a label outside the fitted
/// vocabulary is an error, never a silent default code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEncoder {
    /// The categorical field this encoder was fitted for.
    field: String,
    /// Vocabulary in sorted order; a label's position is its code.
    labels: Vec<String>,
}

impl CategoryEncoder {
    /// Fit an encoder over the values observed for one categorical field.
    ///
    /// Duplicate values collapse into a single code.
    pub fn fit<I, S>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let distinct: BTreeSet<String> = values
            .into_iter()
            .map(|v| v.as_ref().to_string())
            .collect();

        Self {
            field: field.into(),
            labels: distinct.into_iter().collect(),
        }
    }

    /// The field this encoder applies to.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Number of codes in the fitted vocabulary.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Encode a label to its integer code.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::UnknownLabel`] if the label was not observed at
    /// fit time.
    pub fn encode(&self, label: &str) -> DataResult<usize> {
        self.labels
            .binary_search_by(|l| l.as_str().cmp(label))
            .map_err(|_| DataError::unknown_label(&self.field, label))
    }

    /// Decode an integer code back to its label.
    pub fn decode(&self, code: usize) -> Option<&str> {
        self.labels.get(code).map(String::as_str)
    }

    /// The fitted vocabulary in code order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Encode a whole column, failing on the first unknown label.
    pub fn encode_column<S: AsRef<str>>(&self, values: &[S]) -> DataResult<Vec<usize>> {
        values.iter().map(|v| self.encode(v.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_sorted_order() {
        let encoder = CategoryEncoder::fit("RoofStyle", ["Hip", "Gable", "Flat", "Gable"]);

        assert_eq!(encoder.len(), 3);
        assert_eq!(encoder.encode("Flat").unwrap(), 0);
        assert_eq!(encoder.encode("Gable").unwrap(), 1);
        assert_eq!(encoder.encode("Hip").unwrap(), 2);
    }

    #[test]
    fn test_fit_deterministic_across_row_order() {
        let a = CategoryEncoder::fit("HouseStyle", ["2Story", "1Story", "SLvl"]);
        let b = CategoryEncoder::fit("HouseStyle", ["SLvl", "2Story", "1Story"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let encoder = CategoryEncoder::fit("HouseStyle", ["2Story", "1Story", "1.5Fin"]);
        for label in encoder.labels().to_vec() {
            let code = encoder.encode(&label).unwrap();
            assert_eq!(encoder.decode(code), Some(label.as_str()));
        }
    }

    #[test]
    fn test_unknown_label_is_distinct_error() {
        let encoder = CategoryEncoder::fit("HouseStyle", ["2Story", "1Story"]);
        let err = encoder.encode("NotAStyle").unwrap_err();
        assert!(matches!(
            err,
            DataError::UnknownLabel { ref field, ref label }
                if field == "HouseStyle" && label == "NotAStyle"
        ));
    }

    #[test]
    fn test_decode_out_of_range() {
        let encoder = CategoryEncoder::fit("RoofStyle", ["Gable"]);
        assert_eq!(encoder.decode(0), Some("Gable"));
        assert_eq!(encoder.decode(1), None);
    }

    #[test]
    fn test_encode_column() {
        let encoder = CategoryEncoder::fit("RoofStyle", ["Hip", "Gable"]);
        let codes = encoder.encode_column(&["Gable", "Hip", "Gable"]).unwrap();
        assert_eq!(codes, vec![0, 1, 0]);

        assert!(encoder.encode_column(&["Gable", "Mansard"]).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let encoder = CategoryEncoder::fit("HouseStyle", ["2Story", "1Story"]);
        let json = serde_json::to_string(&encoder).unwrap();
        let restored: CategoryEncoder = serde_json::from_str(&json).unwrap();
        assert_eq!(encoder, restored);
    }
}
