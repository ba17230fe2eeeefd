//! Error types for the homeval-data crate.

use thiserror::Error;

/// Result type alias for data operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while ingesting or transforming data.
#[derive(Debug, Error)]
pub enum DataError {
    /// A required column is absent from the input table.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A cell could not be parsed as the expected type.
    #[error("Failed to parse column '{column}' at row {row}: {message}")]
    Parse {
        /// Column the bad value was found in.
        column: String,
        /// 1-based data row index (excluding the header).
        row: usize,
        /// What went wrong.
        message: String,
    },

    /// A categorical label was not present in the fitted vocabulary.
    #[error("Label '{label}' not recognized for field '{field}'")]
    UnknownLabel {
        /// The categorical field being encoded.
        field: String,
        /// The offending label.
        label: String,
    },

    /// Tried to fit a transform over an empty input.
    #[error("Cannot fit over empty input for field '{0}'")]
    EmptyFit(String),

    /// CSV-level read failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    /// Create a parse error.
    pub fn parse(column: impl Into<String>, row: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            column: column.into(),
            row,
            message: message.into(),
        }
    }

    /// Create an unknown-label error.
    pub fn unknown_label(field: impl Into<String>, label: impl Into<String>) -> Self {
        Self::UnknownLabel {
            field: field.into(),
            label: label.into(),
        }
    }

    /// Whether this error describes bad caller input rather than a fault in
    /// the pipeline itself.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingColumn(_) | Self::Parse { .. } | Self::UnknownLabel { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::MissingColumn("LotArea".to_string());
        assert_eq!(err.to_string(), "Missing required column: LotArea");

        let err = DataError::unknown_label("HouseStyle", "NotAStyle");
        assert_eq!(
            err.to_string(),
            "Label 'NotAStyle' not recognized for field 'HouseStyle'"
        );

        let err = DataError::parse("LotArea", 3, "invalid float literal");
        assert_eq!(
            err.to_string(),
            "Failed to parse column 'LotArea' at row 3: invalid float literal"
        );
    }

    #[test]
    fn test_is_input_error() {
        assert!(DataError::MissingColumn("x".to_string()).is_input_error());
        assert!(DataError::unknown_label("f", "l").is_input_error());
        assert!(DataError::parse("c", 1, "bad").is_input_error());

        let io = DataError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(!io.is_input_error());
    }
}
