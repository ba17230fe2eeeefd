//! Error types for the homeval-training crate.

use homeval_data::DataError;
use thiserror::Error;

/// Result type alias for training operations.
pub type TrainingResult<T> = Result<T, TrainingError>;

/// Errors that can occur while training or persisting artifacts.
#[derive(Debug, Error)]
pub enum TrainingError {
    /// Input data could not be ingested or transformed.
    #[error(transparent)]
    Data(#[from] DataError),

    /// The regressor could not be fitted.
    #[error("Failed to fit model: {0}")]
    Fit(String),

    /// An artifact could not be written or read back.
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// Artifact (de)serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrainingError {
    /// Create a fit error.
    pub fn fit(msg: impl Into<String>) -> Self {
        Self::Fit(msg.into())
    }

    /// Create an artifact error.
    pub fn artifact(msg: impl Into<String>) -> Self {
        Self::Artifact(msg.into())
    }
}
