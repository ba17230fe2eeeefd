//! Error types for the homeval-serving crate.
//!
//! The taxonomy separates caller input errors (reported synchronously,
//! never fatal) from artifact errors (fatal at startup) from internal
//! faults. The unrecognized-label case gets its own variant so it is never
//! conflated with a generic server error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use homeval_data::DataError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for serving operations.
pub type ServingResult<T> = Result<T, ServingError>;

/// Errors that can occur in the serving process.
#[derive(Debug, Error)]
pub enum ServingError {
    /// The artifact bundle could not be loaded at startup.
    #[error("Failed to load artifact bundle: {0}")]
    ArtifactLoad(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A request field is missing or has the wrong type.
    #[error("Invalid field '{field}': {message}")]
    InvalidField {
        /// The offending form field.
        field: String,
        /// What went wrong.
        message: String,
    },

    /// A categorical label was not in the fitted vocabulary.
    #[error("Label '{label}' not recognized for field '{field}'")]
    UnknownLabel {
        /// The categorical field being encoded.
        field: String,
        /// The offending label.
        label: String,
    },

    /// The request lacks a valid login session.
    #[error("Not logged in")]
    Unauthorized,

    /// Username/password pair did not match a registered user.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The username is already registered.
    #[error("Username '{0}' already exists")]
    UsernameTaken(String),

    /// No house record with the given id.
    #[error("No house with id {0}")]
    NotFound(i64),

    /// Internal error.
    #[error("Server error: {0}")]
    Server(String),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServingError {
    /// Create an artifact load error.
    pub fn artifact_load(msg: impl Into<String>) -> Self {
        Self::ArtifactLoad(msg.into())
    }

    /// Create a config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid-field error.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an internal server error.
    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    /// Whether this error describes bad caller input (never fatal).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidField { .. }
                | Self::UnknownLabel { .. }
                | Self::Unauthorized
                | Self::InvalidCredentials
                | Self::UsernameTaken(_)
                | Self::NotFound(_)
        )
    }

    /// The HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidField { .. } => StatusCode::BAD_REQUEST,
            Self::UnknownLabel { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unauthorized | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::UsernameTaken(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ArtifactLoad(_) | Self::Config(_) | Self::Server(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<DataError> for ServingError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::UnknownLabel { field, label } => Self::UnknownLabel { field, label },
            DataError::Parse { column, message, .. } => Self::InvalidField {
                field: column,
                message,
            },
            DataError::MissingColumn(column) => Self::InvalidField {
                field: column,
                message: "missing".to_string(),
            },
            other => Self::Server(other.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ServingError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ServingError::UnknownLabel {
            field: "HouseStyle".to_string(),
            label: "NotAStyle".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Label 'NotAStyle' not recognized for field 'HouseStyle'"
        );

        let err = ServingError::invalid_field("LotArea", "invalid float literal");
        assert_eq!(err.to_string(), "Invalid field 'LotArea': invalid float literal");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(ServingError::Unauthorized.is_client_error());
        assert!(ServingError::NotFound(7).is_client_error());
        assert!(ServingError::UsernameTaken("bob".to_string()).is_client_error());
        assert!(!ServingError::artifact_load("gone").is_client_error());
        assert!(!ServingError::server("boom").is_client_error());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ServingError::invalid_field("LotArea", "bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        let label_err = ServingError::UnknownLabel {
            field: "RoofStyle".to_string(),
            label: "x".to_string(),
        };
        assert_eq!(label_err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            ServingError::artifact_load("gone").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unknown_label_from_data_error() {
        let data_err = DataError::unknown_label("HouseStyle", "NotAStyle");
        let serving: ServingError = data_err.into();
        assert!(matches!(serving, ServingError::UnknownLabel { .. }));
    }
}
