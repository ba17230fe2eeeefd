//! Offline training pipeline for homeval.
//!
//! Training is a single-threaded, one-shot batch job: read a labeled CSV,
//! fit the categorical encoders and the numeric scaler, fit the regressor on
//! a deterministic 80/20 partition, report held-out metrics, and persist the
//! artifact bundle the serving process loads at startup.
//!
//! # Modules
//!
//! - [`model`] - the least-squares linear regressor
//! - [`split`] - deterministic train/test partitioning
//! - [`metrics`] - regression evaluation metrics
//! - [`artifact`] - the persisted {model, scaler, encoders} bundle
//! - [`trainer`] - the end-to-end pipeline

pub mod artifact;
pub mod error;
pub mod metrics;
pub mod model;
pub mod split;
pub mod trainer;

pub use artifact::ArtifactBundle;
pub use error::{TrainingError, TrainingResult};
pub use metrics::RegressionMetrics;
pub use model::LinearModel;
pub use trainer::{train, TrainerConfig, TrainingReport};
