//! Feature schema, dataset ingestion, and transforms for homeval.
//!
//! This crate owns everything that must be shared between the training and
//! serving processes so that the two cannot drift apart:
//!
//! - [`schema`] - the fixed feature column contract (names, order, kinds)
//! - [`dataset`] - CSV ingestion into an in-memory column-addressable table
//! - [`encoder`] - fitted categorical label -> integer code mappings
//! - [`scaler`] - fitted per-field standardization (zero mean, unit variance)
//!
//! The encoders and scaler are fitted once during training, serialized into
//! the artifact bundle, and applied verbatim at inference time. They are
//! immutable after fitting; there is no partial refit API.
//!
//! # Example
//!
//! ```
//! use homeval_data::encoder::CategoryEncoder;
//!
//! let encoder = CategoryEncoder::fit("HouseStyle", ["2Story", "1Story", "2Story"]);
//! assert_eq!(encoder.encode("1Story").unwrap(), 0);
//! assert_eq!(encoder.encode("2Story").unwrap(), 1);
//! assert!(encoder.encode("NotAStyle").is_err());
//! ```

pub mod dataset;
pub mod encoder;
pub mod error;
pub mod scaler;
pub mod schema;

pub use dataset::RawTable;
pub use encoder::CategoryEncoder;
pub use error::{DataError, DataResult};
pub use scaler::StandardScaler;
pub use schema::{
    CATEGORICAL_COLUMNS, FEATURE_COLUMNS, NUMERIC_COLUMNS, TARGET_COLUMN,
};
