//! One-time artifact loading at process startup.
//!
//! The server refuses to start unless all three artifacts load and pass the
//! shape checks below; serving with a partially loaded bundle is never an
//! option. There is no hot reload or versioning - a new bundle means a new
//! process.

use crate::error::{ServingError, ServingResult};
use homeval_data::FEATURE_COLUMNS;
use homeval_training::ArtifactBundle;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Categorical fields the predictor encodes at request time.
///
/// `MSSubClass` also has a persisted encoder, but the serving path passes it
/// through raw; see [`crate::predictor`].
pub const REQUEST_ENCODED_FIELDS: [&str; 2] = ["HouseStyle", "RoofStyle"];

/// Load and validate the artifact bundle from `dir`.
///
/// # Errors
///
/// Returns [`ServingError::ArtifactLoad`] if any of the three blobs is
/// missing or corrupt, if a request-time encoder is absent, or if the model
/// dimensionality does not match the feature schema.
pub fn load_bundle(dir: impl AsRef<Path>) -> ServingResult<Arc<ArtifactBundle>> {
    let dir = dir.as_ref();
    let bundle =
        ArtifactBundle::load(dir).map_err(|e| ServingError::artifact_load(e.to_string()))?;

    for field in REQUEST_ENCODED_FIELDS {
        let encoder = bundle
            .encoder(field)
            .ok_or_else(|| ServingError::artifact_load(format!("no encoder for '{field}'")))?;
        if encoder.is_empty() {
            return Err(ServingError::artifact_load(format!(
                "encoder for '{field}' has an empty vocabulary"
            )));
        }
    }

    if bundle.model.input_dim() != FEATURE_COLUMNS.len() {
        return Err(ServingError::artifact_load(format!(
            "model expects {} features, schema has {}",
            bundle.model.input_dim(),
            FEATURE_COLUMNS.len()
        )));
    }

    info!(
        dir = %dir.display(),
        encoders = bundle.encoders.len(),
        "Loaded artifact bundle"
    );
    Ok(Arc::new(bundle))
}
