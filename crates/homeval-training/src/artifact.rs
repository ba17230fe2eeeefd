//! The persisted artifact bundle.
//!
//! Training writes three independently loadable JSON blobs into a bundle
//! directory; the serving process reads all three once at startup. The
//! format is an internal contract between the trainer and the server, not a
//! cross-language interchange format, but it must round-trip exactly:
//! fit -> save -> load -> predict gives the same output as fit -> predict.

use crate::error::{TrainingError, TrainingResult};
use crate::model::LinearModel;
use homeval_data::{CategoryEncoder, StandardScaler};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the serialized model.
pub const MODEL_FILE: &str = "model.json";
/// File name of the serialized scaler.
pub const SCALER_FILE: &str = "scaler.json";
/// File name of the serialized encoder map.
pub const ENCODERS_FILE: &str = "encoders.json";

/// The {model, scaler, encoders} triple produced by training and consumed by
/// inference.
///
/// Training exclusively creates and writes the bundle; the serving process
/// loads it once and holds it as read-only state for its lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactBundle {
    /// The fitted regressor.
    pub model: LinearModel,
    /// The fitted numeric scaler.
    pub scaler: StandardScaler,
    /// Fitted encoders keyed by categorical field name.
    pub encoders: BTreeMap<String, CategoryEncoder>,
}

impl ArtifactBundle {
    /// The encoder for a categorical field, if one was fitted.
    pub fn encoder(&self, field: &str) -> Option<&CategoryEncoder> {
        self.encoders.get(field)
    }

    /// Write the bundle as three independent files under `dir`.
    ///
    /// All three blobs are serialized before anything touches the
    /// filesystem, and the files are staged in a scratch directory that is
    /// renamed into place, so neither a serialization failure nor an I/O
    /// failure mid-write leaves a partial bundle at the final path. An
    /// existing bundle at `dir` is replaced.
    pub fn save(&self, dir: impl AsRef<Path>) -> TrainingResult<()> {
        let dir = dir.as_ref();

        let model_json = serde_json::to_string_pretty(&self.model)?;
        let scaler_json = serde_json::to_string_pretty(&self.scaler)?;
        let encoders_json = serde_json::to_string_pretty(&self.encoders)?;

        let staging = staging_path(dir)?;
        if staging.exists() {
            std::fs::remove_dir_all(&staging)?;
        }
        std::fs::create_dir_all(&staging)?;

        let result = write_staged(&staging, model_json, scaler_json, encoders_json)
            .and_then(|()| promote(&staging, dir));
        if let Err(err) = result {
            let _ = std::fs::remove_dir_all(&staging);
            return Err(err.into());
        }

        info!(dir = %dir.display(), "Saved artifact bundle");
        Ok(())
    }

    /// Load a bundle previously written by [`Self::save`].
    ///
    /// # Errors
    ///
    /// Returns [`TrainingError::Artifact`] naming the offending file when
    /// any of the three blobs is missing or corrupt. A partially readable
    /// bundle never loads.
    pub fn load(dir: impl AsRef<Path>) -> TrainingResult<Self> {
        let dir = dir.as_ref();

        let model = read_blob(dir, MODEL_FILE)?;
        let scaler = read_blob(dir, SCALER_FILE)?;
        let encoders = read_blob(dir, ENCODERS_FILE)?;

        Ok(Self {
            model,
            scaler,
            encoders,
        })
    }
}

/// Scratch directory the bundle is staged in before renaming into place.
fn staging_path(dir: &Path) -> TrainingResult<PathBuf> {
    let name = dir.file_name().ok_or_else(|| {
        TrainingError::artifact(format!("invalid bundle directory {}", dir.display()))
    })?;
    let mut staged = name.to_os_string();
    staged.push(".tmp");
    Ok(dir.with_file_name(staged))
}

fn write_staged(
    staging: &Path,
    model_json: String,
    scaler_json: String,
    encoders_json: String,
) -> std::io::Result<()> {
    std::fs::write(staging.join(MODEL_FILE), model_json)?;
    std::fs::write(staging.join(SCALER_FILE), scaler_json)?;
    std::fs::write(staging.join(ENCODERS_FILE), encoders_json)
}

fn promote(staging: &Path, dir: &Path) -> std::io::Result<()> {
    if dir.exists() {
        std::fs::remove_dir_all(dir)?;
    }
    std::fs::rename(staging, dir)
}

fn read_blob<T: serde::de::DeserializeOwned>(dir: &Path, file: &str) -> TrainingResult<T> {
    let path = dir.join(file);
    let raw = std::fs::read_to_string(&path)
        .map_err(|e| TrainingError::artifact(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|e| TrainingError::artifact(format!("cannot parse {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Regressor;
    use tempfile::tempdir;

    fn fixture_bundle() -> ArtifactBundle {
        let model = LinearModel::fit(
            &[vec![1.0, 0.0], vec![2.0, 1.0], vec![3.0, 0.0]],
            &[10.0, 20.0, 30.0],
        )
        .unwrap();
        let scaler = StandardScaler::fit(&[("LotArea", &[1.0, 2.0, 3.0])]).unwrap();
        let mut encoders = BTreeMap::new();
        encoders.insert(
            "HouseStyle".to_string(),
            CategoryEncoder::fit("HouseStyle", ["1Story", "2Story"]),
        );
        ArtifactBundle {
            model,
            scaler,
            encoders,
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let bundle = fixture_bundle();

        bundle.save(dir.path()).unwrap();
        let restored = ArtifactBundle::load(dir.path()).unwrap();

        assert_eq!(bundle, restored);
        // Round-tripped artifacts must predict identically.
        let row = [0.3, -1.2];
        assert_eq!(
            bundle.model.predict_row(&row),
            restored.model.predict_row(&row)
        );
    }

    #[test]
    fn test_blobs_independently_loadable() {
        let dir = tempdir().unwrap();
        fixture_bundle().save(dir.path()).unwrap();

        let model: TrainingResult<LinearModel> = read_blob(dir.path(), MODEL_FILE);
        assert!(model.is_ok());
        let scaler: TrainingResult<StandardScaler> = read_blob(dir.path(), SCALER_FILE);
        assert!(scaler.is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let bundle = fixture_bundle();
        bundle.save(dir.path()).unwrap();
        std::fs::remove_file(dir.path().join(SCALER_FILE)).unwrap();

        let err = ArtifactBundle::load(dir.path()).unwrap_err();
        assert!(matches!(err, TrainingError::Artifact(msg) if msg.contains(SCALER_FILE)));
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempdir().unwrap();
        fixture_bundle().save(dir.path()).unwrap();
        std::fs::write(dir.path().join(MODEL_FILE), "{not json").unwrap();

        let err = ArtifactBundle::load(dir.path()).unwrap_err();
        assert!(matches!(err, TrainingError::Artifact(msg) if msg.contains(MODEL_FILE)));
    }

    #[test]
    fn test_save_replaces_existing_bundle() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("bundle");

        fixture_bundle().save(&target).unwrap();
        std::fs::write(target.join("stray.txt"), "leftover").unwrap();

        let bundle = fixture_bundle();
        bundle.save(&target).unwrap();

        assert_eq!(ArtifactBundle::load(&target).unwrap(), bundle);
        assert!(!target.join("stray.txt").exists());
        assert!(!dir.path().join("bundle.tmp").exists());
    }

    #[test]
    fn test_save_failure_leaves_no_partial_bundle() {
        let dir = tempdir().unwrap();
        // A regular file occupies the final path, so promotion must fail.
        let target = dir.path().join("bundle");
        std::fs::write(&target, "occupied").unwrap();

        let err = fixture_bundle().save(&target).unwrap_err();
        assert!(matches!(err, TrainingError::Io(_)));

        // The occupying file is untouched and the staging directory is gone.
        assert!(target.is_file());
        assert!(!dir.path().join("bundle.tmp").exists());
        assert!(ArtifactBundle::load(&target).is_err());
    }

    #[test]
    fn test_encoder_accessor() {
        let bundle = fixture_bundle();
        assert!(bundle.encoder("HouseStyle").is_some());
        assert!(bundle.encoder("RoofStyle").is_none());
    }
}
