//! Persistence for fitted model artifacts.
//!
//! The training command writes one JSON file per artifact into a directory;
//! the service reads them back once at startup.

use crate::application::ml::{ArtifactManifest, LinearPriceModel, ModelArtifacts};
use crate::domain::ml::{CategoryEncoders, StandardScaler};
use anyhow::{Context, Result, ensure};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const MODEL_FILE: &str = "model.json";
const SCALER_FILE: &str = "scaler.json";
const ENCODERS_FILE: &str = "encoders.json";
const MANIFEST_FILE: &str = "manifest.json";

/// Handles persistence of model artifacts to disk.
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Loads all artifacts. Any missing or unreadable file is an error.
    pub fn load(&self) -> Result<ModelArtifacts> {
        let manifest: ArtifactManifest = self.read(MANIFEST_FILE)?;
        ensure!(
            manifest.matches_feature_order(),
            "Artifacts in {:?} were fitted with feature order {:?}, which this build does not assemble",
            self.dir,
            manifest.feature_names
        );

        let artifacts = ModelArtifacts {
            encoders: self.read::<CategoryEncoders>(ENCODERS_FILE)?,
            scaler: self.read::<StandardScaler>(SCALER_FILE)?,
            model: self.read::<LinearPriceModel>(MODEL_FILE)?,
            manifest,
        };

        info!(
            "Loaded artifacts from {:?} (trained {} on {} rows)",
            self.dir, artifacts.manifest.trained_at, artifacts.manifest.training_rows
        );
        Ok(artifacts)
    }

    /// Saves all artifacts, creating the directory when needed.
    pub fn save(&self, artifacts: &ModelArtifacts) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create artifact directory {:?}", self.dir))?;

        self.write(ENCODERS_FILE, &artifacts.encoders)?;
        self.write(SCALER_FILE, &artifacts.scaler)?;
        self.write(MODEL_FILE, &artifacts.model)?;
        // Written last: a directory with a manifest holds a complete set.
        self.write(MANIFEST_FILE, &artifacts.manifest)?;

        info!("Saved artifacts to {:?}", self.dir);
        Ok(())
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<T> {
        let path = self.dir.join(file);
        let content =
            fs::read_to_string(&path).with_context(|| format!("Failed to read {:?}", path))?;
        serde_json::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
    }

    fn write<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        let path = self.dir.join(file);
        let content = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize {}", file))?;

        // Atomic write: write to temp file then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content).context("Failed to write temp file")?;
        fs::rename(&temp_path, &path).context("Failed to rename temp file")?;
        Ok(())
    }
}
