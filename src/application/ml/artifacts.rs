use super::smartcore_predictor::LinearPriceModel;
use crate::domain::ml::{CategoryEncoders, FEATURE_NAMES, StandardScaler};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the training phase produces and the service needs to score.
#[derive(Debug)]
pub struct ModelArtifacts {
    pub encoders: CategoryEncoders,
    pub scaler: StandardScaler,
    pub model: LinearPriceModel,
    pub manifest: ArtifactManifest,
}

/// Provenance written next to the fitted artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactManifest {
    pub trained_at: DateTime<Utc>,
    pub training_rows: usize,
    pub skipped_rows: usize,
    /// Column order the scaler and model were fitted with.
    pub feature_names: Vec<String>,
}

impl ArtifactManifest {
    pub fn new(training_rows: usize, skipped_rows: usize) -> Self {
        Self {
            trained_at: Utc::now(),
            training_rows,
            skipped_rows,
            feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// True when the artifacts were fitted with the column order this
    /// build assembles feature vectors in.
    pub fn matches_feature_order(&self) -> bool {
        self.feature_names.iter().map(String::as_str).eq(FEATURE_NAMES)
    }
}
