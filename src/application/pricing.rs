//! Request-path pipeline: validate, encode, assemble, scale, score.

use crate::application::ml::{ModelArtifacts, PriceModel};
use crate::domain::errors::{ModelError, ValidationError};
use crate::domain::ml::FeatureVector;
use crate::domain::vehicle::fields::CategoricalField;
use crate::domain::vehicle::record::{FeatureRecord, RawRecord};
use crate::domain::vehicle::validator;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Read-only scoring service over a set of fitted artifacts.
#[derive(Debug)]
pub struct PricePredictor {
    artifacts: ModelArtifacts,
}

impl PricePredictor {
    pub fn new(artifacts: ModelArtifacts) -> Self {
        Self { artifacts }
    }

    pub fn artifacts(&self) -> &ModelArtifacts {
        &self.artifacts
    }

    /// Message for the first problem in `raw`, `None` when well-formed.
    pub fn validate(&self, raw: &RawRecord) -> Option<String> {
        validator::validate(raw)
    }

    pub fn encode(&self, field: CategoricalField, value: &str) -> Result<u32, ValidationError> {
        self.artifacts.encoders.encode(field, value)
    }

    /// Validates `raw`, encodes its categories and assembles the unscaled
    /// feature vector.
    pub fn features(&self, raw: &RawRecord) -> Result<(FeatureRecord, FeatureVector), ValidationError> {
        let record = validator::parse_record(raw)?;
        let codes = self.artifacts.encoders.encode_record(&record)?;
        let vector = FeatureVector::assemble(&record, &codes);
        Ok((record, vector))
    }

    /// Scales an assembled vector and scores it.
    pub fn predict(&self, vector: &FeatureVector) -> Result<f64, ModelError> {
        let scaled = self.artifacts.scaler.transform(vector);
        self.artifacts.model.predict(&scaled)
    }

    pub fn predict_many(&self, vectors: &[FeatureVector]) -> Result<Vec<f64>, ModelError> {
        let scaled = self.artifacts.scaler.transform_all(vectors);
        self.artifacts.model.predict_batch(&scaled)
    }

    /// Full pipeline from an untyped payload to a price estimate.
    pub fn predict_raw(&self, raw: &RawRecord) -> Result<f64, PredictionError> {
        let (_, vector) = self.features(raw)?;
        Ok(self.predict(&vector)?)
    }

    pub fn model_name(&self) -> &str {
        self.artifacts.model.name()
    }
}
