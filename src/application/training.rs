//! Offline fitting and held-out evaluation.

use crate::application::ml::{ArtifactManifest, LinearPriceModel, ModelArtifacts};
use crate::application::pricing::PricePredictor;
use crate::domain::errors::ModelError;
use crate::domain::ml::{CategoryEncoders, FeatureVector, RegressionMetrics, StandardScaler};
use crate::domain::vehicle::record::{FeatureRecord, Listing};
use crate::domain::vehicle::validator;
use tracing::{debug, info, warn};

/// Metrics over a held-out dataset plus how many rows were usable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub metrics: RegressionMetrics,
    pub rows: usize,
    pub skipped: usize,
}

pub struct Trainer;

impl Trainer {
    /// Fits encoders, scaler and model on the usable rows of `listings`.
    ///
    /// Rows with a missing price or a field that fails validation are
    /// dropped. The scaler is fitted exactly once, on the assembled
    /// training matrix.
    pub fn fit(listings: &[Listing]) -> Result<ModelArtifacts, ModelError> {
        let mut records: Vec<FeatureRecord> = Vec::with_capacity(listings.len());
        let mut targets: Vec<f64> = Vec::with_capacity(listings.len());

        for (row, listing) in listings.iter().enumerate() {
            let Some(price) = listing.target() else {
                debug!("Dropping training row {}: no price", row);
                continue;
            };
            match validator::parse_record(&listing.raw) {
                Ok(record) => {
                    records.push(record);
                    targets.push(price);
                }
                Err(e) => debug!("Dropping training row {}: {}", row, e),
            }
        }

        if records.is_empty() {
            return Err(ModelError::EmptyDataset { dataset: "training" });
        }
        let skipped = listings.len() - records.len();
        if skipped > 0 {
            warn!(
                "Dropped {} of {} training rows with missing or invalid values",
                skipped,
                listings.len()
            );
        }

        let encoders = CategoryEncoders::fit(&records);
        let vectors = records
            .iter()
            .map(|record| {
                encoders
                    .encode_record(record)
                    .map(|codes| FeatureVector::assemble(record, &codes))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ModelError::Fit {
                reason: e.to_string(),
            })?;

        let scaler = StandardScaler::fit(&vectors)?;
        let scaled = scaler.transform_all(&vectors);

        info!(
            "Fitting linear model on {} rows x {} features...",
            scaled.len(),
            crate::domain::ml::FEATURE_COUNT
        );
        let model = LinearPriceModel::fit(&scaled, &targets)?;

        Ok(ModelArtifacts {
            encoders,
            scaler,
            model,
            manifest: ArtifactManifest::new(records.len(), skipped),
        })
    }
}

/// Scores every usable row of `listings` and compares against its price.
///
/// Rows that fail validation, or whose categories were never seen in
/// training, are skipped rather than aborting the evaluation.
pub fn evaluate(predictor: &PricePredictor, listings: &[Listing]) -> Result<Evaluation, ModelError> {
    let mut vectors = Vec::with_capacity(listings.len());
    let mut actual = Vec::with_capacity(listings.len());

    for (row, listing) in listings.iter().enumerate() {
        let Some(price) = listing.target() else {
            continue;
        };
        match predictor.features(&listing.raw) {
            Ok((_, vector)) => {
                vectors.push(vector);
                actual.push(price);
            }
            Err(e) => debug!("Skipping evaluation row {}: {}", row, e),
        }
    }

    let skipped = listings.len() - vectors.len();
    if skipped > 0 {
        warn!(
            "Skipped {} of {} evaluation rows with missing, invalid or unseen values",
            skipped,
            listings.len()
        );
    }

    let predicted = predictor.predict_many(&vectors)?;
    let metrics = RegressionMetrics::compute(&actual, &predicted)?;

    Ok(Evaluation {
        metrics,
        rows: vectors.len(),
        skipped,
    })
}
