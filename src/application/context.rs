//! Startup wiring: everything request handlers share, built once.

use crate::application::pricing::PricePredictor;
use crate::application::training::{self, Evaluation};
use crate::config::DataEnvConfig;
use crate::domain::ml::RegressionMetrics;
use crate::domain::vehicle::catalog::{CarCatalog, CatalogBuilder};
use crate::domain::vehicle::record::Listing;
use crate::infrastructure::ArtifactStore;
use crate::infrastructure::dataset;
use anyhow::{Context, Result};
use tracing::info;

/// Read-only state shared by every request.
#[derive(Debug)]
pub struct AppContext {
    pub predictor: PricePredictor,
    pub catalog: CarCatalog,
    pub metrics: RegressionMetrics,
}

impl AppContext {
    /// Loads artifacts and datasets from the configured locations.
    /// Any failure here must keep the service from starting.
    pub fn load(config: &DataEnvConfig) -> Result<Self> {
        info!("Loading model artifacts from {:?}...", config.artifacts_dir);
        let artifacts = ArtifactStore::new(&config.artifacts_dir)
            .load()
            .context("Failed to load model artifacts")?;
        let predictor = PricePredictor::new(artifacts);

        let train = dataset::load_listings(&config.train_data_path)
            .context("Failed to load training dataset")?;
        let test = dataset::load_listings(&config.test_data_path)
            .context("Failed to load test dataset")?;

        Self::from_parts(predictor, &train, &test)
    }

    /// Builds the catalog from `train` and evaluates on `test`.
    pub fn from_parts(predictor: PricePredictor, train: &[Listing], test: &[Listing]) -> Result<Self> {
        let catalog = build_catalog(&predictor, train);
        info!(
            "Catalog ready: {} models, {} locations",
            catalog.car_models.len(),
            catalog.locations.len()
        );

        let Evaluation {
            metrics,
            rows,
            skipped,
        } = training::evaluate(&predictor, test).context("Failed to evaluate model on test dataset")?;
        info!(
            "Held-out evaluation on {} rows ({} skipped): MAE={:.4}, MSE={:.4}, R²={:.4}",
            rows, skipped, metrics.mean_absolute_error, metrics.mean_squared_error, metrics.r_squared
        );

        Ok(Self {
            predictor,
            catalog,
            metrics,
        })
    }
}

/// Distinct values of the training rows the predictor can score.
pub fn build_catalog(predictor: &PricePredictor, listings: &[Listing]) -> CarCatalog {
    let mut builder = CatalogBuilder::new();
    for listing in listings {
        if let Ok((record, _)) = predictor.features(&listing.raw) {
            builder.observe(&listing.raw, &record);
        }
    }
    builder.build()
}
