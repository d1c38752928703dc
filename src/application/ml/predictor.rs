use crate::domain::errors::ModelError;
use crate::domain::ml::FeatureVector;

/// Interface for fitted regression models.
pub trait PriceModel: Send + Sync {
    /// Estimate the price for one already standardized feature vector.
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError>;

    /// Estimate prices for many standardized rows at once.
    fn predict_batch(&self, rows: &[FeatureVector]) -> Result<Vec<f64>, ModelError> {
        rows.iter().map(|row| self.predict(row)).collect()
    }

    /// Human-readable label for logs and reports.
    fn name(&self) -> &str;
}
