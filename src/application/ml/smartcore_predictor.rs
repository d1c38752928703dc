use super::predictor::PriceModel;
use crate::domain::errors::ModelError;
use crate::domain::ml::FeatureVector;
use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::{
    LinearRegression, LinearRegressionParameters, LinearRegressionSolverName,
};

type Regression = LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Ordinary least squares over standardized features, fitted with
/// SmartCore's SVD solver.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinearPriceModel {
    model: Regression,
}

impl std::fmt::Debug for LinearPriceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinearPriceModel").finish_non_exhaustive()
    }
}

impl LinearPriceModel {
    pub fn fit(rows: &[FeatureVector], targets: &[f64]) -> Result<Self, ModelError> {
        if rows.is_empty() {
            return Err(ModelError::EmptyDataset { dataset: "training" });
        }
        if rows.len() != targets.len() {
            return Err(ModelError::LengthMismatch {
                actual: targets.len(),
                predicted: rows.len(),
            });
        }

        let x = to_matrix(rows).map_err(|reason| ModelError::Fit { reason })?;
        let y = targets.to_vec();
        let params =
            LinearRegressionParameters::default().with_solver(LinearRegressionSolverName::SVD);

        let model = LinearRegression::fit(&x, &y, params).map_err(|e| ModelError::Fit {
            reason: e.to_string(),
        })?;
        Ok(Self { model })
    }
}

impl PriceModel for LinearPriceModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let predictions = self.predict_batch(std::slice::from_ref(features))?;
        predictions
            .first()
            .copied()
            .ok_or_else(|| ModelError::Prediction {
                reason: "No prediction returned".to_string(),
            })
    }

    fn predict_batch(&self, rows: &[FeatureVector]) -> Result<Vec<f64>, ModelError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let x = to_matrix(rows).map_err(|reason| ModelError::Prediction { reason })?;
        let predictions = self.model.predict(&x).map_err(|e| ModelError::Prediction {
            reason: e.to_string(),
        })?;

        match predictions.iter().find(|p| !p.is_finite()) {
            Some(value) => Err(ModelError::NonFinite { value: *value }),
            None => Ok(predictions),
        }
    }

    fn name(&self) -> &str {
        "SmartCore Linear Regression"
    }
}

fn to_matrix(rows: &[FeatureVector]) -> Result<DenseMatrix<f64>, String> {
    let values: Vec<Vec<f64>> = rows.iter().map(FeatureVector::to_vec).collect();
    DenseMatrix::from_2d_vec(&values).map_err(|e| format!("Matrix creation failed: {}", e))
}
