use crate::domain::errors::ModelError;
use serde::{Deserialize, Serialize};

/// Held-out regression quality of a fitted model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionMetrics {
    #[serde(rename = "Mean_Absolute_Error")]
    pub mean_absolute_error: f64,
    #[serde(rename = "Mean_Squared_Error")]
    pub mean_squared_error: f64,
    #[serde(rename = "R_squared")]
    pub r_squared: f64,
}

impl RegressionMetrics {
    pub fn compute(actual: &[f64], predicted: &[f64]) -> Result<Self, ModelError> {
        if actual.len() != predicted.len() {
            return Err(ModelError::LengthMismatch {
                actual: actual.len(),
                predicted: predicted.len(),
            });
        }
        if actual.is_empty() {
            return Err(ModelError::EmptyDataset { dataset: "evaluation" });
        }

        let n = actual.len() as f64;
        let mut abs_err = 0.0;
        let mut sq_err = 0.0;
        for (y, y_hat) in actual.iter().zip(predicted) {
            abs_err += (y - y_hat).abs();
            sq_err += (y - y_hat).powi(2);
        }

        let mean_y = actual.iter().sum::<f64>() / n;
        let ss_tot: f64 = actual.iter().map(|y| (y - mean_y).powi(2)).sum();
        let r_squared = if ss_tot > 0.0 {
            1.0 - sq_err / ss_tot
        } else if sq_err == 0.0 {
            1.0
        } else {
            0.0
        };

        Ok(Self {
            mean_absolute_error: abs_err / n,
            mean_squared_error: sq_err / n,
            r_squared,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let m = RegressionMetrics::compute(&[3.0, -0.5, 2.0, 7.0], &[2.5, 0.0, 2.0, 8.0]).unwrap();
        assert!((m.mean_absolute_error - 0.5).abs() < 1e-12);
        assert!((m.mean_squared_error - 0.375).abs() < 1e-12);
        assert!((m.r_squared - 0.948_608_137).abs() < 1e-6);
    }

    #[test]
    fn test_constant_target() {
        let perfect = RegressionMetrics::compute(&[4.0, 4.0], &[4.0, 4.0]).unwrap();
        assert_eq!(perfect.r_squared, 1.0);

        let off = RegressionMetrics::compute(&[4.0, 4.0], &[3.0, 5.0]).unwrap();
        assert_eq!(off.r_squared, 0.0);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            RegressionMetrics::compute(&[1.0], &[]),
            Err(ModelError::LengthMismatch { .. })
        ));
        assert!(matches!(
            RegressionMetrics::compute(&[], &[]),
            Err(ModelError::EmptyDataset { .. })
        ));
    }

    #[test]
    fn test_serialized_keys() {
        let m = RegressionMetrics {
            mean_absolute_error: 1.0,
            mean_squared_error: 2.0,
            r_squared: 0.5,
        };
        let json = serde_json::to_value(m).unwrap();
        assert_eq!(json["Mean_Absolute_Error"], 1.0);
        assert_eq!(json["Mean_Squared_Error"], 2.0);
        assert_eq!(json["R_squared"], 0.5);
    }
}
