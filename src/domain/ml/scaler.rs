use crate::domain::errors::ModelError;
use crate::domain::ml::feature_registry::{FEATURE_COUNT, FeatureVector};
use serde::{Deserialize, Serialize};

/// Per-feature standardization with statistics frozen at fit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: [f64; FEATURE_COUNT],
    /// Population standard deviation; 1.0 for constant features.
    pub scale: [f64; FEATURE_COUNT],
}

impl StandardScaler {
    pub fn fit(rows: &[FeatureVector]) -> Result<Self, ModelError> {
        if rows.is_empty() {
            return Err(ModelError::EmptyDataset { dataset: "training" });
        }
        let n = rows.len() as f64;

        let mut mean = [0.0; FEATURE_COUNT];
        for row in rows {
            for (m, x) in mean.iter_mut().zip(row.as_slice()) {
                *m += x;
            }
        }
        for m in mean.iter_mut() {
            *m /= n;
        }

        let mut scale = [0.0; FEATURE_COUNT];
        for row in rows {
            for ((s, x), m) in scale.iter_mut().zip(row.as_slice()).zip(&mean) {
                *s += (x - m).powi(2);
            }
        }
        for s in scale.iter_mut() {
            let std_dev = (*s / n).sqrt();
            *s = if std_dev > f64::EPSILON { std_dev } else { 1.0 };
        }

        Ok(Self { mean, scale })
    }

    pub fn transform(&self, row: &FeatureVector) -> FeatureVector {
        let mut out = row.0;
        for ((x, m), s) in out.iter_mut().zip(&self.mean).zip(&self.scale) {
            *x = (*x - m) / s;
        }
        FeatureVector(out)
    }

    pub fn transform_all(&self, rows: &[FeatureVector]) -> Vec<FeatureVector> {
        rows.iter().map(|row| self.transform(row)).collect()
    }
}
