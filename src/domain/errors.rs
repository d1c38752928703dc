use crate::domain::vehicle::fields::{CategoricalField, Field};
use thiserror::Error;

/// Rejections of user input. Every variant renders as the single message
/// returned to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: Field },

    #[error("Invalid {} format. {}", .field.label(), .field.format_hint())]
    InvalidFormat { field: Field },

    #[error("{}", .field.range_message())]
    OutOfRange { field: Field },

    #[error("Unknown {} '{value}'. It was not seen in the training data.", .field.field().label())]
    UnknownCategory {
        field: CategoricalField,
        value: String,
    },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::InvalidFormat { field }
            | ValidationError::OutOfRange { field } => *field,
            ValidationError::UnknownCategory { field, .. } => field.field(),
        }
    }
}

/// Failures on the model side: fitting, evaluating or scoring.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("No usable rows in {dataset} dataset")]
    EmptyDataset { dataset: &'static str },

    #[error("Model fitting failed: {reason}")]
    Fit { reason: String },

    #[error("Prediction failed: {reason}")]
    Prediction { reason: String },

    #[error("Model produced a non-finite prediction: {value}")]
    NonFinite { value: f64 },

    #[error("Metric inputs differ in length: {actual} actual vs {predicted} predicted")]
    LengthMismatch { actual: usize, predicted: usize },
}
