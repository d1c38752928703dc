use crate::domain::ml::encoder::EncodedCategories;
use crate::domain::vehicle::fields::Field;
use crate::domain::vehicle::record::FeatureRecord;
use serde::{Deserialize, Serialize};

pub const FEATURE_COUNT: usize = Field::ALL.len();

/// Ordered list of feature names.
/// This order MUST match the order the model was fitted with.
/// Any change here is a breaking change for saved artifacts.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Name",
    "Year",
    "Location",
    "Fuel_Type",
    "Transmission",
    "Mileage",
    "Engine",
    "Power",
    "Seats",
    "New_Price",
    "Kilometers_Driven",
];

/// Model input for one listing. The length is fixed by the type, so a
/// vector with the wrong dimensionality cannot reach the scaler or model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Combines encoded categories and parsed numbers in column order.
    pub fn assemble(record: &FeatureRecord, codes: &EncodedCategories) -> Self {
        Self([
            f64::from(codes.name),
            f64::from(record.year),
            f64::from(codes.location),
            f64::from(codes.fuel_type),
            f64::from(codes.transmission),
            record.mileage as f64,
            record.engine,
            record.power as f64,
            f64::from(record.seats),
            record.new_price,
            record.kilometers_driven as f64,
        ])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }
}
