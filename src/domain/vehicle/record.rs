use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untyped listing as it arrives from a request body or a dataset row:
/// column key to raw JSON value.
pub type RawRecord = Map<String, Value>;

/// A car listing that passed validation. Field types carry the range
/// guarantees the validator checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub name: String,
    pub year: i32,
    pub location: String,
    pub fuel_type: String,
    pub transmission: String,
    pub mileage: u64,
    pub engine: f64,
    pub power: u64,
    pub seats: u8,
    pub new_price: f64,
    pub kilometers_driven: u64,
}

/// One row of a training or test dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub raw: RawRecord,
    pub price: Option<f64>,
}

impl Listing {
    pub fn new(raw: RawRecord, price: Option<f64>) -> Self {
        Self { raw, price }
    }

    /// Observed price, if present and usable as a regression target.
    pub fn target(&self) -> Option<f64> {
        self.price.filter(|p| p.is_finite())
    }
}
