use crate::domain::vehicle::fields::Field;
use crate::domain::vehicle::record::{FeatureRecord, RawRecord};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

/// Distinct values observed per column, in order of first appearance.
/// Backs the dropdowns of the pricing form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CarCatalog {
    pub car_models: Vec<String>,
    pub years: Vec<i32>,
    pub locations: Vec<String>,
    pub fuel_types: Vec<String>,
    pub transmissions: Vec<String>,
    pub mileage: Vec<u64>,
    pub engine: Vec<f64>,
    pub power: Vec<u64>,
    pub seats: Vec<u8>,
    pub new_price: Vec<String>,
    pub kilometers_driven: Vec<String>,
}

/// Accumulates a [`CarCatalog`] one listing at a time.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: CarCatalog,
    seen: HashSet<(Field, String)>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one validated listing. `raw` supplies the original text of
    /// the formatted columns (price and distance) so that catalog entries
    /// can be submitted back unchanged.
    pub fn observe(&mut self, raw: &RawRecord, record: &FeatureRecord) {
        let c = &mut self.catalog;
        let seen = &mut self.seen;

        push_distinct(seen, Field::Name, &mut c.car_models, record.name.clone());
        push_distinct(seen, Field::Year, &mut c.years, record.year);
        push_distinct(seen, Field::Location, &mut c.locations, record.location.clone());
        push_distinct(seen, Field::FuelType, &mut c.fuel_types, record.fuel_type.clone());
        push_distinct(
            seen,
            Field::Transmission,
            &mut c.transmissions,
            record.transmission.clone(),
        );
        push_distinct(seen, Field::Mileage, &mut c.mileage, record.mileage);
        push_distinct(seen, Field::Engine, &mut c.engine, record.engine);
        push_distinct(seen, Field::Power, &mut c.power, record.power);
        push_distinct(seen, Field::Seats, &mut c.seats, record.seats);
        push_distinct(
            seen,
            Field::NewPrice,
            &mut c.new_price,
            raw_text(raw, Field::NewPrice),
        );
        push_distinct(
            seen,
            Field::KilometersDriven,
            &mut c.kilometers_driven,
            raw_text(raw, Field::KilometersDriven),
        );
    }

    pub fn build(self) -> CarCatalog {
        self.catalog
    }
}

fn push_distinct<T: ToString>(
    seen: &mut HashSet<(Field, String)>,
    field: Field,
    values: &mut Vec<T>,
    value: T,
) {
    if seen.insert((field, value.to_string())) {
        values.push(value);
    }
}

fn raw_text(raw: &RawRecord, field: Field) -> String {
    match raw.get(field.key()) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
