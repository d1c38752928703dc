use crate::domain::errors::ValidationError;
use crate::domain::vehicle::fields::CategoricalField;
use crate::domain::vehicle::record::FeatureRecord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Immutable mapping between the labels seen in training and dense codes.
///
/// Codes follow the sorted order of the labels: code `i` is the `i`-th
/// smallest label. Lookups of unseen labels fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CategoryEncoder {
    classes: Vec<String>,
    codes: HashMap<String, u32>,
}

impl CategoryEncoder {
    /// Builds the vocabulary from every label observed in training.
    pub fn fit<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let classes: BTreeSet<String> = labels.into_iter().map(Into::into).collect();
        Self::from_sorted(classes.into_iter().collect())
    }

    fn from_sorted(classes: Vec<String>) -> Self {
        let codes = classes
            .iter()
            .enumerate()
            .map(|(code, label)| (label.clone(), code as u32))
            .collect();
        Self { classes, codes }
    }

    pub fn code(&self, label: &str) -> Option<u32> {
        self.codes.get(label).copied()
    }

    pub fn label(&self, code: u32) -> Option<&str> {
        self.classes.get(code as usize).map(String::as_str)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl TryFrom<Vec<String>> for CategoryEncoder {
    type Error = String;

    fn try_from(classes: Vec<String>) -> Result<Self, Self::Error> {
        if classes.windows(2).any(|w| w[0] >= w[1]) {
            return Err("encoder classes must be sorted and unique".to_string());
        }
        Ok(Self::from_sorted(classes))
    }
}

impl From<CategoryEncoder> for Vec<String> {
    fn from(encoder: CategoryEncoder) -> Self {
        encoder.classes
    }
}

/// Codes of the four categorical columns of one listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedCategories {
    pub name: u32,
    pub location: u32,
    pub fuel_type: u32,
    pub transmission: u32,
}

/// One fitted encoder per categorical column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEncoders {
    pub name: CategoryEncoder,
    pub location: CategoryEncoder,
    pub fuel_type: CategoryEncoder,
    pub transmission: CategoryEncoder,
}

impl CategoryEncoders {
    pub fn fit(records: &[FeatureRecord]) -> Self {
        Self {
            name: CategoryEncoder::fit(records.iter().map(|r| r.name.as_str())),
            location: CategoryEncoder::fit(records.iter().map(|r| r.location.as_str())),
            fuel_type: CategoryEncoder::fit(records.iter().map(|r| r.fuel_type.as_str())),
            transmission: CategoryEncoder::fit(records.iter().map(|r| r.transmission.as_str())),
        }
    }

    pub fn get(&self, field: CategoricalField) -> &CategoryEncoder {
        match field {
            CategoricalField::Name => &self.name,
            CategoricalField::Location => &self.location,
            CategoricalField::FuelType => &self.fuel_type,
            CategoricalField::Transmission => &self.transmission,
        }
    }

    /// Looks up the code of `value` in the vocabulary of `field`.
    pub fn encode(&self, field: CategoricalField, value: &str) -> Result<u32, ValidationError> {
        self.get(field)
            .code(value)
            .ok_or_else(|| ValidationError::UnknownCategory {
                field,
                value: value.to_string(),
            })
    }

    /// Encodes all categorical columns, failing on the first unseen label
    /// in column order.
    pub fn encode_record(&self, record: &FeatureRecord) -> Result<EncodedCategories, ValidationError> {
        Ok(EncodedCategories {
            name: self.encode(CategoricalField::Name, &record.name)?,
            location: self.encode(CategoricalField::Location, &record.location)?,
            fuel_type: self.encode(CategoricalField::FuelType, &record.fuel_type)?,
            transmission: self.encode(CategoricalField::Transmission, &record.transmission)?,
        })
    }
}
