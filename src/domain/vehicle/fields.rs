use std::fmt;

/// Columns of a car listing, in the order the model was fitted on.
/// Any change to this order is a breaking change for saved artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Year,
    Location,
    FuelType,
    Transmission,
    Mileage,
    Engine,
    Power,
    Seats,
    NewPrice,
    KilometersDriven,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Name,
        Field::Year,
        Field::Location,
        Field::FuelType,
        Field::Transmission,
        Field::Mileage,
        Field::Engine,
        Field::Power,
        Field::Seats,
        Field::NewPrice,
        Field::KilometersDriven,
    ];

    /// Key used in request payloads and dataset headers.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Year => "Year",
            Field::Location => "Location",
            Field::FuelType => "Fuel_Type",
            Field::Transmission => "Transmission",
            Field::Mileage => "Mileage",
            Field::Engine => "Engine",
            Field::Power => "Power",
            Field::Seats => "Seats",
            Field::NewPrice => "New_Price",
            Field::KilometersDriven => "Kilometers_Driven",
        }
    }

    /// Human-readable name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::FuelType => "Fuel Type",
            Field::NewPrice => "New Price",
            Field::KilometersDriven => "Kilometers Driven",
            other => other.key(),
        }
    }

    pub fn is_categorical(self) -> bool {
        CategoricalField::from_field(self).is_some()
    }

    /// What a well-formed value looks like, for `InvalidFormat` messages.
    pub(crate) fn format_hint(self) -> &'static str {
        if self.is_categorical() {
            "It should be text."
        } else {
            "It should be a number."
        }
    }

    /// Domain rule, for `OutOfRange` messages.
    pub(crate) fn range_message(self) -> &'static str {
        match self {
            Field::Year => "Invalid Year. Year should be between 1900 and 2024.",
            Field::Mileage => "Invalid Mileage. Mileage should be a positive number.",
            Field::Engine => "Invalid Engine size. Engine size should be a positive number.",
            Field::Power => "Invalid Power. Power should be a positive number.",
            Field::Seats => "Invalid Seats. Seats should be between 1 and 9.",
            Field::NewPrice => "Invalid New Price. New Price should be a positive number.",
            Field::KilometersDriven => {
                "Invalid Kilometers Driven. Kilometers should be a positive number."
            }
            Field::Name | Field::Location | Field::FuelType | Field::Transmission => {
                "Invalid value."
            }
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The subset of columns that go through a label encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoricalField {
    Name,
    Location,
    FuelType,
    Transmission,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 4] = [
        CategoricalField::Name,
        CategoricalField::Location,
        CategoricalField::FuelType,
        CategoricalField::Transmission,
    ];

    pub fn field(self) -> Field {
        match self {
            CategoricalField::Name => Field::Name,
            CategoricalField::Location => Field::Location,
            CategoricalField::FuelType => Field::FuelType,
            CategoricalField::Transmission => Field::Transmission,
        }
    }

    pub fn from_field(field: Field) -> Option<Self> {
        match field {
            Field::Name => Some(CategoricalField::Name),
            Field::Location => Some(CategoricalField::Location),
            Field::FuelType => Some(CategoricalField::FuelType),
            Field::Transmission => Some(CategoricalField::Transmission),
            _ => None,
        }
    }
}

impl fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.field().fmt(f)
    }
}
