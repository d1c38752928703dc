//! Field-by-field validation of raw listings.
//!
//! Fields are checked in column order and the first violation wins, so a
//! caller only ever sees one message per payload.

use crate::domain::errors::ValidationError;
use crate::domain::vehicle::fields::Field;
use crate::domain::vehicle::record::{FeatureRecord, RawRecord};
use serde_json::Value;

pub const MIN_YEAR: i64 = 1900;
pub const MAX_YEAR: i64 = 2024;
pub const MIN_SEATS: i64 = 1;
pub const MAX_SEATS: i64 = 9;

/// Returns the message describing the first problem with `raw`, or `None`
/// when it is a well-formed listing.
pub fn validate(raw: &RawRecord) -> Option<String> {
    parse_record(raw).err().map(|e| e.to_string())
}

/// Validates `raw` and converts it into a typed record.
pub fn parse_record(raw: &RawRecord) -> Result<FeatureRecord, ValidationError> {
    for field in Field::ALL {
        require(raw, field)?;
    }

    let name = text(raw, Field::Name)?;

    let year = integer(raw, Field::Year)?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(out_of_range(Field::Year));
    }

    let location = text(raw, Field::Location)?;
    let fuel_type = text(raw, Field::FuelType)?;
    let transmission = text(raw, Field::Transmission)?;

    let mileage = integer(raw, Field::Mileage)?;
    let mileage = u64::try_from(mileage).map_err(|_| out_of_range(Field::Mileage))?;

    let engine = real(raw, Field::Engine)?;
    if engine <= 0.0 {
        return Err(out_of_range(Field::Engine));
    }

    let power = integer(raw, Field::Power)?;
    let power = u64::try_from(power)
        .ok()
        .filter(|p| *p > 0)
        .ok_or(out_of_range(Field::Power))?;

    let seats = integer(raw, Field::Seats)?;
    if !(MIN_SEATS..=MAX_SEATS).contains(&seats) {
        return Err(out_of_range(Field::Seats));
    }

    let new_price = parse_currency(require(raw, Field::NewPrice)?).ok_or(ValidationError::InvalidFormat {
        field: Field::NewPrice,
    })?;
    if new_price <= 0.0 {
        return Err(out_of_range(Field::NewPrice));
    }

    let kilometers = parse_distance(require(raw, Field::KilometersDriven)?).ok_or(
        ValidationError::InvalidFormat {
            field: Field::KilometersDriven,
        },
    )?;
    let kilometers_driven =
        u64::try_from(kilometers).map_err(|_| out_of_range(Field::KilometersDriven))?;

    Ok(FeatureRecord {
        name,
        year: year as i32,
        location,
        fuel_type,
        transmission,
        mileage,
        engine,
        power,
        seats: seats as u8,
        new_price,
        kilometers_driven,
    })
}

fn out_of_range(field: Field) -> ValidationError {
    ValidationError::OutOfRange { field }
}

/// A JSON `null` is treated the same as an absent key.
fn require(raw: &RawRecord, field: Field) -> Result<&Value, ValidationError> {
    match raw.get(field.key()) {
        None | Some(Value::Null) => Err(ValidationError::MissingField { field }),
        Some(value) => Ok(value),
    }
}

fn text(raw: &RawRecord, field: Field) -> Result<String, ValidationError> {
    match require(raw, field)? {
        Value::String(s) => Ok(s.clone()),
        _ => Err(ValidationError::InvalidFormat { field }),
    }
}

fn integer(raw: &RawRecord, field: Field) -> Result<i64, ValidationError> {
    parse_integer(require(raw, field)?).ok_or(ValidationError::InvalidFormat { field })
}

fn real(raw: &RawRecord, field: Field) -> Result<f64, ValidationError> {
    parse_real(require(raw, field)?).ok_or(ValidationError::InvalidFormat { field })
}

fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_real(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite())
}

/// Parses `"₹12,50,000"`-style prices. A leading character that cannot
/// start a number is taken as the currency symbol and dropped.
fn parse_currency(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => strip_currency_symbol(s.trim())
            .replace(',', "")
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite()),
        other => parse_real(other),
    }
}

fn strip_currency_symbol(s: &str) -> &str {
    match s.chars().next() {
        Some(c) if !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+')) => &s[c.len_utf8()..],
        _ => s,
    }
}

/// Parses `"45,000 km"`-style distances.
fn parse_distance(value: &Value) -> Option<i64> {
    match value {
        Value::String(s) => strip_unit_suffix(s.trim())
            .replace(',', "")
            .trim()
            .parse()
            .ok(),
        other => parse_integer(other),
    }
}

fn strip_unit_suffix(s: &str) -> &str {
    let split = s.len().saturating_sub(2);
    match (s.get(..split), s.get(split..)) {
        (Some(head), Some(unit)) if unit.eq_ignore_ascii_case("km") => head.trim_end(),
        _ => s,
    }
}
