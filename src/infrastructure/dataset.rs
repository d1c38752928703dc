//! CSV loading for the training and test datasets.
//!
//! Cells stay raw text so that dataset rows go through the same validator
//! as request payloads.

use crate::domain::vehicle::fields::Field;
use crate::domain::vehicle::record::{Listing, RawRecord};
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

pub const PRICE_COLUMN: &str = "Price";

/// Cell spellings treated as missing values.
const MISSING_MARKERS: [&str; 5] = ["", "NA", "N/A", "NaN", "null"];

pub fn load_listings(path: &Path) -> Result<Vec<Listing>> {
    let file = File::open(path).with_context(|| format!("Failed to open dataset {:?}", path))?;
    let listings = read_listings(BufReader::new(file))
        .with_context(|| format!("Failed to read dataset {:?}", path))?;
    info!("Loaded {} rows from {:?}", listings.len(), path);
    Ok(listings)
}

/// Reads listings from CSV with a header row. Columns other than the
/// feature columns and `Price` are ignored.
pub fn read_listings<R: Read>(reader: R) -> Result<Vec<Listing>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().context("Missing header row")?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("Dataset has no '{}' column", name))
    };

    let columns = Field::ALL
        .iter()
        .map(|field| column(field.key()).map(|idx| (*field, idx)))
        .collect::<Result<Vec<_>>>()?;
    let price_idx = column(PRICE_COLUMN)?;

    let mut listings = Vec::new();
    for (line, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Malformed row {}", line + 1))?;

        let mut raw = RawRecord::new();
        for (field, idx) in &columns {
            if let Some(cell) = record.get(*idx).filter(|c| !is_missing(c)) {
                raw.insert(field.key().to_string(), Value::String(cell.to_string()));
            }
        }
        let price = record
            .get(price_idx)
            .filter(|c| !is_missing(c))
            .and_then(|c| c.parse::<f64>().ok());

        listings.push(Listing::new(raw, price));
    }

    Ok(listings)
}

fn is_missing(cell: &str) -> bool {
    MISSING_MARKERS.iter().any(|m| cell.eq_ignore_ascii_case(m))
}
