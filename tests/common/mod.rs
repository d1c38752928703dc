#![allow(dead_code)]

use carprice::domain::vehicle::record::{Listing, RawRecord};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

// Sorted, so the position in each list is the code the encoder assigns.
pub const NAMES: [&str; 5] = [
    "Honda City",
    "Hyundai i20",
    "Maruti Swift",
    "Tata Nexon",
    "Toyota Innova",
];
pub const LOCATIONS: [&str; 3] = ["Chennai", "Delhi", "Mumbai"];
pub const FUEL_TYPES: [&str; 2] = ["Diesel", "Petrol"];
pub const TRANSMISSIONS: [&str; 2] = ["Automatic", "Manual"];

/// One synthetic listing in numeric form.
#[derive(Debug, Clone, Copy)]
pub struct Car {
    pub name: usize,
    pub year: i64,
    pub location: usize,
    pub fuel_type: usize,
    pub transmission: usize,
    pub mileage: i64,
    pub engine: f64,
    pub power: i64,
    pub seats: i64,
    pub new_price: i64,
    pub kilometers_driven: i64,
}

impl Car {
    /// Deterministic car number `i`. Each column cycles with a different
    /// period so the design matrix has full rank.
    pub fn nth(i: usize) -> Self {
        let i64_of = |m: usize| (i % m) as i64;
        Self {
            name: i % 5,
            year: 2005 + i64_of(7),
            location: i % 3,
            fuel_type: (i / 2) % 2,
            transmission: (i / 3) % 2,
            mileage: 10 + i64_of(11),
            engine: 1000.0 + 100.0 * (i % 13) as f64,
            power: 60 + i64_of(17),
            seats: 4 + i64_of(4),
            new_price: 500_000 + 10_000 * i64_of(19),
            kilometers_driven: 10_000 + 1_000 * i64_of(23),
        }
    }

    /// Exact linear pricing rule over the encoded columns.
    pub fn price(&self) -> f64 {
        100.0
            + 3.0 * self.name as f64
            + 0.5 * (self.year - 2000) as f64
            + 2.0 * self.location as f64
            + 1.5 * self.fuel_type as f64
            + 4.0 * self.transmission as f64
            + 0.1 * self.mileage as f64
            + 0.002 * self.engine
            + 0.05 * self.power as f64
            + 0.3 * self.seats as f64
            + 0.00001 * self.new_price as f64
            + 0.0001 * self.kilometers_driven as f64
    }

    /// Payload in the textual formats the dataset files use.
    pub fn raw(&self) -> RawRecord {
        let value = json!({
            "Name": NAMES[self.name],
            "Year": self.year.to_string(),
            "Location": LOCATIONS[self.location],
            "Fuel_Type": FUEL_TYPES[self.fuel_type],
            "Transmission": TRANSMISSIONS[self.transmission],
            "Mileage": self.mileage.to_string(),
            "Engine": format!("{}", self.engine),
            "Power": self.power.to_string(),
            "Seats": self.seats.to_string(),
            "New_Price": format!("₹{}", with_commas(self.new_price)),
            "Kilometers_Driven": format!("{} km", with_commas(self.kilometers_driven)),
        });
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    pub fn listing(&self) -> Listing {
        Listing::new(self.raw(), Some(self.price()))
    }
}

pub fn listings(range: std::ops::Range<usize>) -> Vec<Listing> {
    range.map(|i| Car::nth(i).listing()).collect()
}

pub fn training_set() -> Vec<Listing> {
    listings(0..240)
}

pub fn test_set() -> Vec<Listing> {
    listings(240..300)
}

fn with_commas(value: i64) -> String {
    let digits = value.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Renders listings as a dataset file with a leading unnamed index column.
pub fn to_csv(listings: &[Listing]) -> String {
    const COLUMNS: [&str; 11] = [
        "Name",
        "Location",
        "Year",
        "Kilometers_Driven",
        "Fuel_Type",
        "Transmission",
        "Mileage",
        "Engine",
        "Power",
        "Seats",
        "New_Price",
    ];

    let mut out = format!(",{},Price\n", COLUMNS.join(","));
    for (idx, listing) in listings.iter().enumerate() {
        let cells: Vec<String> = COLUMNS
            .iter()
            .map(|col| match listing.raw.get(*col) {
                Some(Value::String(s)) => format!("\"{}\"", s),
                Some(other) => other.to_string(),
                None => String::new(),
            })
            .collect();
        let price = listing.price.map(|p| p.to_string()).unwrap_or_default();
        out.push_str(&format!("{},{},{}\n", idx, cells.join(","), price));
    }
    out
}

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn unique_temp_dir(label: &str) -> PathBuf {
    let unique_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "carprice_test_{}_{}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0),
        unique_id,
        label
    ))
}
