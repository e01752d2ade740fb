//! Encoding `#[derive(Serialize)]` types.
//!
//! Run with: cargo run --example serde_types

use chrono::NaiveDate;
use serde::Serialize;
use serde_human::{to_value, Encoder};
use std::error::Error;

#[derive(Serialize)]
struct Release {
    name: String,
    date: NaiveDate,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    notes: Vec<String>,
    channel: Channel,
}

#[derive(Serialize)]
enum Channel {
    Stable,
    Preview { build: u32 },
}

fn main() -> Result<(), Box<dyn Error>> {
    let releases = vec![
        Release {
            name: "1.0".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).ok_or("invalid date")?,
            notes: vec!["first stable release".to_string()],
            channel: Channel::Stable,
        },
        Release {
            name: "1.1-rc1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 2).ok_or("invalid date")?,
            notes: vec![],
            channel: Channel::Preview { build: 42 },
        },
    ];

    let mut encoder = Encoder::new(std::io::stdout());
    encoder.encode_serialize(&releases)?;

    let value = to_value(&releases[0])?;
    println!("\nFirst release has {:?} fields", value.as_struct().map(|s| s.len()));

    Ok(())
}
