// Crop recommendation CLI
//
// Purpose: score a readings JSON file against the crop catalog and print
// the ranked matches.
// Usage: cargo run --bin recommend -- readings.json

use anyhow::{Context, Result};
use crop_matcher_rust::{recommend, FieldReadings};
use std::fs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: recommend <readings.json>")?;

    tracing::info!("Loading readings: {}", path);
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read readings file: {}", path))?;
    let readings: FieldReadings = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse readings JSON: {}", path))?;

    // Advisory only - the scorer accepts any numeric reading
    for (bounds, value) in readings.out_of_bounds() {
        tracing::warn!(
            "{} reading {} outside suggested range {}..{}",
            bounds.label,
            value,
            bounds.min,
            bounds.max
        );
    }
    if readings.soil.is_none() {
        tracing::warn!("No soil category selected - the soil match bonus will not apply");
    }

    let matches = recommend(&readings);

    println!("\nTop crop matches:");
    println!("{:<5} {:<18} {:>10}  {}", "Rank", "Crop", "Confidence", "Suitability");
    for (rank, m) in matches.iter().enumerate() {
        println!(
            "{:<5} {} {:<15} {:>10}  {}",
            rank + 1,
            m.glyph,
            m.display_name,
            m.confidence,
            m.suitability.display_text()
        );
    }

    Ok(())
}
