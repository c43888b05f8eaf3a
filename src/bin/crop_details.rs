// Ideal-condition lookup CLI
//
// Purpose: print the catalog reference profile for one crop, or list the
// catalog when no identifier is given.
// Usage: cargo run --bin crop_details -- rice

use anyhow::Result;
use crop_matcher_rust::catalog::Crop;

fn main() -> Result<()> {
    let Some(key) = std::env::args().nth(1) else {
        println!("Known crops:");
        for &crop in Crop::all() {
            println!("  {} {:<14} ({})", crop.glyph(), crop.display_name(), crop);
        }
        return Ok(());
    };

    let crop: Crop = key.parse()?;
    let ideal = crop.profile();

    println!("{} {} - ideal conditions", crop.glyph(), crop.display_name());
    println!("  Nitrogen:    {} kg/ha", ideal.nitrogen);
    println!("  Phosphorus:  {} kg/ha", ideal.phosphorus);
    println!("  Potassium:   {} kg/ha", ideal.potassium);
    println!("  Temperature: {} °C", ideal.temperature);
    println!("  Rainfall:    {} mm", ideal.rainfall);
    println!("  pH:          {}", ideal.ph);
    println!("  Soil:        {}", ideal.soil.display_name());

    Ok(())
}
