//! Crop Catalog
//!
//! Closed enumerations for the 22 reference crops and 7 soil categories,
//! plus the immutable ideal-condition table keyed by crop. The table is an
//! exhaustive enum match, so every crop is guaranteed an entry at compile
//! time and the catalog cannot grow or shrink at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Parse failure for crop/soil identifier strings.
///
/// Unknown identifiers can only enter through an external string boundary
/// (CLI arguments, JSON); inside the crate both catalogs are closed enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown crop identifier: {0}")]
    UnknownCrop(String),

    #[error("unknown soil category: {0}")]
    UnknownSoil(String),
}

/// Soil categories recognized by the catalog.
///
/// A query soil is compared against a crop's reference soil by exact
/// category equality. Similarly named categories (e.g. Sandy vs Sandy Loam)
/// earn no partial credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilKind {
    Clay,
    ClayLoam,
    Loam,
    SandyLoam,
    Sandy,
    WellDrained,
    Volcanic,
}

impl SoilKind {
    /// Wire/string key (matches the serde form)
    pub fn key(self) -> &'static str {
        match self {
            SoilKind::Clay => "clay",
            SoilKind::ClayLoam => "clay_loam",
            SoilKind::Loam => "loam",
            SoilKind::SandyLoam => "sandy_loam",
            SoilKind::Sandy => "sandy",
            SoilKind::WellDrained => "well_drained",
            SoilKind::Volcanic => "volcanic",
        }
    }

    /// Friendly name for display
    pub fn display_name(self) -> &'static str {
        match self {
            SoilKind::Clay => "Clay",
            SoilKind::ClayLoam => "Clay Loam",
            SoilKind::Loam => "Loam",
            SoilKind::SandyLoam => "Sandy Loam",
            SoilKind::Sandy => "Sandy",
            SoilKind::WellDrained => "Well-drained",
            SoilKind::Volcanic => "Volcanic",
        }
    }

    /// All soil categories
    pub fn all() -> &'static [SoilKind] {
        &[
            SoilKind::Clay,
            SoilKind::ClayLoam,
            SoilKind::Loam,
            SoilKind::SandyLoam,
            SoilKind::Sandy,
            SoilKind::WellDrained,
            SoilKind::Volcanic,
        ]
    }
}

impl fmt::Display for SoilKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SoilKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoilKind::all()
            .iter()
            .copied()
            .find(|soil| soil.key() == s)
            .ok_or_else(|| ParseError::UnknownSoil(s.to_string()))
    }
}

/// The 22 catalog crops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Rice,
    Maize,
    Chickpea,
    KidneyBeans,
    PigeonPeas,
    MothBeans,
    MungBean,
    BlackGram,
    Lentil,
    Pomegranate,
    Banana,
    Mango,
    Grapes,
    Watermelon,
    Muskmelon,
    Apple,
    Orange,
    Papaya,
    Coconut,
    Cotton,
    Jute,
    Coffee,
}

/// Ideal growing conditions for one crop.
///
/// Nutrient targets are kg/ha, temperature is °C, rainfall is mm,
/// pH is on the 0-14 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropProfile {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub temperature: f64,
    pub rainfall: f64,
    pub ph: f64,
    pub soil: SoilKind,
}

impl Crop {
    /// All catalog crops in reference order.
    ///
    /// Ranking ties are broken by this order, so it must stay stable.
    pub fn all() -> &'static [Crop] {
        &[
            Crop::Rice,
            Crop::Maize,
            Crop::Chickpea,
            Crop::KidneyBeans,
            Crop::PigeonPeas,
            Crop::MothBeans,
            Crop::MungBean,
            Crop::BlackGram,
            Crop::Lentil,
            Crop::Pomegranate,
            Crop::Banana,
            Crop::Mango,
            Crop::Grapes,
            Crop::Watermelon,
            Crop::Muskmelon,
            Crop::Apple,
            Crop::Orange,
            Crop::Papaya,
            Crop::Coconut,
            Crop::Cotton,
            Crop::Jute,
            Crop::Coffee,
        ]
    }

    /// Wire/string key (matches the serde form)
    pub fn key(self) -> &'static str {
        match self {
            Crop::Rice => "rice",
            Crop::Maize => "maize",
            Crop::Chickpea => "chickpea",
            Crop::KidneyBeans => "kidneybeans",
            Crop::PigeonPeas => "pigeonpeas",
            Crop::MothBeans => "mothbeans",
            Crop::MungBean => "mungbean",
            Crop::BlackGram => "blackgram",
            Crop::Lentil => "lentil",
            Crop::Pomegranate => "pomegranate",
            Crop::Banana => "banana",
            Crop::Mango => "mango",
            Crop::Grapes => "grapes",
            Crop::Watermelon => "watermelon",
            Crop::Muskmelon => "muskmelon",
            Crop::Apple => "apple",
            Crop::Orange => "orange",
            Crop::Papaya => "papaya",
            Crop::Coconut => "coconut",
            Crop::Cotton => "cotton",
            Crop::Jute => "jute",
            Crop::Coffee => "coffee",
        }
    }

    /// Friendly name for display
    pub fn display_name(self) -> &'static str {
        match self {
            Crop::Rice => "Rice",
            Crop::Maize => "Maize",
            Crop::Chickpea => "Chickpea",
            Crop::KidneyBeans => "Kidney Beans",
            Crop::PigeonPeas => "Pigeon Peas",
            Crop::MothBeans => "Moth Beans",
            Crop::MungBean => "Mung Bean",
            Crop::BlackGram => "Black Gram",
            Crop::Lentil => "Lentil",
            Crop::Pomegranate => "Pomegranate",
            Crop::Banana => "Banana",
            Crop::Mango => "Mango",
            Crop::Grapes => "Grapes",
            Crop::Watermelon => "Watermelon",
            Crop::Muskmelon => "Muskmelon",
            Crop::Apple => "Apple",
            Crop::Orange => "Orange",
            Crop::Papaya => "Papaya",
            Crop::Coconut => "Coconut",
            Crop::Cotton => "Cotton",
            Crop::Jute => "Jute",
            Crop::Coffee => "Coffee",
        }
    }

    /// Display glyph
    pub fn glyph(self) -> &'static str {
        match self {
            Crop::Rice => "🌾",
            Crop::Maize => "🌽",
            Crop::Chickpea => "🌱",
            Crop::KidneyBeans => "🫘",
            Crop::PigeonPeas => "🟤",
            Crop::MothBeans => "🤎",
            Crop::MungBean => "🟢",
            Crop::BlackGram => "⚫",
            Crop::Lentil => "🔸",
            Crop::Pomegranate => "🟥",
            Crop::Banana => "🍌",
            Crop::Mango => "🥭",
            Crop::Grapes => "🍇",
            Crop::Watermelon => "🍉",
            Crop::Muskmelon => "🍈",
            Crop::Apple => "🍎",
            Crop::Orange => "🍊",
            Crop::Papaya => "🧡",
            Crop::Coconut => "🥥",
            Crop::Cotton => "☁️",
            Crop::Jute => "🪵",
            Crop::Coffee => "☕",
        }
    }

    /// Ideal growing conditions for this crop.
    ///
    /// The match is exhaustive: every catalog crop has an entry, so the
    /// lookup is total and cannot fail at runtime.
    pub const fn profile(self) -> CropProfile {
        match self {
            Crop::Rice => CropProfile {
                nitrogen: 90.0,
                phosphorus: 42.0,
                potassium: 43.0,
                temperature: 27.0,
                rainfall: 200.0,
                ph: 5.8,
                soil: SoilKind::ClayLoam,
            },
            Crop::Maize => CropProfile {
                nitrogen: 95.0,
                phosphorus: 40.0,
                potassium: 40.0,
                temperature: 23.0,
                rainfall: 80.0,
                ph: 6.2,
                soil: SoilKind::Loam,
            },
            Crop::Chickpea => CropProfile {
                nitrogen: 40.0,
                phosphorus: 67.0,
                potassium: 56.0,
                temperature: 21.0,
                rainfall: 65.0,
                ph: 6.3,
                soil: SoilKind::Loam,
            },
            Crop::KidneyBeans => CropProfile {
                nitrogen: 20.0,
                phosphorus: 67.0,
                potassium: 20.0,
                temperature: 20.0,
                rainfall: 180.0,
                ph: 5.6,
                soil: SoilKind::Loam,
            },
            Crop::PigeonPeas => CropProfile {
                nitrogen: 21.0,
                phosphorus: 67.0,
                potassium: 48.0,
                temperature: 27.0,
                rainfall: 101.0,
                ph: 7.0,
                soil: SoilKind::ClayLoam,
            },
            Crop::MothBeans => CropProfile {
                nitrogen: 23.0,
                phosphorus: 48.0,
                potassium: 50.0,
                temperature: 28.0,
                rainfall: 50.0,
                ph: 6.8,
                soil: SoilKind::SandyLoam,
            },
            Crop::MungBean => CropProfile {
                nitrogen: 21.0,
                phosphorus: 46.0,
                potassium: 74.0,
                temperature: 28.0,
                rainfall: 85.0,
                ph: 6.2,
                soil: SoilKind::Loam,
            },
            Crop::BlackGram => CropProfile {
                nitrogen: 38.0,
                phosphorus: 67.0,
                potassium: 72.0,
                temperature: 30.0,
                rainfall: 65.0,
                ph: 7.0,
                soil: SoilKind::ClayLoam,
            },
            Crop::Lentil => CropProfile {
                nitrogen: 19.0,
                phosphorus: 69.0,
                potassium: 69.0,
                temperature: 24.0,
                rainfall: 65.0,
                ph: 6.8,
                soil: SoilKind::Loam,
            },
            Crop::Pomegranate => CropProfile {
                nitrogen: 19.0,
                phosphorus: 133.0,
                potassium: 203.0,
                temperature: 21.0,
                rainfall: 127.0,
                ph: 6.5,
                soil: SoilKind::SandyLoam,
            },
            Crop::Banana => CropProfile {
                nitrogen: 100.0,
                phosphorus: 75.0,
                potassium: 50.0,
                temperature: 27.0,
                rainfall: 100.0,
                ph: 6.0,
                soil: SoilKind::ClayLoam,
            },
            Crop::Mango => CropProfile {
                nitrogen: 19.0,
                phosphorus: 133.0,
                potassium: 203.0,
                temperature: 27.0,
                rainfall: 99.0,
                ph: 5.7,
                soil: SoilKind::SandyLoam,
            },
            Crop::Grapes => CropProfile {
                nitrogen: 23.0,
                phosphorus: 132.0,
                potassium: 200.0,
                temperature: 23.0,
                rainfall: 95.0,
                ph: 6.0,
                soil: SoilKind::SandyLoam,
            },
            Crop::Watermelon => CropProfile {
                nitrogen: 100.0,
                phosphorus: 74.0,
                potassium: 50.0,
                temperature: 26.0,
                rainfall: 87.0,
                ph: 6.0,
                soil: SoilKind::Sandy,
            },
            Crop::Muskmelon => CropProfile {
                nitrogen: 100.0,
                phosphorus: 74.0,
                potassium: 50.0,
                temperature: 28.0,
                rainfall: 90.0,
                ph: 6.0,
                soil: SoilKind::Sandy,
            },
            Crop::Apple => CropProfile {
                nitrogen: 20.0,
                phosphorus: 133.0,
                potassium: 203.0,
                temperature: 22.0,
                rainfall: 155.0,
                ph: 5.8,
                soil: SoilKind::Loam,
            },
            Crop::Orange => CropProfile {
                nitrogen: 20.0,
                phosphorus: 133.0,
                potassium: 203.0,
                temperature: 22.0,
                rainfall: 102.0,
                ph: 7.0,
                soil: SoilKind::ClayLoam,
            },
            Crop::Papaya => CropProfile {
                nitrogen: 50.0,
                phosphorus: 56.0,
                potassium: 60.0,
                temperature: 25.0,
                rainfall: 144.0,
                ph: 6.0,
                soil: SoilKind::Loam,
            },
            Crop::Coconut => CropProfile {
                nitrogen: 22.0,
                phosphorus: 100.0,
                potassium: 120.0,
                temperature: 27.0,
                rainfall: 150.0,
                ph: 5.5,
                soil: SoilKind::SandyLoam,
            },
            Crop::Cotton => CropProfile {
                nitrogen: 118.0,
                phosphorus: 46.0,
                potassium: 26.0,
                temperature: 24.0,
                rainfall: 65.0,
                ph: 8.0,
                soil: SoilKind::ClayLoam,
            },
            Crop::Jute => CropProfile {
                nitrogen: 79.0,
                phosphorus: 42.0,
                potassium: 44.0,
                temperature: 25.0,
                rainfall: 180.0,
                ph: 6.5,
                soil: SoilKind::ClayLoam,
            },
            Crop::Coffee => CropProfile {
                nitrogen: 101.0,
                phosphorus: 28.0,
                potassium: 30.0,
                temperature: 23.0,
                rainfall: 180.0,
                ph: 6.0,
                soil: SoilKind::Volcanic,
            },
        }
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Crop {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Crop::all()
            .iter()
            .copied()
            .find(|crop| crop.key() == s)
            .ok_or_else(|| ParseError::UnknownCrop(s.to_string()))
    }
}
