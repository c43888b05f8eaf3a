//! Ranked Recommendations
//!
//! Scores every catalog crop against one set of readings and keeps the top
//! five, each labelled with a formatted confidence percentage and a coarse
//! suitability tier.

use super::similarity::similarity;
use crate::catalog::Crop;
use crate::query::FieldReadings;
use serde::Serialize;

/// Number of matches returned by [`recommend`].
pub const TOP_RESULTS: usize = 5;

/// Coarse suitability tier thresholded from the similarity score.
///
/// There is no tier below Moderate: a similarity of 0 still reports
/// Moderate rather than an explicit failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Suitability {
    Excellent,
    Good,
    Moderate,
}

impl Suitability {
    /// similarity > 0.70 → Excellent; > 0.50 → Good; otherwise Moderate
    pub fn from_similarity(similarity: f64) -> Self {
        if similarity > 0.70 {
            Suitability::Excellent
        } else if similarity > 0.50 {
            Suitability::Good
        } else {
            Suitability::Moderate
        }
    }

    /// Display text
    pub fn display_text(&self) -> &'static str {
        match self {
            Suitability::Excellent => "Excellent",
            Suitability::Good => "Good",
            Suitability::Moderate => "Moderate",
        }
    }
}

/// One ranked match. Produced fresh per query, never cached.
#[derive(Debug, Clone, Serialize)]
pub struct CropMatch {
    /// Crop identifier (serializes to its string key)
    pub crop: Crop,

    /// Friendly crop name
    pub display_name: &'static str,

    /// Display glyph
    pub glyph: &'static str,

    /// Raw similarity score in [0,1], for callers needing unformatted data
    pub similarity: f64,

    /// Similarity as a percentage string, one decimal place (e.g. "82.4%")
    pub confidence: String,

    /// Coarse tier derived from the similarity
    pub suitability: Suitability,
}

impl CropMatch {
    fn new(crop: Crop, similarity: f64) -> Self {
        Self {
            crop,
            display_name: crop.display_name(),
            glyph: crop.glyph(),
            similarity,
            confidence: format!("{:.1}%", similarity * 100.0),
            suitability: Suitability::from_similarity(similarity),
        }
    }
}

/// Rank every catalog crop against the readings and keep the best five.
///
/// The sort is stable and descends by similarity, so crops with equal
/// scores keep catalog order. Total over any numeric readings; a pure
/// function of its input and the static catalog.
pub fn recommend(readings: &FieldReadings) -> Vec<CropMatch> {
    let mut matches: Vec<CropMatch> = Crop::all()
        .iter()
        .map(|&crop| CropMatch::new(crop, similarity(crop, readings)))
        .collect();

    matches.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    matches.truncate(TOP_RESULTS);
    matches
}
