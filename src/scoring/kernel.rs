//! Triangular Similarity Kernel
//!
//! Hand-tuned linear normalization: each reading is scored by how far it
//! sits from a crop's ideal value, relative to a fixed per-field tolerance
//! range. No learned model - the tolerances and feature weights below are
//! the reference constants.

/// Per-field tolerance ranges.
///
/// The tolerance is the distance at which a reading's field score reaches
/// zero; wider tolerance means slower similarity decay.
#[derive(Debug, Clone, Copy)]
pub struct Tolerances {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub temperature: f64,
    pub rainfall: f64,
    pub ph: f64,
}

/// Reference tolerance ranges, one per scored field.
pub const TOLERANCES: Tolerances = Tolerances {
    nitrogen: 50.0,
    phosphorus: 40.0,
    potassium: 40.0,
    temperature: 15.0,
    rainfall: 100.0,
    ph: 2.0,
};

/// Triangular (linear) similarity kernel.
///
/// Returns 1.0 at an exact match, decays linearly to 0 at distance =
/// `tolerance`, and clamps at 0 beyond that. Always in [0, 1] for any
/// finite `value` (a NaN reading also clamps to 0).
#[inline]
pub fn normalize(value: f64, ideal: f64, tolerance: f64) -> f64 {
    (1.0 - (value - ideal).abs() / tolerance).max(0.0)
}

// ============================================================================
// Feature Importance
// ============================================================================

/// Relative weight of one input feature in the reference model.
#[derive(Debug, Clone, Copy)]
pub struct FeatureImportance {
    pub feature: &'static str,
    pub importance: f64,
    pub glyph: &'static str,
}

/// Reference feature weights. Display data for callers; the scorer itself
/// weights every field equally through the kernel sum.
pub static FEATURE_IMPORTANCE: [FeatureImportance; 6] = [
    FeatureImportance { feature: "N", importance: 0.18, glyph: "🧪" },
    FeatureImportance { feature: "P", importance: 0.15, glyph: "🔬" },
    FeatureImportance { feature: "K", importance: 0.16, glyph: "⚗️" },
    FeatureImportance { feature: "Temperature", importance: 0.20, glyph: "🌡️" },
    FeatureImportance { feature: "Rainfall", importance: 0.17, glyph: "🌧️" },
    FeatureImportance { feature: "pH", importance: 0.14, glyph: "📊" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_match_scores_one() {
        assert_relative_eq!(normalize(27.0, 27.0, 15.0), 1.0);
        assert_relative_eq!(normalize(-3.5, -3.5, 2.0), 1.0);
    }

    #[test]
    fn test_zero_at_and_beyond_tolerance() {
        assert_relative_eq!(normalize(42.0, 27.0, 15.0), 0.0);
        assert_relative_eq!(normalize(12.0, 27.0, 15.0), 0.0);
        assert_relative_eq!(normalize(9999.0, 6.5, 2.0), 0.0);
        assert_relative_eq!(normalize(-9999.0, 6.5, 2.0), 0.0);
    }

    #[test]
    fn test_linear_decay() {
        // Halfway to the tolerance boundary scores 0.5
        assert_relative_eq!(normalize(34.5, 27.0, 15.0), 0.5);
        assert_relative_eq!(normalize(19.5, 27.0, 15.0), 0.5);
        // Distance 26 at tolerance 40 scores 0.35
        assert_relative_eq!(normalize(0.0, 26.0, 40.0), 0.35);
    }

    #[test]
    fn test_monotone_non_increasing_in_distance() {
        let ideal = 90.0;
        let mut prev = normalize(ideal, ideal, 50.0);
        for step in 1..200 {
            let score = normalize(ideal + step as f64, ideal, 50.0);
            assert!(score <= prev, "score rose at distance {}", step);
            assert!((0.0..=1.0).contains(&score));
            prev = score;
        }
    }

    #[test]
    fn test_nan_reading_clamps_to_zero() {
        assert_relative_eq!(normalize(f64::NAN, 27.0, 15.0), 0.0);
    }

    #[test]
    fn test_tolerances_positive() {
        let t = TOLERANCES;
        for tolerance in [t.nitrogen, t.phosphorus, t.potassium, t.temperature, t.rainfall, t.ph] {
            assert!(tolerance > 0.0);
        }
    }

    #[test]
    fn test_feature_importance_sums_to_one() {
        let sum: f64 = FEATURE_IMPORTANCE.iter().map(|f| f.importance).sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
    }
}
