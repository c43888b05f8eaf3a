//! Per-Crop Similarity
//!
//! Combines the six per-field kernel scores with the soil match bonus into
//! a single similarity score in [0,1]. Pure function of the readings and
//! the static catalog; no state, no failure path.

use super::kernel::{normalize, TOLERANCES};
use crate::catalog::Crop;
use crate::query::FieldReadings;

/// Maximum achievable raw score: six field scores capped at 1.0 each, plus
/// the soil match bonus of 1.0.
const MAX_SCORE: f64 = 7.0;

/// Score one crop against a set of readings.
///
/// Each numeric field contributes a kernel score against the crop's ideal
/// value; the selected soil contributes exactly 1.0 on an exact category
/// match (an unset soil never matches). The sum is divided by the maximum
/// achievable score, so the result is always in [0, 1] - higher means a
/// closer match.
pub fn similarity(crop: Crop, readings: &FieldReadings) -> f64 {
    let ideal = crop.profile();
    let mut score = 0.0;

    score += normalize(readings.nitrogen, ideal.nitrogen, TOLERANCES.nitrogen);
    score += normalize(readings.phosphorus, ideal.phosphorus, TOLERANCES.phosphorus);
    score += normalize(readings.potassium, ideal.potassium, TOLERANCES.potassium);
    score += normalize(readings.temperature, ideal.temperature, TOLERANCES.temperature);
    score += normalize(readings.rainfall, ideal.rainfall, TOLERANCES.rainfall);
    score += normalize(readings.ph, ideal.ph, TOLERANCES.ph);

    if readings.soil == Some(ideal.soil) {
        score += 1.0;
    }

    score / MAX_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SoilKind;
    use approx::assert_relative_eq;

    fn rice_ideal_readings() -> FieldReadings {
        FieldReadings {
            nitrogen: 90.0,
            phosphorus: 42.0,
            potassium: 43.0,
            temperature: 27.0,
            rainfall: 200.0,
            ph: 5.8,
            soil: Some(SoilKind::ClayLoam),
        }
    }

    fn zeroed_readings() -> FieldReadings {
        FieldReadings {
            nitrogen: 0.0,
            phosphorus: 0.0,
            potassium: 0.0,
            temperature: 0.0,
            rainfall: 0.0,
            ph: 0.0,
            soil: None,
        }
    }

    #[test]
    fn test_exact_rice_match_scores_one() {
        assert_relative_eq!(similarity(Crop::Rice, &rice_ideal_readings()), 1.0);
    }

    #[test]
    fn test_cotton_against_zeroed_readings() {
        // Only potassium (1 - 26/40 = 0.35) and rainfall (1 - 65/100 = 0.35)
        // survive the clamp; 0.70 / 7 = 0.1
        assert_relative_eq!(
            similarity(Crop::Cotton, &zeroed_readings()),
            0.1,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_soil_bonus_is_exactly_one_seventh() {
        let with_soil = rice_ideal_readings();
        let without_soil = FieldReadings { soil: None, ..with_soil.clone() };
        let wrong_soil = FieldReadings {
            soil: Some(SoilKind::Sandy),
            ..with_soil.clone()
        };

        let bonus = similarity(Crop::Rice, &with_soil) - similarity(Crop::Rice, &without_soil);
        assert_relative_eq!(bonus, 1.0 / 7.0, epsilon = 1e-12);

        // A near-miss category earns nothing either
        assert_relative_eq!(
            similarity(Crop::Rice, &wrong_soil),
            similarity(Crop::Rice, &without_soil)
        );
    }

    #[test]
    fn test_similarity_bounded_for_all_crops() {
        let queries = [
            rice_ideal_readings(),
            zeroed_readings(),
            FieldReadings {
                nitrogen: -500.0,
                phosphorus: 1e6,
                potassium: f64::NAN,
                temperature: 9999.0,
                rainfall: -1.0,
                ph: 9999.0,
                soil: Some(SoilKind::Volcanic),
            },
        ];
        for readings in &queries {
            for &crop in Crop::all() {
                let score = similarity(crop, readings);
                assert!(
                    (0.0..=1.0).contains(&score),
                    "{} scored {} out of range",
                    crop,
                    score
                );
            }
        }
    }

    #[test]
    fn test_extreme_readings_degrade_not_fail() {
        // A pH of 9999 is accepted and simply contributes a zero field score
        let mut readings = rice_ideal_readings();
        readings.ph = 9999.0;
        let score = similarity(Crop::Rice, &readings);
        assert_relative_eq!(score, 6.0 / 7.0, epsilon = 1e-12);
    }
}
