//! Field Readings
//!
//! The per-query record of soil nutrient and climate measurements. Created
//! once per submission, scored against the catalog, then discarded - nothing
//! is persisted.
//!
//! The JSON wire form uses the submission form's field names (`N`, `P`, `K`,
//! `temperature`, `rainfall`, `ph`, `soil_type`). An absent, null or empty
//! `soil_type` means no soil was selected; scoring still proceeds, the soil
//! match bonus just never applies.

use crate::catalog::SoilKind;
use serde::{Deserialize, Deserializer, Serialize};

/// One set of user-supplied soil/climate readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldReadings {
    /// Nitrogen content (kg/ha)
    #[serde(rename = "N")]
    pub nitrogen: f64,

    /// Phosphorus content (kg/ha)
    #[serde(rename = "P")]
    pub phosphorus: f64,

    /// Potassium content (kg/ha)
    #[serde(rename = "K")]
    pub potassium: f64,

    /// Mean temperature (°C)
    pub temperature: f64,

    /// Annual rainfall (mm)
    pub rainfall: f64,

    /// Soil pH (0-14 scale)
    pub ph: f64,

    /// Selected soil category, if any
    #[serde(
        rename = "soil_type",
        default,
        deserialize_with = "soil_or_unset",
        skip_serializing_if = "Option::is_none"
    )]
    pub soil: Option<SoilKind>,
}

/// Treat null and the empty string as "no soil selected"; reject anything
/// else that is not a known category.
fn soil_or_unset<'de, D>(deserializer: D) -> Result<Option<SoilKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

// ============================================================================
// Suggested Input Bounds
// ============================================================================

/// Advisory range for one reading, mirroring the submission form limits.
///
/// The scorer itself is total: values outside these ranges are never
/// rejected, they just clamp to very low field scores.
#[derive(Debug, Clone, Copy)]
pub struct SuggestedBounds {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
}

/// Form limits, in the same field order as the readings struct.
pub static SUGGESTED_BOUNDS: [SuggestedBounds; 6] = [
    SuggestedBounds { label: "Nitrogen", min: 0.0, max: 200.0 },
    SuggestedBounds { label: "Phosphorus", min: 0.0, max: 200.0 },
    SuggestedBounds { label: "Potassium", min: 0.0, max: 300.0 },
    SuggestedBounds { label: "Temperature", min: -10.0, max: 50.0 },
    SuggestedBounds { label: "Rainfall", min: 0.0, max: 500.0 },
    SuggestedBounds { label: "pH", min: 0.0, max: 14.0 },
];

impl FieldReadings {
    /// Numeric fields in bounds-table order
    fn numeric_fields(&self) -> [f64; 6] {
        [
            self.nitrogen,
            self.phosphorus,
            self.potassium,
            self.temperature,
            self.rainfall,
            self.ph,
        ]
    }

    /// Readings that fall outside their suggested range, with their values.
    pub fn out_of_bounds(&self) -> Vec<(&'static SuggestedBounds, f64)> {
        SUGGESTED_BOUNDS
            .iter()
            .zip(self.numeric_fields())
            .filter(|(bounds, value)| *value < bounds.min || *value > bounds.max)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice_json() -> &'static str {
        r#"{"N":90,"P":42,"K":43,"temperature":27,"rainfall":200,"ph":5.8,"soil_type":"clay_loam"}"#
    }

    #[test]
    fn test_deserialize_wire_names() {
        let readings: FieldReadings = serde_json::from_str(rice_json()).unwrap();
        assert_eq!(readings.nitrogen, 90.0);
        assert_eq!(readings.phosphorus, 42.0);
        assert_eq!(readings.potassium, 43.0);
        assert_eq!(readings.temperature, 27.0);
        assert_eq!(readings.rainfall, 200.0);
        assert_eq!(readings.ph, 5.8);
        assert_eq!(readings.soil, Some(SoilKind::ClayLoam));
    }

    #[test]
    fn test_empty_soil_is_unset() {
        let json = r#"{"N":0,"P":0,"K":0,"temperature":0,"rainfall":0,"ph":0,"soil_type":""}"#;
        let readings: FieldReadings = serde_json::from_str(json).unwrap();
        assert_eq!(readings.soil, None);

        let json = r#"{"N":0,"P":0,"K":0,"temperature":0,"rainfall":0,"ph":0}"#;
        let readings: FieldReadings = serde_json::from_str(json).unwrap();
        assert_eq!(readings.soil, None);

        let json = r#"{"N":0,"P":0,"K":0,"temperature":0,"rainfall":0,"ph":0,"soil_type":null}"#;
        let readings: FieldReadings = serde_json::from_str(json).unwrap();
        assert_eq!(readings.soil, None);
    }

    #[test]
    fn test_unknown_soil_rejected() {
        let json = r#"{"N":0,"P":0,"K":0,"temperature":0,"rainfall":0,"ph":0,"soil_type":"peaty"}"#;
        assert!(serde_json::from_str::<FieldReadings>(json).is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let readings: FieldReadings = serde_json::from_str(rice_json()).unwrap();
        let json = serde_json::to_string(&readings).unwrap();
        let round_tripped: FieldReadings = serde_json::from_str(&json).unwrap();
        assert_eq!(round_tripped, readings);
    }

    #[test]
    fn test_out_of_bounds_report() {
        let readings = FieldReadings {
            nitrogen: 90.0,
            phosphorus: 42.0,
            potassium: 43.0,
            temperature: 27.0,
            rainfall: 200.0,
            ph: 5.8,
            soil: None,
        };
        assert!(readings.out_of_bounds().is_empty());

        let extreme = FieldReadings {
            ph: 9999.0,
            temperature: -40.0,
            ..readings
        };
        let flagged = extreme.out_of_bounds();
        assert_eq!(flagged.len(), 2);
        assert_eq!(flagged[0].0.label, "Temperature");
        assert_eq!(flagged[0].1, -40.0);
        assert_eq!(flagged[1].0.label, "pH");
        assert_eq!(flagged[1].1, 9999.0);
    }
}
