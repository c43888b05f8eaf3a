//! Similarity Scoring
//!
//! Nearest-match scoring of field readings against the crop catalog:
//! - `kernel.rs` - triangular similarity kernel + per-field tolerance ranges
//! - `similarity.rs` - per-crop similarity score in [0,1]
//! - `ranking.rs` - top-5 ranking with confidence and suitability tiers

pub mod kernel;
pub mod ranking;
pub mod similarity;

// Re-export public API
pub use kernel::{normalize, FeatureImportance, Tolerances, FEATURE_IMPORTANCE, TOLERANCES};
pub use ranking::{recommend, CropMatch, Suitability, TOP_RESULTS};
pub use similarity::similarity;
