//! Crop Matcher
//!
//! Static nearest-match scoring over a fixed catalog of 22 reference crops.
//! Given six soil/climate readings plus a soil category, ranks the catalog
//! by a triangular-kernel similarity and reports the top matches with a
//! suitability tier.
//!
//! - `catalog`: closed crop/soil enumerations + the ideal-condition table
//! - `query`: the per-submission readings record (JSON wire form)
//! - `scoring`: kernel, per-crop similarity, ranked recommendations
//!
//! Every operation is a pure, stateless function of its inputs and the
//! static table; the catalog is read-only, so concurrent callers need no
//! synchronization.

pub mod catalog;
pub mod query;
pub mod scoring;

// Re-export commonly used types
pub use catalog::{Crop, CropProfile, ParseError, SoilKind};
pub use query::FieldReadings;
pub use scoring::{normalize, recommend, similarity, CropMatch, Suitability};
