//! Nutrition facts and storage tips keyed by ingredient name.
//!
//! The table is loaded once from CSV and never mutated; lookups try an exact
//! key first and fall back to fuzzy matching above a similarity threshold.

mod error;
mod record;
mod table;

pub use error::NutritionError;
pub use record::NutritionRecord;
pub use table::{DEFAULT_SIMILARITY_THRESHOLD, Lookup, NutritionTable};
