//! Recipe discovery for leftover ingredients.
//!
//! Two sources feed the chat and the API:
//! - [`RecipeFinder`] queries an external recipe search service and degrades
//!   to an embedded fallback list whenever that service misbehaves.
//! - [`SmartRecipeEngine`] scores a static, curated catalog against the
//!   ingredients on hand.

mod catalog;
mod error;
mod fallback;
mod finder;
mod model;
mod personalize;
mod search;

pub use catalog::{CatalogRecipe, CreativeCombination, Cuisine, RecipeMatch, SmartRecipeEngine};
pub use error::RecipeError;
pub use finder::RecipeFinder;
pub use model::{Recipe, RecipeSource};
pub use personalize::DietaryPreference;
pub use search::{DisabledSearch, HttpRecipeSearch, RecipeSearch};
