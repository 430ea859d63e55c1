mod category;
mod similarity;
mod text;
mod token;

pub use category::FoodCategory;
pub use similarity::{best_match, ratio};
pub use text::{humanize, normalize, overlaps, title_case};
pub use token::IngredientToken;
