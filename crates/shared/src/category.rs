use serde::Serialize;

use crate::text::{humanize, normalize, overlaps};

/// Coarse grouping used for shopping lists and creative combinations.
///
/// Variants are declared in lookup order: an ingredient that fits more than
/// one group (cheese is both a protein and dairy) lands in the first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FoodCategory {
    Proteins,
    Grains,
    Vegetables,
    Dairy,
    Pantry,
    Other,
}

impl FoodCategory {
    fn members(&self) -> &'static [&'static str] {
        match self {
            FoodCategory::Proteins => &[
                "chicken", "beef", "pork", "fish", "eggs", "beans", "tofu", "cheese",
            ],
            FoodCategory::Grains => &["rice", "pasta", "bread", "quinoa", "oats", "noodles"],
            FoodCategory::Vegetables => &[
                "tomato", "onion", "garlic", "carrot", "potato", "pepper", "broccoli", "spinach",
            ],
            FoodCategory::Dairy => &["milk", "cheese", "yogurt", "butter", "cream"],
            FoodCategory::Pantry => &[
                "oil", "vinegar", "soy sauce", "herbs", "spices", "salt", "pepper",
            ],
            FoodCategory::Other => &[],
        }
    }

    /// Classify an ingredient name by partial match against each group.
    pub fn of(ingredient: &str) -> Self {
        let name = normalize(&humanize(ingredient));

        <Self as strum::IntoEnumIterator>::iter()
            .find(|category| {
                category
                    .members()
                    .iter()
                    .any(|member| overlaps(&name, member))
            })
            .unwrap_or(FoodCategory::Other)
    }
}
