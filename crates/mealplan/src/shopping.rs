use foodcoach_shared::{FoodCategory, IngredientToken, overlaps, title_case};
use serde::Serialize;

/// Staples a typical week of home cooking goes through.
const TYPICAL_WEEK: &[&str] = &[
    "eggs",
    "chicken",
    "beans",
    "rice",
    "pasta",
    "bread",
    "oats",
    "tomato",
    "onion",
    "garlic",
    "carrot",
    "bell pepper",
    "spinach",
    "milk",
    "yogurt",
    "cheese",
    "olive oil",
    "herbs",
    "lemon",
    "bananas",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingGroup {
    pub category: FoodCategory,
    pub items: Vec<String>,
}

/// Typical-week staples not covered by `available`, grouped by category in
/// a fixed order. Empty groups are left out.
pub fn shopping_list(available: &[IngredientToken]) -> Vec<ShoppingGroup> {
    let needed: Vec<&str> = TYPICAL_WEEK
        .iter()
        .copied()
        .filter(|item| !available.iter().any(|have| overlaps(item, have.as_str())))
        .collect();

    <FoodCategory as strum::IntoEnumIterator>::iter()
        .filter_map(|category| {
            let items: Vec<String> = needed
                .iter()
                .filter(|item| FoodCategory::of(item) == category)
                .map(|item| title_case(item))
                .collect();

            (!items.is_empty()).then_some(ShoppingGroup { category, items })
        })
        .collect()
}
