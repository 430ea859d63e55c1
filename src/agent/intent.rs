use regex::Regex;
use std::sync::LazyLock;

pub(super) static MEAL_PLAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:weekly|plan|planner|planning)\b").unwrap());

pub(super) static IMPACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:impact|environmental|carbon|co2|footprint)\b").unwrap()
});

/// What the user is asking for, decided from keywords alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Intent {
    /// Recipes, nutrition, storage and impact for the listed ingredients.
    Ingredients,
    MealPlan,
    Impact,
}

impl Intent {
    /// Meal planning wins over impact; anything unmatched is a plain
    /// ingredient query.
    pub fn classify(message: &str) -> Self {
        let message = message.to_lowercase();

        if MEAL_PLAN.is_match(&message) {
            Intent::MealPlan
        } else if IMPACT.is_match(&message) {
            Intent::Impact
        } else {
            Intent::Ingredients
        }
    }
}
