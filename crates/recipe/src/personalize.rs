use foodcoach_shared::{normalize, title_case};
use serde::Serialize;

use crate::RecipeMatch;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DietaryPreference {
    Vegan,
    GlutenFree,
    DairyFree,
    Keto,
}

impl DietaryPreference {
    /// Parse `Gluten-Free`, `gluten free` and `gluten_free` alike.
    /// Unknown preferences yield `None`.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        normalize(value)
            .replace(['-', ' '], "_")
            .parse()
            .ok()
    }

    fn substitutions(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            DietaryPreference::Vegan => &[
                ("milk", "almond milk"),
                ("butter", "coconut oil"),
                ("cheese", "nutritional yeast"),
                ("eggs", "flax eggs"),
                ("chicken", "tofu"),
                ("beef", "mushrooms"),
            ],
            DietaryPreference::GlutenFree => &[
                ("bread", "gluten-free bread"),
                ("pasta", "rice noodles"),
                ("flour", "almond flour"),
                ("soy sauce", "tamari"),
            ],
            DietaryPreference::DairyFree => &[
                ("milk", "oat milk"),
                ("cheese", "dairy-free cheese"),
                ("butter", "vegan butter"),
                ("yogurt", "coconut yogurt"),
            ],
            DietaryPreference::Keto => &[
                ("rice", "cauliflower rice"),
                ("pasta", "zucchini noodles"),
                ("potato", "turnip"),
                ("bread", "cloud bread"),
            ],
        }
    }
}

/// Swap ingredients that conflict with `preferences`, recording each swap.
///
/// Preferences apply in order, so a later one sees the substitutes chosen by
/// an earlier one. Coverage lists are left to the caller, see
/// [`SmartRecipeEngine::personalize`](crate::SmartRecipeEngine::personalize).
pub(crate) fn apply_substitutions(recipe: &mut RecipeMatch, preferences: &[DietaryPreference]) {
    for preference in preferences {
        for ingredient in recipe.ingredients.iter_mut() {
            let current = normalize(ingredient);

            let swap = preference
                .substitutions()
                .iter()
                .find(|(original, _)| current.contains(*original));

            if let Some((original, substitute)) = swap {
                recipe
                    .substitutions
                    .push(format!("{} → {}", title_case(original), title_case(substitute)));
                *ingredient = substitute.to_string();
            }
        }
    }

    if !recipe.substitutions.is_empty() {
        recipe.dietary_adapted = preferences.iter().map(ToString::to_string).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SmartRecipeEngine;
    use foodcoach_shared::IngredientToken;

    fn pizza() -> RecipeMatch {
        let tokens = IngredientToken::parse_list(["tomato", "bread", "cheese"]);
        SmartRecipeEngine::default().find_best(&tokens, 1).remove(0)
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(
            DietaryPreference::parse_lenient("Gluten-Free"),
            Some(DietaryPreference::GlutenFree)
        );
        assert_eq!(
            DietaryPreference::parse_lenient(" dairy free "),
            Some(DietaryPreference::DairyFree)
        );
        assert_eq!(DietaryPreference::parse_lenient("VEGAN"), Some(DietaryPreference::Vegan));
        assert_eq!(DietaryPreference::parse_lenient("paleo"), None);
    }

    #[test]
    fn test_vegan_substitutes_cheese() {
        let mut recipe = pizza();
        apply_substitutions(&mut recipe, &[DietaryPreference::Vegan]);

        assert!(recipe.ingredients.contains(&"nutritional yeast".to_string()));
        assert!(!recipe.ingredients.contains(&"cheese".to_string()));
        assert_eq!(recipe.substitutions, vec!["Cheese → Nutritional Yeast"]);
        assert_eq!(recipe.dietary_adapted, vec!["vegan"]);
    }

    #[test]
    fn test_multiple_preferences() {
        let mut recipe = pizza();
        apply_substitutions(
            &mut recipe,
            &[DietaryPreference::GlutenFree, DietaryPreference::DairyFree],
        );

        assert!(recipe.ingredients.contains(&"gluten-free bread".to_string()));
        assert!(recipe.ingredients.contains(&"dairy-free cheese".to_string()));
        assert_eq!(recipe.dietary_adapted, vec!["gluten_free", "dairy_free"]);
    }

    #[test]
    fn test_no_conflict_leaves_recipe_untouched() {
        let mut recipe = pizza();
        let before = recipe.clone();
        apply_substitutions(&mut recipe, &[DietaryPreference::Keto]);
        // Keto swaps bread for cloud bread.
        assert_ne!(recipe, before);

        let mut recipe = before.clone();
        recipe.ingredients = vec!["tomato".to_string(), "basil".to_string()];
        let untouched = recipe.clone();
        apply_substitutions(&mut recipe, &[DietaryPreference::Vegan]);
        assert_eq!(recipe, untouched);
    }
}
