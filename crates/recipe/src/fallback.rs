use foodcoach_shared::{IngredientToken, normalize, overlaps};

use crate::{Recipe, RecipeSource};

struct FallbackRecipe {
    name: &'static str,
    ingredients: &'static [&'static str],
    instructions: &'static [&'static str],
    prep_time: u32,
}

const FALLBACK_RECIPES: &[FallbackRecipe] = &[
    FallbackRecipe {
        name: "Tomato Bread Soup",
        ingredients: &["tomato", "bread", "garlic", "onion", "olive oil"],
        instructions: &[
            "Soften onion and garlic in olive oil",
            "Add chopped tomatoes and simmer for 15 minutes",
            "Tear in stale bread and stir until thick",
            "Season and serve with a drizzle of oil",
        ],
        prep_time: 30,
    },
    FallbackRecipe {
        name: "Leftover Vegetable Frittata",
        ingredients: &["eggs", "cheese", "vegetables", "onion", "milk"],
        instructions: &[
            "Whisk eggs with a splash of milk",
            "Saute onion and chopped vegetables",
            "Pour eggs over the vegetables and top with cheese",
            "Cook gently, then finish under the grill",
        ],
        prep_time: 20,
    },
    FallbackRecipe {
        name: "Everything Fried Rice",
        ingredients: &["rice", "eggs", "vegetables", "chicken", "soy sauce"],
        instructions: &[
            "Stir-fry chopped vegetables and any cooked meat",
            "Push aside and scramble the eggs",
            "Add day-old rice and toss until hot",
            "Season with soy sauce",
        ],
        prep_time: 15,
    },
    FallbackRecipe {
        name: "Cheesy Bread Bake",
        ingredients: &["bread", "cheese", "milk", "eggs", "butter"],
        instructions: &[
            "Butter a dish and layer torn bread with cheese",
            "Whisk milk and eggs and pour over",
            "Rest for 10 minutes",
            "Bake at 180°C for 30 minutes",
        ],
        prep_time: 45,
    },
    FallbackRecipe {
        name: "Clean-Out-The-Fridge Pasta",
        ingredients: &["pasta", "tomato", "spinach", "cheese", "garlic"],
        instructions: &[
            "Cook pasta and keep a cup of the water",
            "Saute garlic with tomatoes and greens",
            "Toss pasta with the sauce, loosening with pasta water",
            "Finish with grated cheese",
        ],
        prep_time: 20,
    },
];

impl FallbackRecipe {
    fn to_recipe(&self) -> Recipe {
        Recipe {
            name: self.name.to_string(),
            ingredients: self.ingredients.iter().map(|i| i.to_string()).collect(),
            instructions: self.instructions.iter().map(|i| i.to_string()).collect(),
            prep_time: Some(self.prep_time),
            url: None,
            source: RecipeSource::Fallback,
        }
    }

    fn uses_any(&self, ingredients: &[IngredientToken]) -> bool {
        self.ingredients.iter().any(|needed| {
            ingredients
                .iter()
                .any(|have| overlaps(&normalize(have.as_str()), needed))
        })
    }
}

/// Embedded recipes sharing at least one ingredient, or the first `limit`
/// recipes when none do. Never empty for `limit > 0`.
pub(crate) fn matching(ingredients: &[IngredientToken], limit: usize) -> Vec<Recipe> {
    let limit = limit.max(1);

    let matched: Vec<Recipe> = FALLBACK_RECIPES
        .iter()
        .filter(|recipe| recipe.uses_any(ingredients))
        .take(limit)
        .map(FallbackRecipe::to_recipe)
        .collect();

    if !matched.is_empty() {
        return matched;
    }

    FALLBACK_RECIPES
        .iter()
        .take(limit)
        .map(FallbackRecipe::to_recipe)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(values: &[&str]) -> Vec<IngredientToken> {
        IngredientToken::parse_list(values.iter().copied())
    }

    #[test]
    fn test_filters_by_containment() {
        let recipes = matching(&tokens(&["rice"]), 4);
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Everything Fried Rice");
        assert_eq!(recipes[0].source, RecipeSource::Fallback);
    }

    #[test]
    fn test_plural_matches_singular() {
        let recipes = matching(&tokens(&["tomatoes"]), 4);
        assert!(recipes.iter().any(|r| r.name == "Tomato Bread Soup"));
    }

    #[test]
    fn test_no_match_returns_first_recipes() {
        let recipes = matching(&tokens(&["xyzzyx"]), 4);
        assert_eq!(recipes.len(), 4);
        assert_eq!(recipes[0].name, "Tomato Bread Soup");
    }

    #[test]
    fn test_never_empty() {
        assert!(!matching(&[], 0).is_empty());
    }
}
