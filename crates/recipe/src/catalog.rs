use foodcoach_shared::{FoodCategory, IngredientToken, best_match, overlaps, title_case};
use serde::Serialize;

use crate::DietaryPreference;
use crate::personalize::apply_substitutions;

/// Matches below this score are left out of per-cuisine suggestions.
const CUISINE_MIN_SCORE: u32 = 30;
const PER_CUISINE: usize = 2;
/// Credit for a recipe ingredient that only matches fuzzily.
const FUZZY_CREDIT: f64 = 0.7;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
pub enum Cuisine {
    Italian,
    Asian,
    American,
    Mexican,
    Mediterranean,
}

/// A curated recipe with a known waste-reduction score.
#[derive(Debug, Serialize)]
pub struct CatalogRecipe {
    pub name: &'static str,
    pub cuisine: Cuisine,
    pub ingredients: &'static [&'static str],
    pub instructions: &'static [&'static str],
    pub prep_time: u32,
    pub difficulty: &'static str,
    pub waste_reduction_score: u32,
}

const CATALOG: &[CatalogRecipe] = &[
    CatalogRecipe {
        name: "Classic Margherita Pizza",
        cuisine: Cuisine::Italian,
        ingredients: &["bread", "tomato", "cheese", "basil"],
        instructions: &[
            "Use bread as pizza base or make dough",
            "Spread tomato sauce evenly",
            "Add mozzarella cheese generously",
            "Top with fresh basil leaves",
            "Bake at 450°F for 12-15 minutes",
        ],
        prep_time: 25,
        difficulty: "Easy",
        waste_reduction_score: 95,
    },
    CatalogRecipe {
        name: "Pasta Primavera",
        cuisine: Cuisine::Italian,
        ingredients: &["pasta", "vegetables", "garlic", "olive oil", "cheese"],
        instructions: &[
            "Cook pasta according to package directions",
            "Sauté mixed vegetables with garlic in olive oil",
            "Toss pasta with vegetables",
            "Finish with grated cheese and herbs",
            "Serve immediately while hot",
        ],
        prep_time: 20,
        difficulty: "Easy",
        waste_reduction_score: 90,
    },
    CatalogRecipe {
        name: "Vegetable Fried Rice",
        cuisine: Cuisine::Asian,
        ingredients: &["rice", "vegetables", "eggs", "soy sauce", "garlic"],
        instructions: &[
            "Use day-old rice for best texture",
            "Scramble eggs and set aside",
            "Stir-fry vegetables with garlic",
            "Add rice and break up clumps",
            "Mix in eggs and soy sauce, serve hot",
        ],
        prep_time: 15,
        difficulty: "Easy",
        waste_reduction_score: 100,
    },
    CatalogRecipe {
        name: "Quick Vegetable Stir Fry",
        cuisine: Cuisine::Asian,
        ingredients: &["vegetables", "garlic", "ginger", "soy sauce", "oil"],
        instructions: &[
            "Heat oil in wok or large pan",
            "Add garlic and ginger, stir for 30 seconds",
            "Add harder vegetables first, then softer ones",
            "Stir-fry for 3-5 minutes until crisp-tender",
            "Season with soy sauce and serve over rice",
        ],
        prep_time: 10,
        difficulty: "Easy",
        waste_reduction_score: 95,
    },
    CatalogRecipe {
        name: "Loaded Grilled Cheese",
        cuisine: Cuisine::American,
        ingredients: &["bread", "cheese", "tomato", "onion", "butter"],
        instructions: &[
            "Butter bread slices on outside",
            "Layer cheese, tomato slices, and onion inside",
            "Cook in pan over medium heat",
            "Flip when golden brown on bottom",
            "Cook until second side is golden and cheese melts",
        ],
        prep_time: 8,
        difficulty: "Easy",
        waste_reduction_score: 85,
    },
    CatalogRecipe {
        name: "Hearty Vegetable Soup",
        cuisine: Cuisine::American,
        ingredients: &["vegetables", "broth", "onion", "garlic", "herbs"],
        instructions: &[
            "Sauté onion and garlic until fragrant",
            "Add chopped vegetables and cook 5 minutes",
            "Pour in broth and bring to boil",
            "Simmer 20-25 minutes until vegetables are tender",
            "Season with herbs and serve hot",
        ],
        prep_time: 35,
        difficulty: "Easy",
        waste_reduction_score: 98,
    },
    CatalogRecipe {
        name: "Quick Black Bean Quesadillas",
        cuisine: Cuisine::Mexican,
        ingredients: &["tortilla", "beans", "cheese", "onion", "peppers"],
        instructions: &[
            "Mash beans slightly with fork",
            "Spread beans on half of tortilla",
            "Add cheese, diced onion, and peppers",
            "Fold tortilla and cook in dry pan",
            "Flip once and cook until crispy and cheese melts",
        ],
        prep_time: 12,
        difficulty: "Easy",
        waste_reduction_score: 92,
    },
    CatalogRecipe {
        name: "Greek-Style Vegetable Medley",
        cuisine: Cuisine::Mediterranean,
        ingredients: &["vegetables", "olive oil", "lemon", "herbs", "cheese"],
        instructions: &[
            "Chop vegetables into uniform pieces",
            "Toss with olive oil, lemon juice, and herbs",
            "Roast at 400°F for 25-30 minutes",
            "Sprinkle with crumbled cheese before serving",
            "Serve warm or at room temperature",
        ],
        prep_time: 40,
        difficulty: "Easy",
        waste_reduction_score: 90,
    },
];

/// A catalog recipe scored against the caller's ingredients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeMatch {
    pub name: String,
    pub cuisine: Cuisine,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub difficulty: String,
    pub waste_reduction_score: u32,
    pub match_score: u32,
    pub missing_ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub substitutions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dietary_adapted: Vec<String>,
}

impl RecipeMatch {
    /// At least one recipe ingredient is on hand, exactly or by similarity.
    ///
    /// The waste-reduction bonus alone gives every recipe a non-zero score,
    /// so this is what keeps unrelated recipes out of the results.
    pub fn covers_any(&self) -> bool {
        self.missing_ingredients.len() < self.ingredients.len()
    }

    /// Recipe ingredients the caller already has, title-cased.
    pub fn available_ingredients(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .map(|ingredient| title_case(ingredient))
            .filter(|ingredient| !self.missing_ingredients.contains(ingredient))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreativeCombination {
    pub name: String,
    pub description: String,
    pub estimated_prep_time: u32,
    pub creativity_score: u32,
    pub ingredients_used: Vec<String>,
}

enum Coverage {
    Have,
    Similar,
    Missing,
}

/// Scores the static catalog against available ingredients.
#[derive(Debug, Clone, Copy)]
pub struct SmartRecipeEngine {
    similarity_threshold: u8,
}

impl SmartRecipeEngine {
    pub fn new(similarity_threshold: u8) -> Self {
        Self {
            similarity_threshold,
        }
    }

    pub fn catalog() -> &'static [CatalogRecipe] {
        CATALOG
    }

    /// Best scoring recipes, highest first. Recipes sharing no ingredient
    /// with `ingredients` are dropped.
    pub fn find_best(&self, ingredients: &[IngredientToken], max_recipes: usize) -> Vec<RecipeMatch> {
        let mut matches: Vec<RecipeMatch> = CATALOG
            .iter()
            .map(|recipe| self.score(recipe, ingredients))
            .filter(RecipeMatch::covers_any)
            .collect();

        // Stable sort keeps catalog order between equal scores.
        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        matches.truncate(max_recipes);
        matches
    }

    /// Top two matches above 30 for each cuisine that has any.
    pub fn by_cuisine(&self, ingredients: &[IngredientToken]) -> Vec<(Cuisine, Vec<RecipeMatch>)> {
        <Cuisine as strum::IntoEnumIterator>::iter()
            .filter_map(|cuisine| {
                let matches = self.for_cuisine(cuisine, ingredients);
                (!matches.is_empty()).then_some((cuisine, matches))
            })
            .collect()
    }

    pub fn for_cuisine(&self, cuisine: Cuisine, ingredients: &[IngredientToken]) -> Vec<RecipeMatch> {
        let mut matches: Vec<RecipeMatch> = CATALOG
            .iter()
            .filter(|recipe| recipe.cuisine == cuisine)
            .map(|recipe| self.score(recipe, ingredients))
            .filter(|recipe| recipe.covers_any() && recipe.match_score > CUISINE_MIN_SCORE)
            .collect();

        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        matches.truncate(PER_CUISINE);
        matches
    }

    pub fn creative_combinations(&self, ingredients: &[IngredientToken]) -> Vec<CreativeCombination> {
        let mut proteins = Vec::new();
        let mut grains = Vec::new();
        let mut vegetables = Vec::new();

        for ingredient in ingredients {
            let name = ingredient.as_str().to_string();
            match FoodCategory::of(ingredient.as_str()) {
                FoodCategory::Proteins => proteins.push(name),
                FoodCategory::Grains => grains.push(name),
                FoodCategory::Vegetables => vegetables.push(name),
                _ => {}
            }
        }

        let mut combinations = Vec::new();

        if let (Some(first_protein), false) = (proteins.first(), grains.is_empty()) {
            let ingredients_used = proteins
                .iter()
                .chain(grains.iter())
                .chain(vegetables.iter().take(2))
                .cloned()
                .collect();

            combinations.push(CreativeCombination {
                name: format!("Fusion {} Bowl", title_case(first_protein)),
                description: format!(
                    "Creative bowl combining {} with {}",
                    proteins.join(", "),
                    grains.join(", ")
                ),
                estimated_prep_time: 20,
                creativity_score: 85,
                ingredients_used,
            });
        }

        if vegetables.len() >= 3 {
            let used: Vec<String> = vegetables.iter().take(4).cloned().collect();
            combinations.push(CreativeCombination {
                name: "Rainbow Veggie Medley".to_string(),
                description: format!("Colorful combination of {}", used.join(", ")),
                estimated_prep_time: 15,
                creativity_score: 75,
                ingredients_used: used,
            });
        }

        combinations
    }

    /// General tips first, then one specific to the cuisine when there is one.
    pub fn cooking_tips(cuisine: Cuisine) -> Vec<&'static str> {
        let mut tips = vec![
            "Prep all ingredients before starting to cook",
            "Taste and adjust seasoning as you go",
            "Use fresh herbs when possible for better flavor",
        ];

        match cuisine {
            Cuisine::Asian => tips.extend([
                "Heat your pan properly before adding oil",
                "Cut vegetables uniformly for even cooking",
                "Don't overcrowd the pan when stir-frying",
            ]),
            Cuisine::Italian => tips.extend([
                "Use good quality olive oil for best flavor",
                "Don't rinse pasta after cooking",
                "Save some pasta water for adjusting sauce consistency",
            ]),
            _ => {}
        }

        tips.truncate(4);
        tips
    }

    /// Apply dietary substitutions, then recompute the missing ingredients so
    /// they describe the substituted recipe.
    pub fn personalize(
        &self,
        recipe: &mut RecipeMatch,
        preferences: &[DietaryPreference],
        ingredients: &[IngredientToken],
    ) {
        apply_substitutions(recipe, preferences);
        if recipe.substitutions.is_empty() {
            return;
        }

        recipe.missing_ingredients = recipe
            .ingredients
            .iter()
            .filter(|needed| matches!(self.coverage(needed, ingredients), Coverage::Missing))
            .map(|needed| title_case(needed))
            .collect();
    }

    fn coverage(&self, needed: &str, ingredients: &[IngredientToken]) -> Coverage {
        if ingredients
            .iter()
            .any(|have| overlaps(needed, have.as_str()))
        {
            return Coverage::Have;
        }

        let available = ingredients.iter().map(IngredientToken::as_str);
        match best_match(needed, available, self.similarity_threshold) {
            Some(_) => Coverage::Similar,
            None => Coverage::Missing,
        }
    }

    fn score(&self, recipe: &CatalogRecipe, ingredients: &[IngredientToken]) -> RecipeMatch {
        let mut matches = 0.0_f64;
        let mut missing = Vec::new();

        for needed in recipe.ingredients {
            match self.coverage(needed, ingredients) {
                Coverage::Have => matches += 1.0,
                Coverage::Similar => matches += FUZZY_CREDIT,
                Coverage::Missing => missing.push(title_case(needed)),
            }
        }

        let base = matches / recipe.ingredients.len() as f64 * 100.0;
        let bonus = f64::from(recipe.waste_reduction_score) * 0.1;
        let match_score = (base + bonus).trunc() as u32;

        RecipeMatch {
            name: recipe.name.to_string(),
            cuisine: recipe.cuisine,
            ingredients: recipe.ingredients.iter().map(|i| i.to_string()).collect(),
            instructions: recipe.instructions.iter().map(|i| i.to_string()).collect(),
            prep_time: recipe.prep_time,
            difficulty: recipe.difficulty.to_string(),
            waste_reduction_score: recipe.waste_reduction_score,
            match_score,
            missing_ingredients: missing,
            substitutions: Vec::new(),
            dietary_adapted: Vec::new(),
        }
    }
}

impl Default for SmartRecipeEngine {
    fn default() -> Self {
        Self::new(70)
    }
}
