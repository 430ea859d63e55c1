use std::str::FromStr;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use foodcoach_recipe::{CreativeCombination, Cuisine, DietaryPreference, RecipeMatch};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::routes::{AppState, ingredient_tokens};

const MAX_RECIPES: usize = 5;

#[derive(Debug, Deserialize)]
pub struct SmartRecipesRequest {
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SmartRecipesResponse {
    pub success: bool,
    pub recipes: Vec<RecipeMatch>,
    pub creative_combinations: Vec<CreativeCombination>,
    pub total_recipes: usize,
}

/// POST /api/smart-recipes - Catalog recipes ranked against the ingredients
///
/// A cuisine narrows results to that cuisine's top matches; an unknown
/// cuisine yields no recipes. Unknown dietary preferences are ignored.
pub async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<SmartRecipesRequest>, JsonRejection>,
) -> Result<Json<SmartRecipesResponse>, AppError> {
    let Json(request) = payload?;
    let ingredients = ingredient_tokens(&request.ingredients)?;
    let engine = state.coach.engine();

    let cuisine = request
        .cuisine
        .as_deref()
        .map(str::trim)
        .filter(|cuisine| !cuisine.is_empty());

    let mut recipes = match cuisine {
        Some(name) => match Cuisine::from_str(name) {
            Ok(cuisine) => engine.for_cuisine(cuisine, &ingredients),
            Err(_) => {
                tracing::debug!(cuisine = name, "Unknown cuisine requested");
                Vec::new()
            }
        },
        None => engine.find_best(&ingredients, MAX_RECIPES),
    };

    let preferences: Vec<DietaryPreference> = request
        .dietary_preferences
        .iter()
        .filter_map(|preference| DietaryPreference::parse_lenient(preference))
        .collect();

    if !preferences.is_empty() {
        for recipe in &mut recipes {
            engine.personalize(recipe, &preferences, &ingredients);
        }
    }

    Ok(Json(SmartRecipesResponse {
        success: true,
        total_recipes: recipes.len(),
        creative_combinations: engine.creative_combinations(&ingredients),
        recipes,
    }))
}
