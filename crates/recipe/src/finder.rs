use std::sync::Arc;

use foodcoach_shared::IngredientToken;

use crate::{Recipe, RecipeError, RecipeSearch, fallback};

/// Recipe lookup that never fails: search errors and empty results degrade to
/// the embedded fallback list.
#[derive(Clone)]
pub struct RecipeFinder {
    search: Arc<dyn RecipeSearch>,
    max_results: usize,
}

impl RecipeFinder {
    pub fn new(search: Arc<dyn RecipeSearch>, max_results: usize) -> Self {
        Self {
            search,
            max_results,
        }
    }

    pub async fn find(&self, ingredients: &[IngredientToken]) -> Vec<Recipe> {
        match self.search.search(ingredients).await {
            Ok(recipes) if !recipes.is_empty() => recipes,
            Ok(_) => {
                tracing::info!("Recipe search returned no usable results, using fallback recipes");
                fallback::matching(ingredients, self.max_results)
            }
            Err(RecipeError::Disabled) => fallback::matching(ingredients, self.max_results),
            Err(err) => {
                tracing::warn!(error = %err, "Recipe search failed, using fallback recipes");
                fallback::matching(ingredients, self.max_results)
            }
        }
    }
}
