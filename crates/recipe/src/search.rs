use std::time::Duration;

use async_trait::async_trait;
use foodcoach_shared::IngredientToken;
use reqwest::Client;
use serde::Deserialize;

use crate::{Recipe, RecipeError, RecipeSource};

/// A source of recipes for a list of ingredients.
#[async_trait]
pub trait RecipeSearch: Send + Sync {
    async fn search(&self, ingredients: &[IngredientToken]) -> Result<Vec<Recipe>, RecipeError>;
}

/// Search that is switched off; every call reports [`RecipeError::Disabled`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledSearch;

#[async_trait]
impl RecipeSearch for DisabledSearch {
    async fn search(&self, _ingredients: &[IngredientToken]) -> Result<Vec<Recipe>, RecipeError> {
        Err(RecipeError::Disabled)
    }
}

#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    href: Option<String>,
    #[serde(default)]
    ingredients: Option<String>,
}

impl SearchResult {
    fn into_recipe(self) -> Option<Recipe> {
        let name = self.title.map(|title| title.trim().to_string())?;
        let url = self.href.map(|href| href.trim().to_string())?;
        if name.is_empty() || url.is_empty() {
            return None;
        }

        let ingredients = self
            .ingredients
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|ingredient| !ingredient.is_empty())
            .map(str::to_string)
            .collect();

        Some(Recipe {
            name,
            ingredients,
            instructions: Vec::new(),
            prep_time: None,
            url: Some(url),
            source: RecipeSource::External,
        })
    }
}

/// Client for a Recipe Puppy compatible search endpoint
/// (`GET {base_url}?i=tomato,bread&p=1`).
#[derive(Debug, Clone)]
pub struct HttpRecipeSearch {
    client: Client,
    base_url: String,
    max_results: usize,
    query_ingredients: usize,
}

impl HttpRecipeSearch {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        max_results: usize,
        query_ingredients: usize,
    ) -> Result<Self, RecipeError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("foodcoach/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RecipeError::Transport)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            max_results,
            query_ingredients,
        })
    }
}

#[async_trait]
impl RecipeSearch for HttpRecipeSearch {
    #[tracing::instrument(skip_all, fields(service = "recipe_search", ingredients = ingredients.len()))]
    async fn search(&self, ingredients: &[IngredientToken]) -> Result<Vec<Recipe>, RecipeError> {
        let query = ingredients
            .iter()
            .take(self.query_ingredients)
            .map(IngredientToken::as_str)
            .collect::<Vec<_>>()
            .join(",");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("i", query.as_str()), ("p", "1")])
            .send()
            .await
            .map_err(RecipeError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecipeError::Status(status.as_u16()));
        }

        let payload: SearchPayload = response.json().await.map_err(RecipeError::Payload)?;

        let recipes: Vec<Recipe> = payload
            .results
            .into_iter()
            .filter_map(SearchResult::into_recipe)
            .take(self.max_results)
            .collect();

        tracing::debug!(results = recipes.len(), "Recipe search completed");

        Ok(recipes)
    }
}
