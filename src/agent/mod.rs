//! The chat pipeline: extract ingredients, pick an intent, consult the
//! domain crates and compose one reply.

mod composer;
mod extractor;
mod intent;

use std::{sync::Arc, time::Duration};

use chrono::NaiveDate;
use foodcoach_impact::{ImpactEstimator, did_you_know, weekly_challenge};
use foodcoach_mealplan::MealPlanner;
use foodcoach_nutrition::{Lookup, NutritionTable};
use foodcoach_pantry::preservation_strategies;
use foodcoach_recipe::{
    DisabledSearch, HttpRecipeSearch, RecipeFinder, RecipeSearch, SmartRecipeEngine,
};
use foodcoach_shared::IngredientToken;

use crate::config::Config;

pub use composer::{HELP, IngredientFindings, impact_reply, ingredient_reply, meal_plan_reply};
pub use extractor::{MAX_INGREDIENTS, extract_ingredients};
pub use intent::Intent;

const CHAT_SMART_RECIPES: usize = 3;

/// Long-lived, read-only collaborators shared by every request.
pub struct FoodCoach {
    nutrition: NutritionTable,
    finder: RecipeFinder,
    engine: SmartRecipeEngine,
    estimator: ImpactEstimator,
    planner: MealPlanner,
    similarity_threshold: u8,
}

impl FoodCoach {
    pub fn new(
        nutrition: NutritionTable,
        finder: RecipeFinder,
        estimator: ImpactEstimator,
        similarity_threshold: u8,
    ) -> Self {
        Self {
            nutrition,
            finder,
            engine: SmartRecipeEngine::new(similarity_threshold),
            estimator,
            planner: MealPlanner,
            similarity_threshold,
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let nutrition = NutritionTable::load_or_bundled(&config.data.nutrition_csv)?;

        let search_config = &config.recipe_search;
        let search: Arc<dyn RecipeSearch> = if search_config.enabled {
            Arc::new(HttpRecipeSearch::new(
                search_config.base_url.clone(),
                Duration::from_secs(search_config.timeout_secs),
                search_config.max_results,
                search_config.query_ingredients,
            )?)
        } else {
            tracing::info!("Recipe search disabled, fallback recipes only");
            Arc::new(DisabledSearch)
        };

        Ok(Self::new(
            nutrition,
            RecipeFinder::new(search, search_config.max_results),
            ImpactEstimator::new(config.impact.settings()),
            config.matching.similarity_threshold,
        ))
    }

    pub fn nutrition(&self) -> &NutritionTable {
        &self.nutrition
    }

    pub fn engine(&self) -> &SmartRecipeEngine {
        &self.engine
    }

    pub fn estimator(&self) -> &ImpactEstimator {
        &self.estimator
    }

    pub fn planner(&self) -> &MealPlanner {
        &self.planner
    }

    pub fn lookup(&self, ingredient: &IngredientToken) -> Lookup<'_> {
        self.nutrition.lookup(ingredient, self.similarity_threshold)
    }

    /// Answer one chat message. Never fails: missing ingredients produce the
    /// help text and a failing recipe service degrades to fallback recipes.
    #[tracing::instrument(skip_all, fields(intent = tracing::field::Empty, ingredients = tracing::field::Empty))]
    pub async fn respond(&self, message: &str, today: NaiveDate) -> String {
        let intent = Intent::classify(message);
        let ingredients = extract_ingredients(message);

        let span = tracing::Span::current();
        span.record("intent", tracing::field::display(intent));
        span.record("ingredients", ingredients.len());

        if ingredients.is_empty() {
            return HELP.to_string();
        }

        match intent {
            Intent::MealPlan => self.meal_plan_text(&ingredients, today),
            Intent::Impact => self.impact_text(&ingredients, today),
            Intent::Ingredients => self.ingredient_text(&ingredients, today).await,
        }
    }

    pub fn meal_plan_text(&self, ingredients: &[IngredientToken], today: NaiveDate) -> String {
        let plan = self.planner.plan(ingredients, today);
        meal_plan_reply(&plan)
    }

    fn impact_text(&self, ingredients: &[IngredientToken], today: NaiveDate) -> String {
        let report = self.estimator.estimate(ingredients);
        let achievement = self.estimator.tiers().level_for(report.totals.co2_reduced_kg);
        impact_reply(&report, achievement, weekly_challenge(today))
    }

    async fn ingredient_text(&self, ingredients: &[IngredientToken], today: NaiveDate) -> String {
        let recipes = self.finder.find(ingredients).await;
        let smart_recipes = self.engine.find_best(ingredients, CHAT_SMART_RECIPES);

        let nutrition: Vec<(IngredientToken, Lookup<'_>)> = ingredients
            .iter()
            .map(|ingredient| (ingredient.clone(), self.lookup(ingredient)))
            .collect();

        let preservation = preservation_strategies(ingredients);
        let impact = self.estimator.estimate(ingredients);
        let achievement = self.estimator.tiers().level_for(impact.totals.co2_reduced_kg);

        ingredient_reply(&IngredientFindings {
            smart_recipes: &smart_recipes,
            recipes: &recipes,
            nutrition: &nutrition,
            preservation: &preservation,
            impact: &impact,
            achievement,
            did_you_know: did_you_know(today),
        })
    }
}
