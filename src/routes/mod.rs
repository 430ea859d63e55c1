use std::{sync::Arc, time::Duration};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use foodcoach_shared::IngredientToken;
use serde::Deserialize;

use crate::agent::FoodCoach;
use crate::config::Config;
use crate::error::AppError;
use crate::session::SessionStore;

mod chat;
mod expiration;
mod health;
mod impact;
mod meal_plan;
mod smart_recipes;
mod status;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub coach: Arc<FoodCoach>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let coach = FoodCoach::from_config(&config)?;
        let sessions = SessionStore::new(
            Duration::from_secs(config.session.ttl_secs),
            config.session.max_history,
        );

        Ok(Self {
            config,
            coach: Arc::new(coach),
            sessions,
        })
    }
}

/// Body shared by every endpoint that takes a plain ingredient list.
#[derive(Debug, Deserialize)]
pub struct IngredientsRequest {
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Normalize a request's ingredient list; an empty result is a client error.
fn ingredient_tokens(ingredients: &[String]) -> Result<Vec<IngredientToken>, AppError> {
    let tokens = IngredientToken::parse_list(ingredients);
    if tokens.is_empty() {
        return Err(AppError::MissingIngredients);
    }
    Ok(tokens)
}

pub fn router(app_state: AppState) -> Router {
    // Sessions exist only for the conversation routes
    let conversation = Router::new()
        .route("/api/chat", post(chat::chat))
        .route("/api/history", get(chat::history))
        .route("/api/clear", post(chat::clear))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            crate::middleware::session_middleware,
        ));

    Router::new()
        .merge(conversation)
        .route("/", get(crate::assets::index))
        .route("/api/meal-plan", post(meal_plan::generate))
        .route("/api/impact", post(impact::calculate))
        .route("/api/smart-recipes", post(smart_recipes::recommend))
        .route("/api/expiration-tracker", post(expiration::track))
        .route("/api/status", get(status::status))
        .route("/api/sustainability-tip", get(status::sustainability_tip))
        .route("/health", get(health::health))
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
