use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::Local;
use foodcoach_impact::{Achievement, ImpactReport, WeeklyChallenge, weekly_challenge};
use serde::Serialize;

use crate::error::AppError;
use crate::routes::{AppState, IngredientsRequest, ingredient_tokens};

#[derive(Debug, Serialize)]
pub struct ImpactResponse {
    pub success: bool,
    pub impact: ImpactReport,
    pub achievement: Achievement,
    pub challenge: WeeklyChallenge,
}

/// POST /api/impact - Savings from using the ingredients instead of wasting them
pub async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<IngredientsRequest>, JsonRejection>,
) -> Result<Json<ImpactResponse>, AppError> {
    let Json(request) = payload?;
    let ingredients = ingredient_tokens(&request.ingredients)?;

    let estimator = state.coach.estimator();
    let impact = estimator.estimate(&ingredients);
    let achievement = estimator.tiers().level_for(impact.totals.co2_reduced_kg);

    Ok(Json(ImpactResponse {
        success: true,
        impact,
        achievement,
        challenge: weekly_challenge(Local::now().date_naive()),
    }))
}
