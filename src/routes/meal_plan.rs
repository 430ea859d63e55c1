use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::Local;
use foodcoach_mealplan::WeeklyPlan;
use serde::Serialize;

use crate::agent::meal_plan_reply;
use crate::error::AppError;
use crate::routes::{AppState, IngredientsRequest, ingredient_tokens};

#[derive(Debug, Serialize)]
pub struct MealPlanResponse {
    pub success: bool,
    /// The plan rendered the way the chat shows it.
    pub meal_plan: String,
    pub plan: WeeklyPlan,
}

/// POST /api/meal-plan - Seven-day plan starting today
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<IngredientsRequest>, JsonRejection>,
) -> Result<Json<MealPlanResponse>, AppError> {
    let Json(request) = payload?;
    let ingredients = ingredient_tokens(&request.ingredients)?;

    let plan = state
        .coach
        .planner()
        .plan(&ingredients, Local::now().date_naive());

    Ok(Json(MealPlanResponse {
        success: true,
        meal_plan: meal_plan_reply(&plan),
        plan,
    }))
}
