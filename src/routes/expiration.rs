use axum::{
    Json,
    extract::rejection::JsonRejection,
};
use chrono::Local;
use foodcoach_pantry::{ExpirationTracker, StorageLocation, TrackingReport};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::routes::ingredient_tokens;

#[derive(Debug, Deserialize)]
pub struct ExpirationRequest {
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub storage_location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExpirationResponse {
    pub success: bool,
    #[serde(flatten)]
    pub report: TrackingReport,
}

/// POST /api/expiration-tracker - Predicted shelf life, most urgent first
pub async fn track(
    payload: Result<Json<ExpirationRequest>, JsonRejection>,
) -> Result<Json<ExpirationResponse>, AppError> {
    let Json(request) = payload?;
    let ingredients = ingredient_tokens(&request.ingredients)?;

    let location = request
        .storage_location
        .as_deref()
        .map(StorageLocation::parse_or_default)
        .unwrap_or_default();

    let report = ExpirationTracker.track(&ingredients, location, Local::now().date_naive());

    Ok(Json(ExpirationResponse {
        success: true,
        report,
    }))
}
