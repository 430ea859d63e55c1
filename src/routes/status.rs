use axum::Json;
use chrono::Local;
use foodcoach_impact::{SustainabilityTip, daily_tip};
use serde::Serialize;

const FEATURES: &[&str] = &[
    "Ingredient Chat Coach",
    "Environmental Impact Calculator",
    "Weekly Meal Planning",
    "Smart Recipe Discovery",
    "Nutrition Analysis",
    "Storage Optimization",
    "Expiration Tracking",
    "Sustainability Tracking",
];

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub status: &'static str,
    pub version: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct TipResponse {
    pub success: bool,
    pub tip: SustainabilityTip,
}

/// GET /api/status
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        success: true,
        status: "AI Food Waste and Nutrition Coach is running!",
        version: env!("CARGO_PKG_VERSION"),
        features: FEATURES,
    })
}

/// GET /api/sustainability-tip - The same tip all day
pub async fn sustainability_tip() -> Json<TipResponse> {
    Json(TipResponse {
        success: true,
        tip: daily_tip(Local::now().date_naive()),
    })
}
