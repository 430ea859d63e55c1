use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Please enter some ingredients or ask a question!")]
    EmptyMessage,

    #[error("Please provide a list of ingredients")]
    MissingIngredients,

    #[error("Internal server error")]
    Internal(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MalformedRequest(reason) => {
                tracing::debug!(%reason, "Rejected malformed request");
                StatusCode::BAD_REQUEST
            }
            AppError::EmptyMessage | AppError::MissingIngredients => StatusCode::BAD_REQUEST,
            AppError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let error = match &self {
            AppError::Internal(_) => "Sorry, I encountered an error. Please try again!".to_string(),
            other => other.to_string(),
        };

        (status, Json(json!({ "success": false, "error": error }))).into_response()
    }
}
