use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::routes::AppState;
use crate::session::{ConversationTurn, SessionId};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub history: Vec<ConversationTurn>,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub success: bool,
    pub message: &'static str,
}

/// POST /api/chat - Answer one message and record the exchange
///
/// A rejected body or blank message leaves the history untouched.
#[tracing::instrument(skip_all, fields(session = %session))]
pub async fn chat(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;

    let message = request.message.trim().to_string();
    if message.is_empty() {
        return Err(AppError::EmptyMessage);
    }

    let coach = state.coach.clone();
    let today = Local::now().date_naive();
    let prompt = message.clone();
    let response = tokio::spawn(async move { coach.respond(&prompt, today).await })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    state
        .sessions
        .append(
            session,
            [
                ConversationTurn::user(message),
                ConversationTurn::agent(response.clone()),
            ],
        )
        .await;

    Ok(Json(ChatResponse {
        success: true,
        response,
    }))
}

/// GET /api/history - The caller's conversation so far
pub async fn history(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        success: true,
        history: state.sessions.history(session).await,
    })
}

/// POST /api/clear - Forget the caller's conversation
pub async fn clear(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Json<ClearResponse> {
    state.sessions.clear(session).await;
    tracing::info!(session = %session, "Chat history cleared");

    Json(ClearResponse {
        success: true,
        message: "Chat history cleared successfully!",
    })
}
