//! Handlers serving the feedback widget's texts.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::feedback::{FollowUpResponse, PromptResponse};
use crate::domain::entities::{FeedbackOption, FeedbackType};
use crate::error::AppError;
use crate::state::AppState;

/// Returns one prompt chosen at random.
///
/// # Endpoint
///
/// `GET /feedback/prompt`
///
/// # Response
///
/// ```json
/// { "prompt": "Feedback is a gift 🎁" }
/// ```
///
/// # Errors
///
/// Returns `500 Internal Server Error` if no prompts are configured.
pub async fn prompt_handler(
    State(state): State<AppState>,
) -> Result<Json<PromptResponse>, AppError> {
    let prompt = state.content.random_prompt(state.random.as_ref())?;

    Ok(Json(PromptResponse {
        prompt: prompt.to_string(),
    }))
}

/// Lists the feedback categories in display order.
///
/// # Endpoint
///
/// `GET /feedback/options`
///
/// # Response
///
/// ```json
/// [
///   { "label": "💡 I have a suggestion", "value": "suggestion" },
///   { "label": "🐛 I want to report a website bug", "value": "bug" }
/// ]
/// ```
pub async fn options_handler(State(state): State<AppState>) -> Json<Vec<FeedbackOption>> {
    Json(state.content.options().to_vec())
}

/// Returns one follow-up message for a feedback type, chosen at random.
///
/// # Endpoint
///
/// `GET /feedback/messages/{type}`
///
/// # Errors
///
/// Returns `404 Not Found` for an unknown type.
pub async fn follow_up_handler(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<FollowUpResponse>, AppError> {
    let kind: FeedbackType = kind.parse().map_err(|_| {
        AppError::not_found(
            "Unknown feedback type",
            json!({ "type": kind, "allowed": FeedbackType::names() }),
        )
    })?;

    let message = state
        .content
        .random_follow_up(kind, state.random.as_ref())?;

    Ok(Json(FollowUpResponse {
        kind,
        message: message.to_string(),
    }))
}
