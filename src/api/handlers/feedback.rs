//! Handler for the feedback submission endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::Value;

use crate::api::dto::feedback::FeedbackAck;
use crate::error::AppError;
use crate::state::AppState;

/// Validates a feedback submission and relays it to the webhook.
///
/// # Endpoint
///
/// `POST /feedback`
///
/// # Request Body
///
/// ```json
/// {
///   "message": "Found a typo on the install page",
///   "page": "install",
///   "type": "bug",
///   "heading": "Linux"        // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "status": "ok" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request` (`invalid_json`) if the body is not JSON
/// - `400 Bad Request` (`validation_error`) listing every violated constraint
/// - `429 Too Many Requests` if the submission quota is exhausted
/// - `500 Internal Server Error` if the webhook call fails
pub async fn submit_feedback_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<FeedbackAck>, AppError> {
    let Json(raw) = payload?;

    state.feedback_service.submit(&raw).await?;

    Ok(Json(FeedbackAck::ok()))
}
