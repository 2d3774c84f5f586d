//! API route configuration.

use crate::api::handlers::{
    follow_up_handler, options_handler, prompt_handler, submit_feedback_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Feedback routes.
///
/// # Endpoints
///
/// - `POST /feedback`                  - Submit feedback (relayed to the webhook)
/// - `GET  /feedback/prompt`           - Random prompt inviting feedback
/// - `GET  /feedback/options`          - Feedback categories with labels
/// - `GET  /feedback/messages/{type}`  - Random follow-up message for a category
pub fn feedback_routes() -> Router<AppState> {
    Router::new()
        .route("/feedback", post(submit_feedback_handler))
        .route("/feedback/prompt", get(prompt_handler))
        .route("/feedback/options", get(options_handler))
        .route("/feedback/messages/{type}", get(follow_up_handler))
}
