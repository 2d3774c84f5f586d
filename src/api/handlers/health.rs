//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service status and the configured collaborators.
///
/// The webhook is not probed: a probe would post a message to the channel.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "webhook": { "status": "ok", "message": "https://discord.com/***" },
///     "rate_limit": { "status": "ok", "message": "disabled" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            webhook: CheckStatus::ok(state.feedback_service.webhook_target()),
            rate_limit: CheckStatus::ok(state.feedback_service.quota_limit()),
        },
    })
}
