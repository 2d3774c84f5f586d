//! Outbound notification trait.

use crate::domain::entities::WebhookPayload;
use async_trait::async_trait;

/// Failure delivering a notification.
///
/// Carries the upstream detail so it can be logged; HTTP callers only ever see
/// a generic server error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("webhook request failed: {0}")]
    Transport(String),

    /// The webhook answered with a non-success status.
    #[error("webhook rejected notification with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Delivers a notification to the configured webhook.
///
/// Exactly one delivery attempt is made per call. Implementations must not
/// retry or queue.
///
/// # Implementations
///
/// - [`crate::infrastructure::webhook::HttpWebhookNotifier`] - HTTP POST via `reqwest`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebhookNotifier: Send + Sync {
    /// Sends the payload.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] if the webhook is unreachable or rejects the request.
    async fn dispatch(&self, payload: &WebhookPayload) -> Result<(), DispatchError>;

    /// Human-readable target for health reports. Must not reveal secrets.
    fn describe(&self) -> String;
}
