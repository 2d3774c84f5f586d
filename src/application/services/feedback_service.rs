//! Feedback submission service.

use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{error, info};

use crate::domain::content::{FeedbackContent, LookupError};
use crate::domain::entities::{FeedbackSubmission, WebhookPayload, WebhookProfile};
use crate::domain::ports::{QuotaChecker, WebhookNotifier};
use crate::domain::validation::validate;
use crate::error::AppError;

/// Default key under which all submissions share one quota.
pub const DEFAULT_QUOTA_KEY: &str = "feedback";

/// Relays validated feedback to the webhook.
///
/// Each call to [`Self::submit`] runs, in order:
///
/// 1. **Validate** the raw body
/// 2. **Check quota** for the fixed key
/// 3. **Compose** the notification
/// 4. **Dispatch** it, exactly once
///
/// Nothing is stored. A failed dispatch loses the submission.
pub struct FeedbackService {
    notifier: Arc<dyn WebhookNotifier>,
    quota: Arc<dyn QuotaChecker>,
    content: Arc<FeedbackContent>,
    profile: WebhookProfile,
    quota_key: String,
}

impl FeedbackService {
    /// Creates a new feedback service.
    pub fn new(
        notifier: Arc<dyn WebhookNotifier>,
        quota: Arc<dyn QuotaChecker>,
        content: Arc<FeedbackContent>,
        profile: WebhookProfile,
        quota_key: impl Into<String>,
    ) -> Self {
        Self {
            notifier,
            quota,
            content,
            profile,
            quota_key: quota_key.into(),
        }
    }

    /// Validates and relays a submission.
    ///
    /// Returns the payload that was delivered.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the body breaks any constraint; nothing is sent
    /// - [`AppError::TooManyRequests`] if the quota denies the submission; nothing is sent
    /// - [`AppError::Internal`] if the content tables lack the type or the webhook
    ///   call fails
    pub async fn submit(&self, raw: &Value) -> Result<WebhookPayload, AppError> {
        let submission = validate(raw)?;

        if !self.quota.check(&self.quota_key).await.is_allowed() {
            return Err(AppError::too_many_requests(
                "Global rate limit exceeded",
                json!({ "key": self.quota_key }),
            ));
        }

        let payload = self.compose(&submission).map_err(|e| {
            error!(error = %e, "Feedback content table mismatch");
            AppError::from(e)
        })?;

        self.notifier.dispatch(&payload).await.map_err(|e| {
            error!(error = %e, kind = %submission.kind, page = %submission.page, "Failed to dispatch feedback");
            AppError::from(e)
        })?;

        info!(kind = %submission.kind, page = %submission.page, "Feedback relayed");

        Ok(payload)
    }

    /// Builds the webhook notification for a submission.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if the option table has no entry for the type.
    pub fn compose(&self, submission: &FeedbackSubmission) -> Result<WebhookPayload, LookupError> {
        let option = self.content.option_for(submission.kind)?;

        Ok(WebhookPayload::single_embed(
            &self.profile,
            option.label.clone(),
            compose_description(submission),
        ))
    }

    /// Target description of the underlying notifier.
    pub fn webhook_target(&self) -> String {
        self.notifier.describe()
    }

    /// Limit description of the underlying quota checker.
    pub fn quota_limit(&self) -> String {
        self.quota.describe()
    }
}

/// Renders the embed description.
///
/// ```text
/// {message}
///
/// **Page:** `{page}`
/// **Heading:** `{heading}`
/// ```
///
/// The heading line appears only when a heading was submitted.
pub fn compose_description(submission: &FeedbackSubmission) -> String {
    let mut description = format!("{}\n\n**Page:** `{}`", submission.message, submission.page);

    if let Some(heading) = &submission.heading {
        description.push_str(&format!("\n**Heading:** `{}`", heading));
    }

    description
}
