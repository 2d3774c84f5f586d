//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::FeedbackService;
use crate::domain::content::FeedbackContent;
use crate::domain::random::RandomSource;

/// Read-only state shared by all requests.
///
/// Cloning is cheap: every field is an [`Arc`].
#[derive(Clone)]
pub struct AppState {
    pub feedback_service: Arc<FeedbackService>,
    pub content: Arc<FeedbackContent>,
    pub random: Arc<dyn RandomSource>,
}

impl AppState {
    pub fn new(
        feedback_service: Arc<FeedbackService>,
        content: Arc<FeedbackContent>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            feedback_service,
            content,
            random,
        }
    }
}
