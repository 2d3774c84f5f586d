#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use axum_test::TestServer;
use std::sync::{Arc, Mutex};
use docs_feedback::api::handlers::health_handler;
use docs_feedback::api::routes::feedback_routes;
use docs_feedback::application::services::FeedbackService;
use docs_feedback::domain::content::FeedbackContent;
use docs_feedback::domain::entities::{WebhookPayload, WebhookProfile};
use docs_feedback::domain::ports::{DispatchError, QuotaChecker, WebhookNotifier};
use docs_feedback::domain::random::SeededRandom;
use docs_feedback::infrastructure::quota::UnlimitedQuota;
use docs_feedback::state::AppState;

pub const TEST_SEED: u64 = 42;

/// Notifier that records every payload instead of sending it.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<WebhookPayload>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<WebhookPayload> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebhookNotifier for RecordingNotifier {
    async fn dispatch(&self, payload: &WebhookPayload) -> Result<(), DispatchError> {
        self.sent.lock().unwrap().push(payload.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "recording".to_string()
    }
}

/// Notifier that fails every dispatch as if the network were down.
pub struct FailingNotifier;

#[async_trait]
impl WebhookNotifier for FailingNotifier {
    async fn dispatch(&self, _payload: &WebhookPayload) -> Result<(), DispatchError> {
        Err(DispatchError::Transport("connection refused".to_string()))
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

pub fn create_test_state(
    notifier: Arc<dyn WebhookNotifier>,
    quota: Arc<dyn QuotaChecker>,
) -> AppState {
    create_state_with_content(notifier, quota, FeedbackContent::builtin())
}

pub fn create_state_with_content(
    notifier: Arc<dyn WebhookNotifier>,
    quota: Arc<dyn QuotaChecker>,
    content: FeedbackContent,
) -> AppState {
    let content = Arc::new(content);

    let feedback_service = Arc::new(FeedbackService::new(
        notifier,
        quota,
        content.clone(),
        WebhookProfile::default(),
        "feedback",
    ));

    AppState::new(feedback_service, content, Arc::new(SeededRandom::new(TEST_SEED)))
}

pub fn create_unlimited_state(notifier: Arc<dyn WebhookNotifier>) -> AppState {
    create_test_state(notifier, Arc::new(UnlimitedQuota::new()))
}

pub fn test_app(state: AppState) -> Router {
    feedback_routes()
        .route("/health", get(health_handler))
        .with_state(state)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(test_app(state)).unwrap()
}
