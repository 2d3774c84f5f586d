//! HTTP server initialization and runtime setup.
//!
//! Wires the webhook client, quota checker and content tables into
//! [`AppState`], then runs the Axum server until Ctrl-C.

use crate::application::services::FeedbackService;
use crate::config::Config;
use crate::domain::content::FeedbackContent;
use crate::domain::ports::QuotaChecker;
use crate::domain::random::ThreadRandom;
use crate::infrastructure::quota::{GovernorQuota, UnlimitedQuota};
use crate::infrastructure::webhook::HttpWebhookNotifier;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the shared state from configuration.
///
/// # Errors
///
/// Returns an error if the webhook URL is invalid or the HTTP client cannot
/// be created.
pub fn build_state(config: &Config) -> Result<AppState> {
    let notifier = HttpWebhookNotifier::new(config.webhook_url()?, config.webhook_timeout())
        .context("Failed to create webhook HTTP client")?;

    let quota: Arc<dyn QuotaChecker> = match config.rate_limit() {
        Some((per_minute, burst)) => {
            tracing::info!("Rate limiting enabled (governor)");
            Arc::new(GovernorQuota::new(per_minute, burst))
        }
        None => {
            tracing::info!("Rate limiting disabled");
            Arc::new(UnlimitedQuota::new())
        }
    };

    let content = Arc::new(FeedbackContent::builtin());

    let feedback_service = Arc::new(FeedbackService::new(
        Arc::new(notifier),
        quota,
        content.clone(),
        config.webhook_profile(),
        config.rate_limit_key.clone(),
    ));

    Ok(AppState::new(
        feedback_service,
        content,
        Arc::new(ThreadRandom),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - State construction fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
