//! # Docs Feedback
//!
//! Feedback relay for a documentation site, built with Axum.
//!
//! Readers submit `{message, page, type, heading?}` from the page widget. The
//! service validates the submission, formats it as a chat embed, and posts it
//! to a webhook. Nothing is stored.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, content tables, validation, collaborator traits
//! - **Application Layer** ([`application`]) - Submission orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Webhook client and quota checkers
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export WEBHOOK_URL="https://discord.com/api/webhooks/<id>/<token>"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::FeedbackService;
    pub use crate::domain::content::FeedbackContent;
    pub use crate::domain::entities::{FeedbackSubmission, FeedbackType, WebhookPayload};
    pub use crate::domain::ports::{DispatchError, QuotaChecker, QuotaDecision, WebhookNotifier};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
