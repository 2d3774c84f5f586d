//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations: validation, quota checks and
//! notification delivery, all through the collaborator traits in
//! [`crate::domain::ports`].
//!
//! # Available Services
//!
//! - [`services::feedback_service::FeedbackService`] - Feedback validation and relay
pub mod services;
