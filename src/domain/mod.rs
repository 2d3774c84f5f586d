//! Domain layer: feedback entities, content tables, validation and
//! collaborator traits.
//!
//! # Architecture
//!
//! - [`entities`] - Submission, option and notification data structures
//! - [`content`] - Labels, prompts and follow-up messages
//! - [`validation`] - Turns an untyped body into a [`entities::FeedbackSubmission`]
//! - [`random`] - Injectable randomness for content selection
//! - [`ports`] - Webhook and quota traits implemented by infrastructure
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Content tables are built once and shared read-only
//! - Orchestration lives in [`crate::application::services`]

pub mod content;
pub mod entities;
pub mod ports;
pub mod random;
pub mod validation;
