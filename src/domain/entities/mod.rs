//! Core domain entities.
//!
//! - [`FeedbackSubmission`] - A validated submission (request-scoped)
//! - [`FeedbackType`] / [`FeedbackOption`] - The closed set of categories and their labels
//! - [`WebhookPayload`] - The notification sent to the webhook

pub mod feedback;
pub mod notification;

pub use feedback::{FeedbackOption, FeedbackSubmission, FeedbackType, UnknownFeedbackType};
pub use notification::{Embed, WebhookPayload, WebhookProfile};
