//! Business logic services for the application layer.

pub mod feedback_service;

pub use feedback_service::FeedbackService;
