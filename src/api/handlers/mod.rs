//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod content;
pub mod feedback;
pub mod health;

pub use content::{follow_up_handler, options_handler, prompt_handler};
pub use feedback::submit_feedback_handler;
pub use health::health_handler;
