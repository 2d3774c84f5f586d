//! Data Transfer Objects for API responses.
//!
//! Request bodies are accepted as untyped JSON and checked by
//! [`crate::domain::validation`]; responses use Serde.

pub mod feedback;
pub mod health;
