//! Infrastructure layer: implementations of the domain collaborator traits.
//!
//! - [`webhook`] - HTTP delivery of notifications
//! - [`quota`] - Submission rate limiting

pub mod quota;
pub mod webhook;
