//! Utility functions shared across layers.

pub mod redact;

pub use redact::redact_url;
