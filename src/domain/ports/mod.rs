//! Collaborator traits for the domain layer.
//!
//! The submission flow talks to the outside world through these traits only.
//! Concrete implementations live in `crate::infrastructure`; mocks are
//! generated via `mockall` for unit tests.
//!
//! - [`WebhookNotifier`] - Delivers notifications
//! - [`QuotaChecker`] - Allows or denies a submission

pub mod notifier;
pub mod quota;

pub use notifier::{DispatchError, WebhookNotifier};
pub use quota::{QuotaChecker, QuotaDecision};

#[cfg(test)]
pub use notifier::MockWebhookNotifier;
#[cfg(test)]
pub use quota::MockQuotaChecker;
