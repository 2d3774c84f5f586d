//! Submission quota trait.

use async_trait::async_trait;

/// Outcome of a quota check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaDecision {
    Allowed,
    Denied,
}

impl QuotaDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, QuotaDecision::Allowed)
    }
}

/// Decides whether another submission may be relayed.
///
/// Consulted after validation and before the notification is composed, with a
/// fixed key shared by all callers.
///
/// # Implementations
///
/// - [`crate::infrastructure::quota::GovernorQuota`] - In-memory token bucket
/// - [`crate::infrastructure::quota::UnlimitedQuota`] - Always allows
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuotaChecker: Send + Sync {
    /// Consumes one unit of quota for `key`, if available.
    async fn check(&self, key: &str) -> QuotaDecision;

    /// Human-readable limit for health reports.
    fn describe(&self) -> String;
}
