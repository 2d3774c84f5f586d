//! Submission quota checkers.
//!
//! Provides two [`QuotaChecker`](crate::domain::ports::QuotaChecker) implementations:
//! - [`GovernorQuota`] - In-memory token bucket
//! - [`UnlimitedQuota`] - No-op implementation for disabled limiting

mod governor_quota;
mod unlimited;

pub use governor_quota::GovernorQuota;
pub use unlimited::UnlimitedQuota;
