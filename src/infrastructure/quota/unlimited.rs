//! Quota checker that never denies.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{QuotaChecker, QuotaDecision};

/// Allows every submission.
///
/// Used when no rate limit is configured.
pub struct UnlimitedQuota;

impl UnlimitedQuota {
    pub fn new() -> Self {
        debug!("Using UnlimitedQuota (rate limiting disabled)");
        Self
    }
}

impl Default for UnlimitedQuota {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuotaChecker for UnlimitedQuota {
    async fn check(&self, _key: &str) -> QuotaDecision {
        QuotaDecision::Allowed
    }

    fn describe(&self) -> String {
        "disabled".to_string()
    }
}
