//! In-memory token bucket quota using `governor`.

use async_trait::async_trait;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::num::NonZeroU32;
use tracing::warn;

use crate::domain::ports::{QuotaChecker, QuotaDecision};

/// Keyed token bucket.
///
/// # Limits
///
/// - **Rate**: `per_minute` submissions per minute, per key
/// - **Burst**: up to `burst` submissions at once
///
/// State lives in process memory and resets on restart.
pub struct GovernorQuota {
    limiter: DefaultKeyedRateLimiter<String>,
    per_minute: NonZeroU32,
    burst: NonZeroU32,
}

impl GovernorQuota {
    pub fn new(per_minute: NonZeroU32, burst: NonZeroU32) -> Self {
        let quota = Quota::per_minute(per_minute).allow_burst(burst);

        Self {
            limiter: RateLimiter::keyed(quota),
            per_minute,
            burst,
        }
    }
}

#[async_trait]
impl QuotaChecker for GovernorQuota {
    async fn check(&self, key: &str) -> QuotaDecision {
        match self.limiter.check_key(&key.to_string()) {
            Ok(()) => QuotaDecision::Allowed,
            Err(_) => {
                warn!(key, "Submission quota exceeded");
                QuotaDecision::Denied
            }
        }
    }

    fn describe(&self) -> String {
        format!("{}/min, burst {}", self.per_minute, self.burst)
    }
}
