//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export WEBHOOK_URL="https://discord.com/api/webhooks/<id>/<token>"
//! export RATE_LIMIT_PER_MINUTE=10   # optional, disabled when unset or 0
//! ```
//!
//! ## Required Variables
//!
//! - `WEBHOOK_URL` - Where notifications are posted (http/https)
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `WEBHOOK_USERNAME` - Sender name shown on notifications (default: `Feedback`)
//! - `WEBHOOK_AVATAR_URL` - Sender avatar image
//! - `WEBHOOK_COLOR` - Embed color as an integer (default: `3447003`)
//! - `WEBHOOK_TIMEOUT_SECS` - Outbound request timeout (default: none)
//! - `RATE_LIMIT_PER_MINUTE` - Submissions allowed per minute (default: disabled)
//! - `RATE_LIMIT_BURST` - Burst size (default: same as per-minute rate)
//! - `RATE_LIMIT_KEY` - Quota key shared by all submissions (default: `feedback`)

use anyhow::{Context, Result};
use std::env;
use std::num::NonZeroU32;
use std::time::Duration;
use url::Url;

use crate::application::services::feedback_service::DEFAULT_QUOTA_KEY;
use crate::domain::entities::WebhookProfile;
use crate::utils::redact_url;

/// Largest valid embed color (`0xFFFFFF`).
const MAX_COLOR: u32 = 0xFF_FFFF;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub webhook_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub webhook_username: String,
    pub webhook_avatar_url: String,
    pub webhook_color: u32,
    /// Outbound request timeout in seconds. `None` leaves the client default.
    pub webhook_timeout_secs: Option<u64>,
    /// Submissions per minute. `0` disables rate limiting.
    pub rate_limit_per_minute: u32,
    /// Token bucket size. Defaults to `rate_limit_per_minute`.
    pub rate_limit_burst: u32,
    pub rate_limit_key: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `WEBHOOK_URL` is missing or a numeric variable
    /// does not parse.
    pub fn from_env() -> Result<Self> {
        let webhook_url = env::var("WEBHOOK_URL").context("WEBHOOK_URL must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let webhook_username = env::var("WEBHOOK_USERNAME")
            .unwrap_or_else(|_| WebhookProfile::DEFAULT_USERNAME.to_string());
        let webhook_avatar_url = env::var("WEBHOOK_AVATAR_URL")
            .unwrap_or_else(|_| WebhookProfile::DEFAULT_AVATAR_URL.to_string());
        let webhook_color =
            parse_var("WEBHOOK_COLOR")?.unwrap_or(WebhookProfile::DEFAULT_COLOR);
        let webhook_timeout_secs = parse_var("WEBHOOK_TIMEOUT_SECS")?;

        let rate_limit_per_minute = parse_var("RATE_LIMIT_PER_MINUTE")?.unwrap_or(0);
        let rate_limit_burst = parse_var("RATE_LIMIT_BURST")?.unwrap_or(rate_limit_per_minute);
        let rate_limit_key =
            env::var("RATE_LIMIT_KEY").unwrap_or_else(|_| DEFAULT_QUOTA_KEY.to_string());

        Ok(Self {
            webhook_url,
            listen_addr,
            log_level,
            log_format,
            webhook_username,
            webhook_avatar_url,
            webhook_color,
            webhook_timeout_secs,
            rate_limit_per_minute,
            rate_limit_burst,
            rate_limit_key,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `webhook_url` or `webhook_avatar_url` is not an http/https URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `webhook_username` or `rate_limit_key` is empty
    /// - `webhook_color` exceeds `0xFFFFFF`
    /// - `webhook_timeout_secs` is zero
    /// - rate limiting is enabled with a zero burst
    pub fn validate(&self) -> Result<()> {
        parse_http_url("WEBHOOK_URL", &self.webhook_url)?;
        parse_http_url("WEBHOOK_AVATAR_URL", &self.webhook_avatar_url)?;

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.webhook_username.trim().is_empty() {
            anyhow::bail!("WEBHOOK_USERNAME must not be empty");
        }

        if self.webhook_color > MAX_COLOR {
            anyhow::bail!(
                "WEBHOOK_COLOR must be at most {} (0xFFFFFF), got {}",
                MAX_COLOR,
                self.webhook_color
            );
        }

        if self.webhook_timeout_secs == Some(0) {
            anyhow::bail!("WEBHOOK_TIMEOUT_SECS must be greater than 0");
        }

        if self.rate_limit_per_minute > 0 && self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_BURST must be at least 1 when rate limiting is enabled");
        }

        if self.rate_limit_key.is_empty() {
            anyhow::bail!("RATE_LIMIT_KEY must not be empty");
        }

        Ok(())
    }

    /// Parsed webhook URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not a valid http/https URL.
    pub fn webhook_url(&self) -> Result<Url> {
        parse_http_url("WEBHOOK_URL", &self.webhook_url)
    }

    /// Sender identity for notifications.
    pub fn webhook_profile(&self) -> WebhookProfile {
        WebhookProfile {
            username: self.webhook_username.clone(),
            avatar_url: self.webhook_avatar_url.clone(),
            color: self.webhook_color,
        }
    }

    /// Outbound request timeout, if configured.
    pub fn webhook_timeout(&self) -> Option<Duration> {
        self.webhook_timeout_secs.map(Duration::from_secs)
    }

    /// Rate and burst when rate limiting is enabled.
    pub fn rate_limit(&self) -> Option<(NonZeroU32, NonZeroU32)> {
        let per_minute = NonZeroU32::new(self.rate_limit_per_minute)?;
        let burst = NonZeroU32::new(self.rate_limit_burst)?;
        Some((per_minute, burst))
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Webhook: {}", mask_webhook_url(&self.webhook_url));
        tracing::info!("  Webhook username: {}", self.webhook_username);

        match self.webhook_timeout_secs {
            Some(secs) => tracing::info!("  Webhook timeout: {}s", secs),
            None => tracing::info!("  Webhook timeout: none"),
        }

        match self.rate_limit() {
            Some((per_minute, burst)) => tracing::info!(
                "  Rate limit: {}/min, burst {} (key '{}')",
                per_minute,
                burst,
                self.rate_limit_key
            ),
            None => tracing::info!("  Rate limit: disabled"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses a variable that may be unset.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a valid number, got '{value}'")),
        Err(_) => Ok(None),
    }
}

fn parse_http_url(name: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value).with_context(|| format!("{name} is not a valid URL"))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!(
            "{name} must start with 'http://' or 'https://', got '{}://'",
            url.scheme()
        );
    }

    Ok(url)
}

/// Masks the secret part of a webhook URL for logging.
///
/// Unparseable input is replaced entirely.
fn mask_webhook_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => redact_url(&parsed),
        Err(_) => "***".to_string(),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
