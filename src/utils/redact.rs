//! Redaction of secrets in URLs for logs and health output.

use url::Url;

/// Reduces a URL to scheme, host and port.
///
/// Chat webhooks carry their credentials in the path
/// (`/api/webhooks/{id}/{token}`), and other services use userinfo or query
/// strings, so everything after the authority is replaced with `/***`.
///
/// # Examples
///
/// ```
/// use docs_feedback::utils::redact_url;
/// use url::Url;
///
/// let url = Url::parse("https://discord.com/api/webhooks/123/secret-token").unwrap();
/// assert_eq!(redact_url(&url), "https://discord.com/***");
/// ```
pub fn redact_url(url: &Url) -> String {
    let host = url.host_str().unwrap_or("");
    let has_secrets = !matches!(url.path(), "" | "/")
        || url.query().is_some()
        || !url.username().is_empty()
        || url.password().is_some();

    let mut redacted = match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    };

    if has_secrets {
        redacted.push_str("/***");
    }

    redacted
}
