//! Webhook notifier backed by `reqwest`.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::domain::entities::WebhookPayload;
use crate::domain::ports::{DispatchError, WebhookNotifier};
use crate::utils::redact_url;

/// Longest prefix of a rejection body kept for errors and logs.
const MAX_ERROR_BODY_BYTES: usize = 512;

/// Recorded when the rejection body cannot be read.
const UNREADABLE_BODY: &str = "<unreadable body>";

/// Posts notifications as JSON to a fixed webhook URL.
///
/// One request per [`WebhookNotifier::dispatch`] call; no retries. Without a
/// configured timeout the request waits as long as the client default allows.
#[derive(Debug, Clone)]
pub struct HttpWebhookNotifier {
    client: reqwest::Client,
    url: Url,
}

impl HttpWebhookNotifier {
    /// Creates a notifier for `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (e.g. TLS backend
    /// initialization fails).
    pub fn new(url: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("docs-feedback/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url,
        })
    }
}

#[async_trait]
impl WebhookNotifier for HttpWebhookNotifier {
    async fn dispatch(&self, payload: &WebhookPayload) -> Result<(), DispatchError> {
        // The webhook URL embeds its secret token, keep it out of error text.
        let response = self
            .client
            .post(self.url.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| DispatchError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "Webhook accepted notification");
            return Ok(());
        }

        let body = read_error_body(response).await;
        Err(DispatchError::Rejected {
            status: status.as_u16(),
            body,
        })
    }

    fn describe(&self) -> String {
        redact_url(&self.url)
    }
}

/// Reads at most [`MAX_ERROR_BODY_BYTES`] of a rejection body.
///
/// Longer bodies are cut and end with `...`.
async fn read_error_body(mut response: reqwest::Response) -> String {
    let mut buf: Vec<u8> = Vec::with_capacity(MAX_ERROR_BODY_BYTES);
    let mut truncated = false;

    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                let room = MAX_ERROR_BODY_BYTES - buf.len();
                if chunk.len() > room {
                    buf.extend_from_slice(&chunk[..room]);
                    truncated = true;
                    break;
                }
                buf.extend_from_slice(&chunk);
            }
            Ok(None) => break,
            Err(_) => return UNREADABLE_BODY.to_string(),
        }
    }

    let mut body = String::from_utf8_lossy(&buf).into_owned();
    if truncated {
        body.push_str("...");
    }
    body
}
