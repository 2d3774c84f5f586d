//! Outbound webhook notification payload.

use serde::Serialize;

/// Notification body posted to the webhook.
///
/// Matches the chat-webhook message shape: sender identity plus a list of
/// rich embeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    pub username: String,
    pub avatar_url: String,
    pub embeds: Vec<Embed>,
}

/// Rich-content block attached to a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub color: u32,
    pub title: String,
    pub description: String,
}

/// Sender identity and embed color used for every notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookProfile {
    pub username: String,
    pub avatar_url: String,
    pub color: u32,
}

impl WebhookProfile {
    pub const DEFAULT_USERNAME: &'static str = "Feedback";
    pub const DEFAULT_AVATAR_URL: &'static str =
        "https://i.kym-cdn.com/entries/icons/facebook/000/043/403/cover3.jpg";
    pub const DEFAULT_COLOR: u32 = 3_447_003;
}

impl Default for WebhookProfile {
    fn default() -> Self {
        Self {
            username: Self::DEFAULT_USERNAME.to_string(),
            avatar_url: Self::DEFAULT_AVATAR_URL.to_string(),
            color: Self::DEFAULT_COLOR,
        }
    }
}

impl WebhookPayload {
    /// Builds a single-embed notification for the given profile.
    pub fn single_embed(
        profile: &WebhookProfile,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            username: profile.username.clone(),
            avatar_url: profile.avatar_url.clone(),
            embeds: vec![Embed {
                color: profile.color,
                title: title.into(),
                description: description.into(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_wire_shape() {
        let payload = WebhookPayload::single_embed(&WebhookProfile::default(), "Title", "Body");

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "username": "Feedback",
                "avatar_url": WebhookProfile::DEFAULT_AVATAR_URL,
                "embeds": [
                    { "color": 3447003, "title": "Title", "description": "Body" }
                ]
            })
        );
    }
}
