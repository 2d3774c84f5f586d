//! DTOs for the feedback endpoints.

use serde::Serialize;

use crate::domain::entities::FeedbackType;

/// Acknowledgment returned after a submission was relayed.
#[derive(Debug, Serialize)]
pub struct FeedbackAck {
    pub status: &'static str,
}

impl FeedbackAck {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// A randomly chosen prompt inviting feedback.
#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub prompt: String,
}

/// A randomly chosen follow-up message for one feedback type.
#[derive(Debug, Serialize)]
pub struct FollowUpResponse {
    #[serde(rename = "type")]
    pub kind: FeedbackType,
    pub message: String,
}
