//! Feedback submission entities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a feedback submission.
///
/// The set is closed: the same four values drive request validation and the
/// options shown to readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    Bug,
    Suggestion,
    Appreciation,
    Other,
}

impl FeedbackType {
    /// Every feedback type, in declaration order.
    pub const ALL: [FeedbackType; 4] = [
        FeedbackType::Bug,
        FeedbackType::Suggestion,
        FeedbackType::Appreciation,
        FeedbackType::Other,
    ];

    /// Wire name of the type (`bug`, `suggestion`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackType::Bug => "bug",
            FeedbackType::Suggestion => "suggestion",
            FeedbackType::Appreciation => "appreciation",
            FeedbackType::Other => "other",
        }
    }

    /// Wire names of all types.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(FeedbackType::as_str).collect()
    }
}

impl fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`FeedbackType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feedback type: {0}")]
pub struct UnknownFeedbackType(pub String);

impl FromStr for FeedbackType {
    type Err = UnknownFeedbackType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownFeedbackType(s.to_string()))
    }
}

/// A validated feedback submission.
///
/// Only produced by [`crate::domain::validation::validate`], so every field is
/// within its bounds. Lives for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackSubmission {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: FeedbackType,
    pub page: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
}

/// Display record for one feedback type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackOption {
    pub label: String,
    pub value: FeedbackType,
}

impl FeedbackOption {
    pub fn new(label: impl Into<String>, value: FeedbackType) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
