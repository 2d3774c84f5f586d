//! Feedback categories, prompts and follow-up messages.
//!
//! [`FeedbackContent`] is the single table shared by the submission handler
//! (notification titles) and the read-only content endpoints (what the page
//! widget shows). It is built once at startup and never mutated.

use std::collections::HashMap;

use super::entities::{FeedbackOption, FeedbackType};
use super::random::RandomSource;

/// Prompts inviting the reader to leave feedback.
const PROMPTS: &[&str] = &[
    "Make it count!",
    "Leave some feedback for us!",
    "We're all ears 🐰",
    "Tell us what is missing in FMHY",
    "Your thoughts matter to us 💡",
    "Feedback is a gift 🎁",
    "What do you think?",
    "We appreciate your support 🙏",
    "Help us make FMHY better 🤝",
    "We need your help 👋",
    "Your feedback is valuable 💯",
    "So... what do you think?",
    "I guess you don't need to say anything 😉",
];

/// Option labels in the order the widget lists them.
const OPTIONS: &[(&str, FeedbackType)] = &[
    ("💡 I have a suggestion", FeedbackType::Suggestion),
    ("🐛 I want to report a website bug", FeedbackType::Bug),
    ("👍 I appreciate the work", FeedbackType::Appreciation),
    ("📂 Something else", FeedbackType::Other),
];

const BUG_MESSAGES: &[&str] = &[
    "We're sorry to hear that!",
    "Please try to be as specific as possible and provide us with the steps to reproduce the bug.",
];

const SUGGESTION_MESSAGES: &[&str] = &[
    "We're glad you want to share your ideas!",
    "Nix the fluff and just tell us what you think!",
    "We'll be happy to read your thoughts and incorporate them into our content.",
];

const APPRECIATION_MESSAGES: &[&str] = &[
    "We appreciate your support!",
    "We're always looking for ways to improve!.",
    "Your feedback is valuable and helps us make FMHY better.",
];

const OTHER_MESSAGES: &[&str] = &[
    "We're always looking for ways to improve!",
    "Your feedback is valuable and helps us make FMHY better.",
];

/// Raised when a feedback type has no entry in a content table.
///
/// Validation only admits known types, so this points at a table that was
/// built without one of them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("no prompts configured")]
    MissingPrompts,

    #[error("no feedback option configured for type '{0}'")]
    MissingOption(FeedbackType),

    #[error("no follow-up messages configured for type '{0}'")]
    MissingFollowUps(FeedbackType),
}

/// Immutable content tables.
#[derive(Debug, Clone)]
pub struct FeedbackContent {
    options: Vec<FeedbackOption>,
    prompts: Vec<String>,
    follow_ups: HashMap<FeedbackType, Vec<String>>,
}

impl FeedbackContent {
    /// Creates content from explicit tables.
    pub fn new(
        options: Vec<FeedbackOption>,
        prompts: Vec<String>,
        follow_ups: HashMap<FeedbackType, Vec<String>>,
    ) -> Self {
        Self {
            options,
            prompts,
            follow_ups,
        }
    }

    /// The site's built-in texts.
    pub fn builtin() -> Self {
        let options = OPTIONS
            .iter()
            .map(|(label, value)| FeedbackOption::new(*label, *value))
            .collect();

        let prompts = PROMPTS.iter().map(|p| p.to_string()).collect();

        let follow_ups = FeedbackType::ALL
            .into_iter()
            .map(|kind| {
                let messages = match kind {
                    FeedbackType::Bug => BUG_MESSAGES,
                    FeedbackType::Suggestion => SUGGESTION_MESSAGES,
                    FeedbackType::Appreciation => APPRECIATION_MESSAGES,
                    FeedbackType::Other => OTHER_MESSAGES,
                };
                (kind, messages.iter().map(|m| m.to_string()).collect())
            })
            .collect();

        Self::new(options, prompts, follow_ups)
    }

    /// All options, in display order.
    pub fn options(&self) -> &[FeedbackOption] {
        &self.options
    }

    /// All prompts.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Follow-up messages for a type, empty if none are configured.
    pub fn follow_ups(&self, kind: FeedbackType) -> &[String] {
        self.follow_ups.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Looks up the option record for a type.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::MissingOption`] if the table has no entry for `kind`.
    pub fn option_for(&self, kind: FeedbackType) -> Result<&FeedbackOption, LookupError> {
        self.options
            .iter()
            .find(|option| option.value == kind)
            .ok_or(LookupError::MissingOption(kind))
    }

    /// Picks one prompt uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::MissingPrompts`] if the prompt table is empty.
    pub fn random_prompt(&self, random: &dyn RandomSource) -> Result<&str, LookupError> {
        if self.prompts.is_empty() {
            return Err(LookupError::MissingPrompts);
        }
        Ok(self.prompts[random.pick(self.prompts.len())].as_str())
    }

    /// Picks one follow-up message for `kind` uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::MissingFollowUps`] if no messages exist for `kind`.
    pub fn random_follow_up(
        &self,
        kind: FeedbackType,
        random: &dyn RandomSource,
    ) -> Result<&str, LookupError> {
        let messages = self.follow_ups(kind);
        if messages.is_empty() {
            return Err(LookupError::MissingFollowUps(kind));
        }
        Ok(messages[random.pick(messages.len())].as_str())
    }
}

impl Default for FeedbackContent {
    fn default() -> Self {
        Self::builtin()
    }
}
