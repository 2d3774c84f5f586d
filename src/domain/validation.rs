//! Validation of raw feedback submissions.
//!
//! Validation runs in two passes over the untyped JSON body:
//!
//! 1. **Shape** - each field must be present (except `heading`) and be a string.
//! 2. **Bounds** - string lengths and the type value are checked with
//!    [`validator`] rules.
//!
//! Both passes collect every violation instead of stopping at the first one, so
//! the caller learns everything wrong with a request in a single round trip.
//!
//! | Field | Required | Rule |
//! |-----------|----------|--------------------------------------------------|
//! | `message` | yes | 5-1000 characters |
//! | `type` | yes | one of `bug`, `suggestion`, `appreciation`, `other` |
//! | `page` | yes | 1-20 characters |
//! | `heading` | no | 1-30 characters |
//!
//! Lengths count characters (Unicode scalar values), not bytes. Clients that
//! count UTF-16 code units, as JavaScript's `String.length` does, see
//! characters outside the Basic Multilingual Plane (most emoji) as two units,
//! so a message of 1000 emoji passes here but would exceed their 1000 limit.

use serde::Serialize;
use serde_json::{Map, Value, json};
use std::borrow::Cow;
use validator::Validate;

use super::entities::{FeedbackSubmission, FeedbackType};

/// Field names in reporting order, paired with the key used by [`FeedbackFields`].
const FIELDS: [(&str, &str); 4] = [
    ("message", "message"),
    ("kind", "type"),
    ("page", "page"),
    ("heading", "heading"),
];

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Name of the offending field as it appears in the request body.
    pub field: String,
    /// Rule that failed: `required`, `type`, `length`, or `one_of`.
    pub rule: String,
    /// The value that was received (`null` when missing).
    pub actual: Value,
    /// Rule parameters such as `min`, `max` or `allowed`.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub constraint: Map<String, Value>,
}

impl Violation {
    fn new(field: &str, rule: &str, actual: Value) -> Self {
        Self {
            field: field.to_string(),
            rule: rule.to_string(),
            actual,
            constraint: Map::new(),
        }
    }

    fn with_constraint(mut self, key: &str, value: Value) -> Self {
        self.constraint.insert(key.to_string(), value);
        self
    }
}

/// Returned when a submission breaks one or more constraints.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid feedback submission: {}", describe(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// Names of the offending fields, in reporting order.
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }
}

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{} ({})", v.field, v.rule))
        .collect::<Vec<_>>()
        .join(", ")
}

/// String fields that passed the shape check, awaiting bounds checks.
#[derive(Debug, Default, Validate)]
struct FeedbackFields {
    #[validate(length(min = 5, max = 1000))]
    message: Option<String>,

    #[validate(custom(function = "validate_feedback_type"))]
    kind: Option<String>,

    #[validate(length(min = 1, max = 20))]
    page: Option<String>,

    #[validate(length(min = 1, max = 30))]
    heading: Option<String>,
}

fn validate_feedback_type(value: &str) -> Result<(), validator::ValidationError> {
    match value.parse::<FeedbackType>() {
        Ok(_) => Ok(()),
        Err(_) => {
            let mut err = validator::ValidationError::new("one_of");
            err.add_param(Cow::from("allowed"), &FeedbackType::names());
            Err(err)
        }
    }
}

/// Validates an untyped request body.
///
/// # Errors
///
/// Returns [`ValidationError`] listing every violated constraint when the body
/// is not an object or any field is missing, mistyped, or out of bounds.
///
/// # Examples
///
/// ```
/// use docs_feedback::domain::validation::validate;
/// use serde_json::json;
///
/// let ok = validate(&json!({ "message": "Great docs!", "page": "home", "type": "appreciation" }));
/// assert!(ok.is_ok());
///
/// let err = validate(&json!({ "message": "Hey", "page": "home", "type": "spam" })).unwrap_err();
/// assert_eq!(err.fields(), vec!["message", "type"]);
/// ```
pub fn validate(raw: &Value) -> Result<FeedbackSubmission, ValidationError> {
    let Some(body) = raw.as_object() else {
        return Err(ValidationError {
            violations: vec![
                Violation::new("body", "type", raw.clone()).with_constraint("expected", json!("object")),
            ],
        });
    };

    let mut violations = Vec::new();

    let fields = FeedbackFields {
        message: string_field(body, "message", true, &mut violations),
        kind: string_field(body, "type", true, &mut violations),
        page: string_field(body, "page", true, &mut violations),
        heading: string_field(body, "heading", false, &mut violations),
    };

    if let Err(errors) = fields.validate() {
        collect_bound_violations(body, &errors, &mut violations);
    }

    if !violations.is_empty() {
        violations.sort_by_key(|v| field_rank(&v.field));
        return Err(ValidationError { violations });
    }

    let (Some(message), Some(kind), Some(page)) = (fields.message, fields.kind, fields.page) else {
        // Unreachable: a missing required field always records a violation above.
        return Err(ValidationError { violations });
    };

    let kind = kind.parse::<FeedbackType>().map_err(|_| ValidationError {
        violations: vec![Violation::new("type", "one_of", json!(kind))],
    })?;

    Ok(FeedbackSubmission {
        message,
        kind,
        page,
        heading: fields.heading,
    })
}

/// Extracts a string field, recording `required` or `type` violations.
fn string_field(
    body: &Map<String, Value>,
    name: &str,
    required: bool,
    violations: &mut Vec<Violation>,
) -> Option<String> {
    match body.get(name) {
        None => {
            if required {
                violations.push(Violation::new(name, "required", Value::Null));
            }
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            violations.push(
                Violation::new(name, "type", other.clone()).with_constraint("expected", json!("string")),
            );
            None
        }
    }
}

fn collect_bound_violations(
    body: &Map<String, Value>,
    errors: &validator::ValidationErrors,
    violations: &mut Vec<Violation>,
) {
    let field_errors = errors.field_errors();

    for (key, name) in FIELDS {
        let Some(errs) = field_errors.get(key) else {
            continue;
        };

        for err in errs.iter() {
            let mut violation = Violation::new(
                name,
                &err.code,
                body.get(name).cloned().unwrap_or(Value::Null),
            );
            for (param, value) in &err.params {
                if param != "value" {
                    violation = violation.with_constraint(param, value.clone());
                }
            }
            violations.push(violation);
        }
    }
}

fn field_rank(field: &str) -> usize {
    FIELDS
        .iter()
        .position(|(_, name)| *name == field)
        .unwrap_or(FIELDS.len())
}
