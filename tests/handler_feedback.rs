mod common;

use axum::http::StatusCode;
use common::{FailingNotifier, RecordingNotifier};
use docs_feedback::infrastructure::quota::GovernorQuota;
use serde_json::{Value, json};
use std::num::NonZeroU32;
use std::sync::Arc;

#[tokio::test]
async fn test_submit_bug_report() {
    let notifier = Arc::new(RecordingNotifier::default());
    let server = common::test_server(common::create_unlimited_state(notifier.clone()));

    let response = server
        .post("/feedback")
        .json(&json!({
            "message": "Found a typo on the install page",
            "page": "install",
            "type": "bug"
        }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);

    let embed = &sent[0].embeds[0];
    assert_eq!(embed.title, "🐛 I want to report a website bug");
    assert!(embed.description.contains("**Page:** `install`"));
    assert!(!embed.description.contains("**Heading:**"));
    assert_eq!(embed.color, 3447003);
    assert_eq!(sent[0].username, "Feedback");
}

#[tokio::test]
async fn test_submit_with_heading() {
    let notifier = Arc::new(RecordingNotifier::default());
    let server = common::test_server(common::create_unlimited_state(notifier.clone()));

    let response = server
        .post("/feedback")
        .json(&json!({
            "message": "Love the dark theme!",
            "page": "home",
            "type": "appreciation",
            "heading": "Theming"
        }))
        .await;

    response.assert_status_ok();

    let sent = notifier.sent();
    let description = &sent[0].embeds[0].description;
    assert!(description.contains("**Page:** `home`"));
    assert!(description.contains("**Heading:** `Theming`"));
}

#[tokio::test]
async fn test_submit_validation_error() {
    let notifier = Arc::new(RecordingNotifier::default());
    let server = common::test_server(common::create_unlimited_state(notifier.clone()));

    let response = server
        .post("/feedback")
        .json(&json!({
            "message": "abcd",
            "page": "p".repeat(21),
            "type": "spam"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");

    let violations = json["error"]["details"]["violations"].as_array().unwrap();
    let fields: Vec<&str> = violations
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["message", "type", "page"]);
    assert_eq!(violations[0]["actual"], "abcd");
    assert_eq!(violations[1]["rule"], "one_of");

    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn test_submit_missing_fields() {
    let notifier = Arc::new(RecordingNotifier::default());
    let server = common::test_server(common::create_unlimited_state(notifier.clone()));

    let response = server
        .post("/feedback")
        .json(&json!({ "message": "Just a message" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    let violations = json["error"]["details"]["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 2);
    assert!(violations.iter().all(|v| v["rule"] == "required"));
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn test_submit_not_json() {
    let notifier = Arc::new(RecordingNotifier::default());
    let server = common::test_server(common::create_unlimited_state(notifier.clone()));

    let response = server.post("/feedback").text("message=hello").await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "invalid_json");
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn test_submit_dispatch_failure() {
    let server = common::test_server(common::create_unlimited_state(Arc::new(FailingNotifier)));

    let response = server
        .post("/feedback")
        .json(&json!({
            "message": "Search is broken on mobile",
            "page": "search",
            "type": "bug"
        }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<Value>();
    assert_ne!(json.get("status"), Some(&json!("ok")));
    assert_eq!(json["error"]["code"], "internal_error");
    // Upstream detail is not exposed to the caller.
    assert!(!response.text().contains("connection refused"));
}

#[tokio::test]
async fn test_submit_rate_limited() {
    let notifier = Arc::new(RecordingNotifier::default());
    let quota = Arc::new(GovernorQuota::new(
        NonZeroU32::new(1).unwrap(),
        NonZeroU32::new(1).unwrap(),
    ));
    let server = common::test_server(common::create_test_state(notifier.clone(), quota));

    let body = json!({
        "message": "Please add a changelog page",
        "page": "home",
        "type": "suggestion"
    });

    server.post("/feedback").json(&body).await.assert_status_ok();

    let response = server.post("/feedback").json(&body).await;
    response.assert_status(StatusCode::TOO_MANY_REQUESTS);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "rate_limited");
    assert_eq!(json["error"]["details"]["key"], "feedback");

    assert_eq!(notifier.sent().len(), 1);
}

#[tokio::test]
async fn test_invalid_submission_does_not_consume_quota() {
    let notifier = Arc::new(RecordingNotifier::default());
    let quota = Arc::new(GovernorQuota::new(
        NonZeroU32::new(1).unwrap(),
        NonZeroU32::new(1).unwrap(),
    ));
    let server = common::test_server(common::create_test_state(notifier.clone(), quota));

    server
        .post("/feedback")
        .json(&json!({ "message": "hi", "page": "home", "type": "bug" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .post("/feedback")
        .json(&json!({ "message": "Hello there", "page": "home", "type": "bug" }))
        .await
        .assert_status_ok();

    assert_eq!(notifier.sent().len(), 1);
}
