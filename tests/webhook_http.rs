mod common;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::post,
};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use docs_feedback::domain::entities::{WebhookPayload, WebhookProfile};
use docs_feedback::domain::ports::{DispatchError, WebhookNotifier};
use docs_feedback::infrastructure::webhook::HttpWebhookNotifier;
use url::Url;

/// Local stand-in for the chat webhook.
#[derive(Clone)]
struct HookState {
    received: Arc<Mutex<Vec<Value>>>,
    status: StatusCode,
    body: Option<String>,
    delay: Duration,
}

async fn receive(State(hook): State<HookState>, Json(body): Json<Value>) -> (StatusCode, String) {
    tokio::time::sleep(hook.delay).await;
    hook.received.lock().unwrap().push(body);
    let body = hook
        .body
        .unwrap_or_else(|| format!("status {}", hook.status.as_u16()));
    (hook.status, body)
}

async fn spawn_webhook(status: StatusCode, delay: Duration) -> (Url, Arc<Mutex<Vec<Value>>>) {
    spawn_webhook_with_body(status, None, delay).await
}

async fn spawn_webhook_with_body(
    status: StatusCode,
    body: Option<String>,
    delay: Duration,
) -> (Url, Arc<Mutex<Vec<Value>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = HookState {
        received: received.clone(),
        status,
        body,
        delay,
    };

    let app = Router::new()
        .route("/api/webhooks/{id}/{token}", post(receive))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let url = Url::parse(&format!("http://{addr}/api/webhooks/1234/secret-token")).unwrap();
    (url, received)
}

async fn unused_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

fn payload() -> WebhookPayload {
    WebhookPayload::single_embed(
        &WebhookProfile::default(),
        "🐛 I want to report a website bug",
        "Found a typo on the install page\n\n**Page:** `install`",
    )
}

#[tokio::test]
async fn test_dispatch_posts_payload() {
    let (url, received) = spawn_webhook(StatusCode::NO_CONTENT, Duration::ZERO).await;
    let notifier = HttpWebhookNotifier::new(url, None).unwrap();

    notifier.dispatch(&payload()).await.unwrap();

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0],
        json!({
            "username": "Feedback",
            "avatar_url": "https://i.kym-cdn.com/entries/icons/facebook/000/043/403/cover3.jpg",
            "embeds": [{
                "color": 3447003,
                "title": "🐛 I want to report a website bug",
                "description": "Found a typo on the install page\n\n**Page:** `install`"
            }]
        })
    );
}

#[tokio::test]
async fn test_dispatch_rejected_status() {
    let (url, received) = spawn_webhook(StatusCode::BAD_REQUEST, Duration::ZERO).await;
    let notifier = HttpWebhookNotifier::new(url, None).unwrap();

    let err = notifier.dispatch(&payload()).await.unwrap_err();

    assert_eq!(
        err,
        DispatchError::Rejected {
            status: 400,
            body: "status 400".to_string(),
        }
    );
    // Exactly one attempt, no retry.
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_dispatch_rejected_body_is_capped() {
    let long_body = "x".repeat(4096);
    let (url, _received) =
        spawn_webhook_with_body(StatusCode::BAD_REQUEST, Some(long_body), Duration::ZERO).await;
    let notifier = HttpWebhookNotifier::new(url, None).unwrap();

    let err = notifier.dispatch(&payload()).await.unwrap_err();

    match err {
        DispatchError::Rejected { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, format!("{}...", "x".repeat(512)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_dispatch_rejected_short_body_kept_whole() {
    let (url, _received) = spawn_webhook_with_body(
        StatusCode::UNAUTHORIZED,
        Some("x".repeat(512)),
        Duration::ZERO,
    )
    .await;
    let notifier = HttpWebhookNotifier::new(url, None).unwrap();

    let err = notifier.dispatch(&payload()).await.unwrap_err();

    assert_eq!(
        err,
        DispatchError::Rejected {
            status: 401,
            body: "x".repeat(512),
        }
    );
}

#[tokio::test]
async fn test_dispatch_unreachable() {
    let addr = unused_addr().await;
    let url = Url::parse(&format!("http://{addr}/api/webhooks/1234/secret-token")).unwrap();
    let notifier = HttpWebhookNotifier::new(url, None).unwrap();

    let err = notifier.dispatch(&payload()).await.unwrap_err();

    match err {
        DispatchError::Transport(detail) => assert!(!detail.contains("secret-token")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_dispatch_timeout() {
    let (url, _received) = spawn_webhook(StatusCode::OK, Duration::from_secs(2)).await;
    let notifier = HttpWebhookNotifier::new(url, Some(Duration::from_millis(100))).unwrap();

    let err = notifier.dispatch(&payload()).await.unwrap_err();

    assert!(matches!(err, DispatchError::Transport(_)));
}

#[tokio::test]
async fn test_describe_hides_token() {
    let url = Url::parse("https://discord.com/api/webhooks/1234/secret-token").unwrap();
    let notifier = HttpWebhookNotifier::new(url, None).unwrap();

    assert_eq!(notifier.describe(), "https://discord.com/***");
}

#[tokio::test]
async fn test_submit_end_to_end_through_http_webhook() {
    let (url, received) = spawn_webhook(StatusCode::OK, Duration::ZERO).await;
    let notifier = Arc::new(HttpWebhookNotifier::new(url, None).unwrap());
    let server = common::test_server(common::create_unlimited_state(notifier));

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
    response.assert_json(&json!({ "status": "ok" }));

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["embeds"][0]["title"], "👍 I appreciate the work");
    assert_eq!(
        received[0]["embeds"][0]["description"],
        "Love the dark theme!\n\n**Page:** `home`\n**Heading:** `Theming`"
    );
}

#[tokio::test]
async fn test_submit_end_to_end_webhook_down() {
    let addr = unused_addr().await;
    let url = Url::parse(&format!("http://{addr}/api/webhooks/1234/secret-token")).unwrap();
    let notifier = Arc::new(HttpWebhookNotifier::new(url, None).unwrap());
    let server = common::test_server(common::create_unlimited_state(notifier));

    let response = server
        .post("/feedback")
        .json(&json!({
            "message": "Found a typo on the install page",
            "page": "install",
            "type": "bug"
        }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_ne!(response.json::<Value>().get("status"), Some(&json!("ok")));
}
