// tests/generate_tests.rs

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use mock_quiz_server::{config::Config, routes, state::AppState, store::WELCOME_QUIZ};
use serde_json::{Value, json};

/// Requests seen by the fake completion endpoint, with their Authorization header.
type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

#[derive(Clone)]
struct Upstream {
    seen: Seen,
    status: StatusCode,
    reply: Value,
}

async fn fake_completions(
    State(upstream): State<Upstream>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    upstream.seen.lock().unwrap().push((auth, body));

    (upstream.status, Json(upstream.reply))
}

/// Spawns an OpenAI-compatible stub and returns its `/v1` base URL.
async fn spawn_upstream(status: StatusCode, reply: Value) -> (String, Seen) {
    let seen: Seen = Arc::default();
    let app = Router::new()
        .route("/v1/chat/completions", post(fake_completions))
        .with_state(Upstream {
            seen: seen.clone(),
            status,
            reply,
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://127.0.0.1:{}/v1", port), seen)
}

async fn spawn_app(base_url: String, model: &str) -> String {
    let config = Config {
        openai_api_key: Some("sk-test".to_string()),
        openai_base_url: Some(base_url),
        openai_model: model.to_string(),
        openai_insecure_skip_verify: false,
        rust_log: "error".to_string(),
        log_dir: "logs".to_string(),
        port: 0,
        notify_timeout: std::time::Duration::from_secs(15),
    };

    let app = routes::create_router(AppState::from_config(config));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

fn completion(content: &str) -> Value {
    json!({
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content } }
        ]
    })
}

#[tokio::test]
async fn generate_returns_stripped_html() {
    let (base_url, seen) = spawn_upstream(
        StatusCode::OK,
        completion("```html\n<h2>Task</h2><table><tr><td>3</td></tr></table>\n```"),
    )
    .await;
    let address = spawn_app(base_url, "gpt-5-nano").await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/generate", address))
        .json(&json!({ "ignored": true }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    let html = body["html"].as_str().unwrap();
    assert_eq!(html, "\n<h2>Task</h2><table><tr><td>3</td></tr></table>\n");
    assert!(!html.contains("```"));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (auth, request) = &seen[0];
    assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
    assert_eq!(request["model"], "gpt-5-nano");
    assert_eq!(request["messages"][0]["role"], "system");
    assert_eq!(request["messages"][1]["role"], "user");
    assert!(
        request["messages"][1]["content"]
            .as_str()
            .unwrap()
            .starts_with("Generate a task involving: ")
    );
    assert!(request["max_completion_tokens"].as_u64().unwrap() > 0);
    assert!(request.get("reasoning_effort").is_none());
}

#[tokio::test]
async fn generated_quiz_is_not_published() {
    let (base_url, _seen) = spawn_upstream(StatusCode::OK, completion("<p>new</p>")).await;
    let address = spawn_app(base_url, "gpt-5-nano").await;
    let client = reqwest::Client::new();

    client
        .post(format!("{}/api/generate", address))
        .send()
        .await
        .unwrap();

    let quiz = reqwest::get(format!("{}/quiz", address))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(quiz.starts_with(WELCOME_QUIZ));
}

#[tokio::test]
async fn reasoning_models_get_low_effort_hint() {
    let (base_url, seen) = spawn_upstream(StatusCode::OK, completion("<p>x</p>")).await;
    let address = spawn_app(base_url, "gpt-5.1-mini").await;

    reqwest::Client::new()
        .post(format!("{}/api/generate", address))
        .send()
        .await
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].1["reasoning_effort"], "low");
}

#[tokio::test]
async fn upstream_error_is_surfaced_as_500() {
    let (base_url, seen) = spawn_upstream(
        StatusCode::SERVICE_UNAVAILABLE,
        json!({ "error": { "message": "model overloaded" } }),
    )
    .await;
    let address = spawn_app(base_url, "gpt-5-nano").await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/generate", address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("503"));
    assert!(error.contains("model overloaded"));
    // no retries
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn empty_completion_is_an_error() {
    let (base_url, _seen) = spawn_upstream(StatusCode::OK, json!({ "choices": [] })).await;
    let address = spawn_app(base_url, "gpt-5-nano").await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/generate", address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_upstream_is_surfaced_as_500() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let address = spawn_app(format!("http://127.0.0.1:{}/v1", port), "gpt-5-nano").await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/generate", address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn dashboard_shows_configured_model() {
    let (base_url, _seen) = spawn_upstream(StatusCode::OK, completion("<p>x</p>")).await;
    let address = spawn_app(base_url, "gpt-5-nano").await;

    let body = reqwest::get(format!("{}/", address))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("model gpt-5-nano"));
    assert!(!body.contains("not configured"));
}
