// tests/http_routes.rs


use std::sync::Arc;

use axum::http::StatusCode;
use persona_gateway::llm::CompletionClient;
use serde_json::{Value, json};

use test_helpers::{FakeClient, config_dir, create_test_app, get, post_json};

const FARM_BOT: (&str, &str) = ("Agricultural Decision Optimizer.json", r#"{"name":"Farm Bot"}"#);

fn json(body: &str) -> Value {
    serde_json::from_str(body).expect("response body is JSON")
}

#[tokio::test]
async fn chat_with_empty_body_is_400() {
    let dir = config_dir(&[FARM_BOT]);
    let app = create_test_app(dir.path(), Some(FakeClient::replying("hi") as Arc<dyn CompletionClient>));

    let (status, body) = post_json(app, "/chat", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&body), json!({"error": "Missing botType or message"}));
}

#[tokio::test]
async fn chat_with_invalid_json_is_400() {
    let dir = config_dir(&[FARM_BOT]);
    let app = create_test_app(dir.path(), None);

    let (status, body) = post_json(app, "/chat", "{not:json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json(&body)["error"].as_str().unwrap().contains("Missing"));
}

#[tokio::test]
async fn chat_with_non_string_fields_is_400() {
    let dir = config_dir(&[FARM_BOT]);
    let app = create_test_app(dir.path(), None);

    let (status, _) = post_json(app, "/chat", r#"{"botType": 5, "message": ["hi"]}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn chat_with_unknown_persona_is_404() {
    let dir = config_dir(&[FARM_BOT]);
    let fake = FakeClient::replying("never");
    let app = create_test_app(dir.path(), Some(fake.clone() as Arc<dyn CompletionClient>));

    let (status, body) = post_json(app, "/chat", r#"{"botType":"nope","message":"hi"}"#).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error = json(&body)["error"].as_str().unwrap().to_string();
    assert!(error.contains("nope"), "error should name the bot type: {error}");
    assert_eq!(fake.call_count(), 0);
}

#[tokio::test]
async fn chat_without_credential_is_500() {
    let dir = config_dir(&[FARM_BOT]);
    let app = create_test_app(dir.path(), None);

    let (status, body) = post_json(app, "/chat", r#"{"botType":"agriculture","message":"hi"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json(&body),
        json!({"error": "OPENAI_API_KEY environment variable is not set."})
    );
}

#[tokio::test]
async fn chat_returns_reply() {
    let dir = config_dir(&[FARM_BOT]);
    let fake = FakeClient::replying("Plant after the last frost.");
    let app = create_test_app(dir.path(), Some(fake.clone() as Arc<dyn CompletionClient>));

    let (status, body) = post_json(
        app,
        "/chat",
        r#"{"botType":"agriculture","message":"When should I plant corn?"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body), json!({"reply": "Plant after the last frost."}));

    let calls = fake.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0][0].role, "system");
    assert!(calls[0][0].content.contains("\"name\": \"Farm Bot\""));
    assert_eq!(calls[0][1].role, "user");
    assert_eq!(calls[0][1].content, "When should I plant corn?");
}

#[tokio::test]
async fn chat_provider_failure_is_500() {
    let dir = config_dir(&[FARM_BOT]);
    let app = create_test_app(
        dir.path(),
        Some(FakeClient::failing("upstream exploded") as Arc<dyn CompletionClient>),
    );

    let (status, body) = post_json(app, "/chat", r#"{"botType":"agriculture","message":"hi"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error = json(&body)["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("OpenAI request failed:"));
    assert!(error.contains("upstream exploded"));
}

#[tokio::test]
async fn chat_with_malformed_config_is_500() {
    let dir = config_dir(&[("broken.json", "{\"name\": ")]);
    let fake = FakeClient::replying("never");
    let app = create_test_app(dir.path(), Some(fake.clone() as Arc<dyn CompletionClient>));

    let (status, body) = post_json(app, "/chat", r#"{"botType":"broken","message":"hi"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json(&body),
        json!({"error": "Configuration for 'broken' could not be loaded."})
    );
    assert!(!body.contains(dir.path().to_str().unwrap()), "server path leaked: {body}");
    assert_eq!(fake.call_count(), 0);
}

#[tokio::test]
async fn chat_with_overlong_bot_type_is_404() {
    let dir = config_dir(&[FARM_BOT]);
    let fake = FakeClient::replying("never");
    let app = create_test_app(dir.path(), Some(fake.clone() as Arc<dyn CompletionClient>));
    let bot_type = "a".repeat(300);

    let request = json!({"botType": &bot_type, "message": "hi"}).to_string();
    let (status, body) = post_json(app, "/chat", &request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json(&body),
        json!({"error": format!("Configuration for '{bot_type}' not found.")})
    );
    assert_eq!(fake.call_count(), 0);
}

#[tokio::test]
async fn chat_with_empty_config_is_404() {
    let dir = config_dir(&[("empty.json", "{}")]);
    let fake = FakeClient::replying("never");
    let app = create_test_app(dir.path(), Some(fake.clone() as Arc<dyn CompletionClient>));

    let (status, body) = post_json(app, "/chat", r#"{"botType":"empty","message":"hi"}"#).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json(&body), json!({"error": "Configuration for 'empty' not found."}));
    assert_eq!(fake.call_count(), 0);
}

#[tokio::test]
async fn bot_page_shows_display_name() {
    let dir = config_dir(&[FARM_BOT]);
    let app = create_test_app(dir.path(), None);

    let (status, body) = get(app, "/bot/agriculture").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Farm Bot"));
}

#[tokio::test]
async fn bot_page_defaults_display_name() {
    let dir = config_dir(&[("anon.json", r#"{"primaryFunction": "help"}"#)]);
    let app = create_test_app(dir.path(), None);

    let (status, body) = get(app, "/bot/anon").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Chatbot</h1>"));
}

#[tokio::test]
async fn bot_page_unknown_persona_is_404() {
    let dir = config_dir(&[FARM_BOT]);
    let app = create_test_app(dir.path(), None);

    let (status, body) = get(app, "/bot/unknown_persona").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("unknown_persona"));
}

#[tokio::test]
async fn bot_page_overlong_bot_type_is_404() {
    let dir = config_dir(&[FARM_BOT]);
    let app = create_test_app(dir.path(), None);

    let (status, _) = get(app, &format!("/bot/{}", "a".repeat(300))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bot_page_empty_config_is_404() {
    let dir = config_dir(&[("empty.json", "{}"), ("nothing.json", "null")]);

    let (status, _) = get(create_test_app(dir.path(), None), "/bot/empty").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get(create_test_app(dir.path(), None), "/bot/nothing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bot_page_traversal_is_404() {
    let outer = config_dir(&[("secret.json", r#"{"name": "Secret"}"#)]);
    let configs = outer.path().join("configs");
    std::fs::create_dir(&configs).unwrap();
    let app = create_test_app(&configs, None);

    let (status, _) = get(app, "/bot/..%2Fsecret").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn index_lists_available_personas() {
    let dir = config_dir(&[
        FARM_BOT,
        ("School IT Helper.json", r#"{"name": "IT Helper"}"#),
        ("General Hospital Patient Navigator.json", "not json"),
    ]);
    let app = create_test_app(dir.path(), None);

    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<a href="/bot/agriculture">Farm Bot</a>"#));
    assert!(body.contains(r#"<a href="/bot/school">IT Helper</a>"#));
    assert!(!body.contains("/bot/hospital"));
    assert!(!body.contains("/bot/hotel"));
}

#[tokio::test]
async fn chat_rejects_get() {
    let dir = config_dir(&[]);
    let app = create_test_app(dir.path(), None);

    let (status, _) = get(app, "/chat").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
