//! Functional tests for the HTTP API

use art_gen_gateway::{api::routes::create_router, config::Settings, AppState};
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_app(server: &MockServer) -> Router {
    let mut settings = Settings::default();
    settings.provider.endpoint = format!("{}/chat/completions", server.uri());
    settings.provider.api_key = "test-key".to_string();

    let state = AppState::from_settings(settings).unwrap();
    create_router(Arc::new(state))
}

fn post_generate(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/generate")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_generate_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"url": "https://y.com/b.jpg"}})))
        .expect(1)
        .mount(&server)
        .await;

    let app = create_test_app(&server);
    let response = app
        .oneshot(post_generate(json!({
            "prompt": "a misty forest",
            "style": "fantasy",
            "aspectRatio": "16:9",
            "quality": "high"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["imageUrl"], "https://y.com/b.jpg");
    assert!(body.get("error").is_none());
    assert!(body["generationTime"].is_u64());
}

#[tokio::test]
async fn test_empty_prompt_rejected_without_provider_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = create_test_app(&server);
    for body in [json!({"prompt": ""}), json!({"prompt": "   "}), json!({"style": "sketch"})] {
        let response = app.clone().oneshot(post_generate(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body, json!({"success": false, "error": "Prompt is required"}));
    }
}

#[tokio::test]
async fn test_long_prompt_rejected_without_provider_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = create_test_app(&server);
    let response = app
        .oneshot(post_generate(json!({"prompt": "x".repeat(501)})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Prompt is too long (max 500 characters)");
}

#[tokio::test]
async fn test_unknown_style_is_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"output": ["https://z.com/c.webp"]})))
        .expect(1)
        .mount(&server)
        .await;

    let app = create_test_app(&server);
    let response = app
        .oneshot(post_generate(json!({"prompt": "a tower", "style": "cubism"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["imageUrl"], "https://z.com/c.webp");
}

#[tokio::test]
async fn test_invalid_enum_value_is_bad_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = create_test_app(&server);
    let response = app
        .oneshot(post_generate(json!({"prompt": "a tower", "quality": "max"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let server = MockServer::start().await;
    let app = create_test_app(&server);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/generate")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_provider_failure_is_internal_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let app = create_test_app(&server);
    let response = app
        .oneshot(post_generate(json!({"prompt": "a tower"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "API request failed: 503 Service Unavailable");
    assert!(body.get("imageUrl").is_none());
    assert!(body["generationTime"].is_u64());
}

#[tokio::test]
async fn test_generate_info() {
    let server = MockServer::start().await;
    let app = create_test_app(&server);

    let response = app
        .oneshot(Request::builder().uri("/api/generate").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["endpoint"], "/api/generate");
    assert_eq!(body["method"], "POST");
    assert_eq!(body["requiredFields"], json!(["prompt"]));
    assert_eq!(body["optionalFields"], json!(["style", "aspectRatio", "quality"]));
    assert_eq!(body["maxPromptLength"], 500);
}

#[tokio::test]
async fn test_list_styles() {
    let server = MockServer::start().await;
    let app = create_test_app(&server);

    let response = app
        .oneshot(Request::builder().uri("/api/styles").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        ["abstract", "photorealistic", "fantasy", "digital", "painting", "sketch"]
    );
}

#[tokio::test]
async fn test_health() {
    let server = MockServer::start().await;
    let app = create_test_app(&server);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK");
}
