//! Gemini client tests against a mock HTTP server.

use serde_json::json;
use snap_ai_client::{AiError, GeminiClient, GeminiConfig, MetadataLookup, API_KEY_HEADER};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/v1beta/models/gemini-3-flash-preview:generateContent";

fn client_for(server: &MockServer) -> GeminiClient {
    let mut config = GeminiConfig::with_api_key("test-key");
    config.base_url = format!("{}/v1beta", server.uri());
    GeminiClient::new(config).unwrap()
}

fn candidate_with_text(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn test_lookup_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header(API_KEY_HEADER, "test-key"))
        .and(body_partial_json(json!({
            "tools": [{ "googleSearch": {} }],
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_with_text(
            r#"{"title":"Never Gonna Give You Up","author":"Rick Astley","platform":"YouTube","summary":"The official music video for the 1987 pop hit"}"#,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let meta = client
        .lookup("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await
        .unwrap();

    assert_eq!(meta.title, "Never Gonna Give You Up");
    assert_eq!(meta.author, "Rick Astley");
    assert_eq!(meta.platform, "YouTube");
}

#[tokio::test]
async fn test_lookup_non_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .lookup("https://instagram.com/reel/abc")
        .await
        .unwrap_err();

    match err {
        AiError::RequestFailed(msg) => {
            assert!(msg.contains("503"));
            assert!(msg.contains("overloaded"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_lookup_missing_field_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_with_text(
            r#"{"title":"T","author":"A","platform":"Instagram"}"#,
        )))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .lookup("https://instagram.com/reel/abc")
        .await
        .unwrap_err();
    assert!(err.is_schema_violation());
}

#[tokio::test]
async fn test_lookup_no_candidates() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .lookup("https://instagram.com/reel/abc")
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::EmptyResponse));
}

#[tokio::test]
async fn test_lookup_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .lookup("https://instagram.com/reel/abc")
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_lookup_keeps_key_out_of_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let _ = client_for(&server)
        .lookup("https://youtu.be/dQw4w9WgXcQ")
        .await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query().is_none());
    assert!(!requests[0].url.as_str().contains("test-key"));
}

#[tokio::test]
async fn test_connection_refused_error_hides_key() {
    let mut config = GeminiConfig::with_api_key("sk-SECRET-123");
    config.base_url = "http://127.0.0.1:1/v1beta".to_string();
    let client = GeminiClient::new(config).unwrap();

    let err = client
        .lookup("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await
        .unwrap_err();

    assert!(matches!(err, AiError::Network(_)));
    assert!(!err.to_string().contains("sk-SECRET-123"));
    assert!(!format!("{err:?}").contains("sk-SECRET-123"));
}
