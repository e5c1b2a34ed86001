//! Gemini client tests against a wiremock server.

use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use skycast::error::SkycastError;
use skycast::generation::{GeminiClient, TextGenerator};

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new("test-key".to_string(), Some(server.uri()))
}

fn candidate_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"parts": [{"text": text}]}
        }]
    })
}

#[tokio::test]
async fn generate_returns_the_first_candidate_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "contents": [{"role": "user", "parts": [{"text": "say hi"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("  Hi there!\n")))
        .mount(&server)
        .await;

    let text = client_for(&server).generate("say hi").await.unwrap();
    assert_eq!(text, "Hi there!");
}

#[tokio::test]
async fn multiple_text_parts_are_concatenated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": "Hello, "}, {"text": "world"}]}
            }]
        })))
        .mount(&server)
        .await;

    let text = client_for(&server).generate("p").await.unwrap();
    assert_eq!(text, "Hello, world");
}

#[tokio::test]
async fn custom_model_is_used_in_the_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("ok")))
        .mount(&server)
        .await;

    let client = client_for(&server).with_model("gemini-1.5-pro");
    assert_eq!(client.generate("p").await.unwrap(), "ok");
}

#[tokio::test]
async fn error_status_surfaces_the_nested_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {"message": "invalid request"}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("p").await.unwrap_err();
    assert!(err.to_string().contains("invalid request"));
}

#[tokio::test]
async fn missing_candidates_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("p").await.unwrap_err();
    assert!(matches!(err, SkycastError::Api { .. }));
    assert!(err.to_string().contains("No candidates"));
}

#[tokio::test]
async fn empty_candidate_text_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("   ")))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("p").await.unwrap_err();
    assert!(err.to_string().contains("Empty text"));
}
