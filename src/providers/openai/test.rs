use serde_json::json;
use std::time::Duration;
use wiremock::matchers;
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::provider::OpenAIProvider;
use crate::config::models::GatewayConfig;
use crate::models::chat::{ChatCompletionMessage, ChatCompletionRequest};
use crate::providers::provider::{CompletionProvider, ProviderError};

fn create_test_provider(api_base: &str, timeout: Duration) -> OpenAIProvider {
    let config = GatewayConfig {
        openai_api_key: Some("test_key".to_string()),
        openai_api_base: format!("{api_base}/v1"),
        request_timeout: timeout,
        ..GatewayConfig::default()
    };
    OpenAIProvider::from_config(&config)
        .expect("client should build")
        .expect("key is set")
}

fn create_request(text: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: "gpt-4o-mini".to_string(),
        messages: vec![
            ChatCompletionMessage::system("You are a concise public-health assistant."),
            ChatCompletionMessage::user(text),
        ],
        temperature: Some(0.2),
        max_tokens: Some(300),
    }
}

fn completion_body(answer: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": answer},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 20, "completion_tokens": 5, "total_tokens": 25}
    })
}

#[test]
fn test_unconfigured_key_builds_no_provider() {
    let provider = OpenAIProvider::from_config(&GatewayConfig::default()).unwrap();
    assert!(provider.is_none());
}

#[tokio::test]
async fn test_chat_completions_sends_expected_request() {
    let mock_server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/v1/chat/completions"))
        .and(matchers::header("Authorization", "Bearer test_key"))
        .and(matchers::body_json(json!({
            "model": "gpt-4o-mini",
            "messages": [
                {"role": "system", "content": "You are a concise public-health assistant."},
                {"role": "user", "content": "fever and cough"}
            ],
            "temperature": 0.2,
            "max_tokens": 300
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("See a doctor.")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = create_test_provider(&mock_server.uri(), Duration::from_secs(5));
    let completion = provider
        .chat_completions(create_request("fever and cough"))
        .await
        .unwrap();

    assert_eq!(completion.first_answer().as_deref(), Some("See a doctor."));
    assert_eq!(completion.usage.unwrap().total_tokens, 25);
}

#[tokio::test]
async fn test_chat_completions_maps_error_status() {
    let mock_server = MockServer::start().await;
    Mock::given(matchers::any())
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"error": {"message": "Incorrect API key provided"}})),
        )
        .mount(&mock_server)
        .await;

    let provider = create_test_provider(&mock_server.uri(), Duration::from_secs(5));
    let result = provider.chat_completions(create_request("hi")).await;

    match result {
        Err(ProviderError::Http { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("Incorrect API key"));
        }
        other => panic!("expected Http error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_chat_completions_rejects_malformed_body() {
    let mock_server = MockServer::start().await;
    Mock::given(matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let provider = create_test_provider(&mock_server.uri(), Duration::from_secs(5));
    let result = provider.chat_completions(create_request("hi")).await;
    assert!(matches!(result, Err(ProviderError::MalformedResponse(_))));
}

#[tokio::test]
async fn test_chat_completions_times_out() {
    let mock_server = MockServer::start().await;
    Mock::given(matchers::any())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("late"))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&mock_server)
        .await;

    let provider = create_test_provider(&mock_server.uri(), Duration::from_millis(100));
    let result = provider.chat_completions(create_request("hi")).await;
    assert!(matches!(result, Err(ProviderError::Timeout(_))));
}

#[tokio::test]
async fn test_chat_completions_reports_unreachable_host() {
    // Nothing listens on port 9 locally.
    let provider = create_test_provider("http://127.0.0.1:9", Duration::from_secs(5));
    let result = provider.chat_completions(create_request("hi")).await;
    assert!(matches!(result, Err(ProviderError::Transport(_))));
}
