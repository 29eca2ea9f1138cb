mod common;

use common::chat_config;
use common::mock_backend::{MockBackend, MockResponse};
use folio::chat::{
    build_client, ChatError, ChatService, EMPTY_REPLY, FALLBACK_REPLY,
};
use folio::config::SecureString;

fn service_for(mock: &MockBackend) -> ChatService {
    ChatService::new(
        chat_config(&mock.base_url()),
        SecureString::new("test-key".to_string()),
    )
    .unwrap()
}

#[tokio::test]
async fn request_shape_matches_chat_completions() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::completion("He builds vision systems."))
        .await;

    let service = service_for(&mock);
    let reply = service
        .send_message("What does he build?", "visitor is on the projects page")
        .await;
    assert_eq!(reply, "He builds vision systems.");

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/v1/chat/completions");
    assert_eq!(request.header("authorization"), Some("Bearer test-key"));
    assert!(request
        .header("content-type")
        .unwrap()
        .starts_with("application/json"));

    let body = request.json();
    assert_eq!(body["model"], "test-model");
    assert_eq!(body["max_tokens"], 500);
    assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);

    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    let system = messages[0]["content"].as_str().unwrap();
    assert!(system.contains("Harish"));
    assert!(system.contains("Additional context: visitor is on the projects page"));
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[1]["content"], "What does he build?");
}

#[tokio::test]
async fn server_error_yields_fallback() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(500, "boom")).await;
    mock.enqueue_response(MockResponse::error(500, "boom")).await;

    let service = service_for(&mock);
    match service.try_send("hi", "").await {
        Err(ChatError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("boom"));
        }
        other => panic!("expected API error, got {:?}", other),
    }
    assert_eq!(service.send_message("hi", "").await, FALLBACK_REPLY);
}

#[tokio::test]
async fn malformed_body_yields_fallback() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::text("<html>not json</html>"))
        .await;
    mock.enqueue_response(MockResponse::text("<html>not json</html>"))
        .await;

    let service = service_for(&mock);
    assert!(matches!(
        service.try_send("hi", "").await,
        Err(ChatError::Parse(_))
    ));
    assert_eq!(service.send_message("hi", "").await, FALLBACK_REPLY);
}

#[tokio::test]
async fn empty_choices_yield_empty_reply() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"choices": []}"#))
        .await;
    mock.enqueue_response(MockResponse::json(
        r#"{"choices": [{"message": {"role": "assistant"}}]}"#,
    ))
    .await;

    let service = service_for(&mock);
    assert_eq!(service.send_message("hi", "").await, EMPTY_REPLY);
    assert!(matches!(
        service.try_send("hi", "").await,
        Err(ChatError::EmptyResponse)
    ));
}

#[tokio::test]
async fn unreachable_endpoint_yields_fallback() {
    // Bind then drop to get a port nothing listens on
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let service = ChatService::new(
        chat_config(&format!("http://{}", addr)),
        SecureString::new("test-key".to_string()),
    )
    .unwrap();

    assert!(matches!(
        service.try_send("hi", "").await,
        Err(ChatError::Transport(_))
    ));
    assert_eq!(service.send_message("hi", "").await, FALLBACK_REPLY);
}

#[tokio::test]
async fn build_client_uses_configured_key() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::completion("online")).await;

    let client = build_client(&chat_config(&mock.base_url()), false);
    assert_eq!(client.send_message("ping", "").await, "online");
    assert_eq!(mock.captured_requests().await.len(), 1);
}

#[tokio::test]
async fn offline_flag_never_touches_network() {
    let mock = MockBackend::start().await;

    let client = build_client(&chat_config(&mock.base_url()), true);
    assert_eq!(client.send_message("ping", "").await, FALLBACK_REPLY);
    assert!(mock.captured_requests().await.is_empty());
}
