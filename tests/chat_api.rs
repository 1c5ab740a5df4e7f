//! End-to-end request/response behavior against a mock server.

use serde_json::json;
use xioca::{blocking, ChatRequest, Client, Error, ImageRequest, Message, MessageRole};

fn success_body() -> String {
    json!({
        "id": "resp-123",
        "object": "chat.completion",
        "created": 1700000000u64,
        "model": "gpt-4o",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": "hi there"},
                "finish_reason": "stop"
            }
        ],
        "usage": {"prompt_tokens": 5, "completion_tokens": 2, "total_tokens": 7}
    })
    .to_string()
}

#[tokio::test]
async fn chat_create_returns_a_validated_response() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/ai")
        .match_header("authorization", "Bearer sk-test")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success_body())
        .create_async()
        .await;

    let client = Client::builder()
        .api_key("sk-test")
        .base_url(server.url())
        .build()
        .unwrap();

    let response = client
        .chat()
        .create(ChatRequest::new("gpt-4o", vec![Message::user("hello")]))
        .await
        .unwrap();

    assert_eq!(response.id, "resp-123");
    assert_eq!(response.model, "gpt-4o");
    assert_eq!(response.choices[0].message.role, MessageRole::Assistant);
    assert_eq!(response.first_content(), Some("hi there"));
    assert_eq!(response.usage.unwrap().total_tokens, 7);
    mock.assert_async().await;
}

#[tokio::test]
async fn image_generate_sends_exactly_the_documented_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/ai")
        .match_body(mockito::Matcher::Json(json!({
            "model": "m1",
            "messages": [{"role": "user", "content": "draw a cat"}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success_body())
        .create_async()
        .await;

    let client = Client::builder()
        .api_key("sk-test")
        .base_url(server.url())
        .build()
        .unwrap();

    client
        .images()
        .generate(ImageRequest::new("m1", "draw a cat"))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn extra_options_pass_through_to_the_wire() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/ai")
        .match_body(mockito::Matcher::Json(json!({
            "model": "gpt-4o",
            "messages": [{"role": "system", "content": "be brief"}],
            "temperature": 0.2,
            "max_tokens": 64
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success_body())
        .create_async()
        .await;

    let client = Client::builder()
        .api_key("sk-test")
        .base_url(server.url())
        .build()
        .unwrap();

    client
        .chat()
        .create(
            ChatRequest::new("gpt-4o", vec![Message::system("be brief")])
                .temperature(0.2)
                .max_tokens(64),
        )
        .await
        .unwrap();
    mock.assert_async().await;
}

// A 2xx body that fails the schema is a validation error, not a success.
#[tokio::test]
async fn malformed_success_body_fails_validation_with_field_path() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/ai")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"id": "resp-123", "object": "chat.completion"}).to_string())
        .create_async()
        .await;

    let client = Client::builder()
        .api_key("sk-test")
        .base_url(server.url())
        .build()
        .unwrap();

    let err = client
        .chat()
        .create(ChatRequest::new("gpt-4o", vec![Message::user("hello")]))
        .await
        .unwrap_err();
    match err {
        Error::Validation { ref context, .. } => {
            assert_eq!(context.field_path.as_deref(), Some("choices"));
        }
        other => panic!("expected Error::Validation, got {other:?}"),
    }
}

#[test]
fn blocking_chat_round_trip() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/ai")
        .match_header("authorization", "Bearer sk-test")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success_body())
        .create();

    let client = blocking::Client::builder()
        .api_key("sk-test")
        .base_url(server.url())
        .build_blocking()
        .unwrap();

    let response = client
        .chat()
        .create(ChatRequest::new("gpt-4o", vec![Message::user("hello")]))
        .unwrap();
    assert_eq!(response.first_content(), Some("hi there"));
    mock.assert();
}

#[test]
fn blocking_image_generate_round_trip() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/ai")
        .match_body(mockito::Matcher::Json(json!({
            "model": "m1",
            "messages": [{"role": "user", "content": "draw a cat"}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success_body())
        .create();

    let client = blocking::Client::builder()
        .api_key("sk-test")
        .base_url(server.url())
        .build_blocking()
        .unwrap();

    client
        .images()
        .generate(ImageRequest::new("m1", "draw a cat"))
        .unwrap();
    mock.assert();
}
