//! Async session lifecycle: lazy creation, concurrent sharing, close/recreate.

use serde_json::json;
use xioca::{ChatRequest, Client, Message};

fn success_body() -> String {
    json!({
        "id": "resp-123",
        "object": "chat.completion",
        "created": 1700000000u64,
        "model": "gpt-4o",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": "ok"}}
        ]
    })
    .to_string()
}

fn chat_request() -> ChatRequest {
    ChatRequest::new("gpt-4o", vec![Message::user("hello")])
}

#[tokio::test]
async fn concurrent_first_calls_share_one_lazily_created_session() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/ai")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success_body())
        .expect(2)
        .create_async()
        .await;

    let client = Client::builder()
        .api_key("sk-test")
        .base_url(server.url())
        .build()
        .unwrap();

    // Neither call has run yet, so both race the session creation.
    let chat = client.chat();
    let (a, b) = tokio::join!(chat.create(chat_request()), chat.create(chat_request()));
    assert_eq!(a.unwrap().first_content(), Some("ok"));
    assert_eq!(b.unwrap().first_content(), Some("ok"));
    mock.assert_async().await;
}

#[tokio::test]
async fn close_releases_the_session_and_a_later_call_recreates_it() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/ai")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success_body())
        .expect(2)
        .create_async()
        .await;

    let client = Client::builder()
        .api_key("sk-test")
        .base_url(server.url())
        .build()
        .unwrap();

    client.chat().create(chat_request()).await.unwrap();
    client.close().await;

    // The client stays usable after close: a fresh session takes the old
    // one's place.
    client.chat().create(chat_request()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn close_before_any_request_is_harmless() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/ai")
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

    client.close().await;
    client.close().await;
    client.chat().create(chat_request()).await.unwrap();
}
