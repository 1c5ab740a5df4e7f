//! Basic async usage.
//!
//! The API key is read from the environment:
//!   XIOCA_API_KEY="your_key" cargo run --example basic_usage

use xioca::{ChatRequest, Client, Message};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let client = Client::from_env()?;

    let messages = vec![
        Message::system("You are a helpful assistant."),
        Message::user("Hello! What can you do?"),
    ];

    let response = client
        .chat()
        .create(ChatRequest::new("gpt-4o", messages).temperature(0.7).max_tokens(500))
        .await?;

    println!("Response:\n{}", response.first_content().unwrap_or_default());
    if let Some(usage) = response.usage {
        println!("\nUsage: {usage:?}");
    }

    client.close().await;
    Ok(())
}
