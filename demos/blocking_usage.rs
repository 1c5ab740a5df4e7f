//! Blocking usage: chat plus image generation, no async runtime.
//!
//! Usage:
//!   XIOCA_API_KEY="your_key" cargo run --example blocking_usage

use xioca::{blocking::Client, ChatRequest, ImageRequest, Message};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = Client::from_env()?;

    let chat = client
        .chat()
        .create(ChatRequest::new("gpt-4o", vec![Message::user("Tell me a joke.")]))?;
    println!("Chat: {}", chat.first_content().unwrap_or_default());

    let image = client
        .images()
        .generate(ImageRequest::new("sd", "a cat in a spacesuit"))?;
    println!("Image: {}", image.first_content().unwrap_or_default());

    Ok(())
}
