//! # xioca
//!
//! Rust client for the [xioca.live](https://xioca.live) AI API: chat
//! completions and prompt-based image generation over one authenticated
//! endpoint, with blocking and async surfaces.
//!
//! ## Overview
//!
//! The crate is a thin, typed façade over a single `POST {base}/ai` call:
//! build an authenticated request, send it, validate the decoded JSON against
//! the response schema, and map every failure onto a small error taxonomy.
//! There are no retries, no caching, and no streaming; each call performs
//! exactly one HTTP exchange and surfaces its outcome to the caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use xioca::{ChatRequest, Client, Message};
//!
//! #[tokio::main]
//! async fn main() -> xioca::Result<()> {
//!     let client = Client::from_env()?; // reads XIOCA_API_KEY
//!
//!     let response = client
//!         .chat()
//!         .create(ChatRequest::new(
//!             "gpt-4o",
//!             vec![Message::user("Hello, how are you?")],
//!         ))
//!         .await?;
//!     println!("{}", response.first_content().unwrap_or_default());
//!
//!     client.close().await;
//!     Ok(())
//! }
//! ```
//!
//! The blocking twin lives under [`blocking`] with the same contract, minus
//! the suspension:
//!
//! ```rust,no_run
//! use xioca::{blocking::Client, ImageRequest};
//!
//! fn main() -> xioca::Result<()> {
//!     let client = Client::new("your-api-key")?;
//!     let response = client.images().generate(ImageRequest::new("sd", "draw a cat"))?;
//!     println!("{:?}", response.first_content());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Blocking and async client facades, resource handlers |
//! | [`types`] | Core type definitions (messages, responses) |
//! | [`validation`] | Strict response schema validation |
//! | [`config`] | Endpoint defaults and credential resolution |
//! | [`error`] | Error taxonomy |

pub mod client;
pub mod config;
pub mod types;
pub mod validation;

mod transport;

// Re-export main types for convenience
pub use client::blocking;
pub use client::{ChatRequest, Client, ClientBuilder, ImageRequest};
pub use types::{ApiResponse, Choice, Message, MessageRole, Usage};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
