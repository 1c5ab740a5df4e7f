//! Blocking client facade and resource handlers.
//!
//! Same contract as [`crate::client::core`], differing only in suspension
//! behavior: every call blocks the current thread until the HTTP exchange
//! completes.

use crate::client::builder::ClientBuilder;
use crate::client::request::{ChatRequest, ImageRequest, AI_ENDPOINT};
use crate::config::ClientConfig;
use crate::transport::blocking::BlockingTransport;
use crate::types::ApiResponse;
use crate::{validation, Result};
use reqwest::Method;

/// Blocking client for the xioca API.
///
/// The transport session is created eagerly and lives for the client's
/// lifetime. Thread safety is whatever `reqwest::blocking::Client` provides;
/// treat one client per thread as the safe default.
#[derive(Debug)]
pub struct Client {
    transport: BlockingTransport,
}

impl Client {
    /// Create a client with an explicit API key and default endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().api_key(api_key).build_blocking()
    }

    /// Create a client from the `XIOCA_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        ClientBuilder::new().build_blocking()
    }

    /// Start building a client with custom configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: BlockingTransport::new(config)?,
        })
    }

    /// Chat resource handler.
    pub fn chat(&self) -> Chat<'_> {
        Chat { client: self }
    }

    /// Image generation resource handler.
    pub fn images(&self) -> Images<'_> {
        Images { client: self }
    }

    fn execute(&self, body: serde_json::Value) -> Result<ApiResponse> {
        let raw = self.transport.execute(Method::POST, AI_ENDPOINT, &body)?;
        validation::validate_response(&raw)
    }
}

/// Chat resource: multi-turn conversations.
pub struct Chat<'a> {
    client: &'a Client,
}

impl Chat<'_> {
    /// Send a conversation, blocking until the response arrives.
    pub fn create(&self, request: ChatRequest) -> Result<ApiResponse> {
        self.client.execute(request.into_body()?)
    }
}

/// Image resource: prompt-based generation.
pub struct Images<'a> {
    client: &'a Client,
}

impl Images<'_> {
    /// Generate from a prompt, blocking until the response arrives.
    pub fn generate(&self, request: ImageRequest) -> Result<ApiResponse> {
        self.client.execute(request.into_chat().into_body()?)
    }
}
