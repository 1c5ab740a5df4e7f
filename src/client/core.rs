//! Async client facade and resource handlers.

use crate::client::builder::ClientBuilder;
use crate::client::request::{ChatRequest, ImageRequest, AI_ENDPOINT};
use crate::config::ClientConfig;
use crate::transport::http::HttpTransport;
use crate::types::ApiResponse;
use crate::{validation, Result};
use reqwest::Method;

/// Async client for the xioca API.
///
/// The transport session is created lazily on the first request and shared by
/// all concurrent calls against this instance. Releasing it is the caller's
/// responsibility via [`Client::close`]; `Drop` cannot await, so no cleanup
/// beyond process teardown is guaranteed without it.
#[derive(Debug)]
pub struct Client {
    transport: HttpTransport,
}

impl Client {
    /// Create a client with an explicit API key and default endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().api_key(api_key).build()
    }

    /// Create a client from the `XIOCA_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        ClientBuilder::new().build()
    }

    /// Start building a client with custom configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn with_config(config: ClientConfig) -> Self {
        Self {
            transport: HttpTransport::new(config),
        }
    }

    /// Chat resource handler.
    pub fn chat(&self) -> Chat<'_> {
        Chat { client: self }
    }

    /// Image generation resource handler.
    pub fn images(&self) -> Images<'_> {
        Images { client: self }
    }

    /// Release the transport session.
    ///
    /// Idempotent; a later request lazily creates a fresh session.
    pub async fn close(&self) {
        self.transport.close().await;
    }

    async fn execute(&self, body: serde_json::Value) -> Result<ApiResponse> {
        let raw = self
            .transport
            .execute(Method::POST, AI_ENDPOINT, &body)
            .await?;
        validation::validate_response(&raw)
    }
}

/// Chat resource: multi-turn conversations.
pub struct Chat<'a> {
    client: &'a Client,
}

impl Chat<'_> {
    /// Send a conversation and return the validated response.
    pub async fn create(&self, request: ChatRequest) -> Result<ApiResponse> {
        self.client.execute(request.into_body()?).await
    }
}

/// Image resource: prompt-based generation.
pub struct Images<'a> {
    client: &'a Client,
}

impl Images<'_> {
    /// Generate from a prompt and return the validated response.
    pub async fn generate(&self, request: ImageRequest) -> Result<ApiResponse> {
        self.client.execute(request.into_chat().into_body()?).await
    }
}
