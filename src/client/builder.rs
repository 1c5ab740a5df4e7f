//! Builder for creating clients with custom configuration.

use crate::client::{blocking, core};
use crate::config::ClientConfig;
use crate::Result;
use std::time::Duration;

/// Builder shared by the blocking and async clients.
///
/// Keep this surface area small and predictable: key, endpoint, timeout.
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout: None,
        }
    }

    /// Set the API key explicitly. Without this, `XIOCA_API_KEY` is consulted.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the base URL.
    ///
    /// Primarily for testing with mock servers; production use keeps the
    /// default endpoint.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Opt into a per-request timeout.
    ///
    /// Without this the transport's own defaults apply and requests may wait
    /// indefinitely on a stalled server.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the async client.
    pub fn build(self) -> Result<core::Client> {
        let config = self.into_config()?;
        Ok(core::Client::with_config(config))
    }

    /// Build the blocking client.
    pub fn build_blocking(self) -> Result<blocking::Client> {
        let config = self.into_config()?;
        blocking::Client::with_config(config)
    }

    fn into_config(self) -> Result<ClientConfig> {
        ClientConfig::resolve(self.api_key, self.base_url, self.timeout)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
