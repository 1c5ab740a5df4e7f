//! Blocking request executor with an eagerly-created session.

use crate::config::{self, ClientConfig};
use crate::{Error, Result};
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

/// Blocking executor. The session lives for the executor's lifetime.
#[derive(Debug)]
pub(crate) struct BlockingTransport {
    config: ClientConfig,
    session: reqwest::blocking::Client,
}

impl BlockingTransport {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder =
            reqwest::blocking::Client::builder().default_headers(super::session_headers(&config)?);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let session = builder.build().map_err(Error::from)?;
        Ok(Self { config, session })
    }

    /// Send one request, blocking until the exchange completes. No retries.
    pub fn execute(&self, method: Method, endpoint: &str, body: &Value) -> Result<Value> {
        let url = config::join_url(&self.config.base_url, endpoint);
        debug!(%method, %url, "dispatching request");

        let response = self.session.request(method, &url).json(body).send()?;
        let status = response.status().as_u16();
        let text = response.text()?;
        super::interpret_body(status, &text)
    }
}
