//! Async request executor with a lazily-created shared session.

use crate::config::{self, ClientConfig};
use crate::{Error, Result};
use reqwest::Method;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;

/// Async executor. Owns the credentials and the transport session.
///
/// The session is created on first use; all concurrent callers share it. The
/// mutex doubles as the initialization guard, so a creation race between
/// concurrent first calls resolves to exactly one session.
#[derive(Debug)]
pub(crate) struct HttpTransport {
    config: ClientConfig,
    session: Mutex<Option<reqwest::Client>>,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            session: Mutex::new(None),
        }
    }

    async fn get_session(&self) -> Result<reqwest::Client> {
        let mut guard = self.session.lock().await;
        if let Some(session) = guard.as_ref() {
            return Ok(session.clone());
        }
        let session = build_session(&self.config)?;
        *guard = Some(session.clone());
        Ok(session)
    }

    /// Send one request and decode the body. No retries.
    pub async fn execute(&self, method: Method, endpoint: &str, body: &Value) -> Result<Value> {
        let session = self.get_session().await?;
        let url = config::join_url(&self.config.base_url, endpoint);
        debug!(%method, %url, "dispatching request");

        let response = session.request(method, &url).json(body).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        super::interpret_body(status, &text)
    }

    /// Release the session. The next request creates a fresh one.
    pub async fn close(&self) {
        let mut guard = self.session.lock().await;
        *guard = None;
    }
}

fn build_session(config: &ClientConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().default_headers(super::session_headers(config)?);
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(Error::from)
}
