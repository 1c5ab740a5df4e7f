//! HTTP request executors.
//!
//! One request per call, no retries: the caller decides whether to retry.
//! Both executors classify error statuses through [`crate::Error::from_status`]
//! and hand successful bodies back as raw JSON; schema validation happens one
//! layer up.

pub(crate) mod blocking;
pub(crate) mod http;

use crate::config::ClientConfig;
use crate::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

/// Default headers installed on every session: bearer auth + JSON content type.
fn session_headers(config: &ClientConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
        .map_err(|_| Error::authentication("API key contains characters invalid in a header"))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Map a completed HTTP exchange to the raw JSON body or a typed error.
fn interpret_body(status: u16, body: &str) -> Result<Value> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(Error::from);
    }
    tracing::warn!(status, "request failed");
    Err(Error::from_status(status, body))
}
