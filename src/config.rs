//! Client configuration: endpoint defaults and credential resolution.

use crate::{Error, Result};
use std::env;
use std::time::Duration;

/// Production API endpoint used when no override is given.
pub const DEFAULT_BASE_URL: &str = "https://xioca.live/api/";

/// Environment variable consulted when no API key is passed explicitly.
pub const API_KEY_ENV: &str = "XIOCA_API_KEY";

/// Resolved configuration shared by the blocking and async clients.
#[derive(Debug, Clone)]
pub(crate) struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Resolve credentials and endpoint settings.
    ///
    /// Precedence for the API key: explicit parameter, then `XIOCA_API_KEY`.
    /// A missing or empty key fails fast with an authentication error.
    pub fn resolve(
        api_key: Option<String>,
        base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let api_key = match api_key {
            Some(key) => key,
            None => env::var(API_KEY_ENV).unwrap_or_default(),
        };
        if api_key.trim().is_empty() {
            return Err(Error::authentication(format!(
                "no API key provided; pass one to the client or set {}",
                API_KEY_ENV
            )));
        }

        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        url::Url::parse(&base_url).map_err(|e| {
            Error::validation_with_context(
                format!("invalid base URL: {}", e),
                crate::ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(base_url.clone()),
            )
        })?;

        Ok(Self {
            api_key,
            base_url,
            timeout,
        })
    }
}

/// Join a base URL and an endpoint path, normalizing slashes on the seam.
pub(crate) fn join_url(base: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}
