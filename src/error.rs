use thiserror::Error;

/// Structured error context for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path that caused the error (e.g., "choices[0].message.role")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected type, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "response_validator")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the xioca client.
///
/// One flat taxonomy: every failure a request can produce, from missing
/// credentials to a malformed response body, is a variant here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Authentication error: {message}")]
    Authentication { message: String },

    #[error("Permission denied: {message}")]
    Permission { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new authentication error.
    pub fn authentication(msg: impl Into<String>) -> Self {
        Error::Authentication {
            message: msg.into(),
        }
    }

    /// Create a new validation error without structured context.
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a new validation error with structured context.
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    /// Classify an HTTP error status into the taxonomy.
    ///
    /// `detail` is the response body (or an excerpt of it); 404 and generic
    /// API errors carry it so callers can see what the server said.
    pub(crate) fn from_status(status: u16, detail: &str) -> Self {
        match status {
            401 => Error::Authentication {
                message: "invalid API key (HTTP 401); check your credentials".to_string(),
            },
            403 => Error::Permission {
                message: "access forbidden (HTTP 403); the account may be blocked".to_string(),
            },
            404 => Error::NotFound {
                message: format!("unknown model or resource: {}", excerpt(detail)),
            },
            _ => Error::Api {
                status,
                message: excerpt(detail),
            },
        }
    }

    /// HTTP status associated with this error, when one exists.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Authentication { .. } => Some(401),
            Error::Permission { .. } => Some(403),
            Error::NotFound { .. } => Some(404),
            Error::Api { status, .. } => Some(*status),
            Error::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Extract validation error context if available.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Validation { context, .. } => Some(context),
            _ => None,
        }
    }
}

// Error messages keep a bounded body excerpt; bodies can be arbitrarily large.
fn excerpt(detail: &str) -> String {
    const MAX: usize = 512;
    let trimmed = detail.trim();
    if trimmed.len() <= MAX {
        trimmed.to_string()
    } else {
        let mut end = MAX;
        while !trimmed.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &trimmed[..end])
    }
}
