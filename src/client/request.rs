//! Payload shaping shared by the blocking and async surfaces.

use crate::types::Message;
use crate::Result;
use serde_json::{Map, Value};

/// Endpoint path used by both chat and image generation.
pub(crate) const AI_ENDPOINT: &str = "ai";

/// Chat completion request parameters.
///
/// Extra options are passed through to the server verbatim; which options the
/// server recognizes (temperature, max_tokens, ...) is entirely its contract,
/// nothing is validated locally.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    extra: Map<String, Value>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            extra: Map::new(),
        }
    }

    /// Set sampling temperature.
    pub fn temperature(self, temperature: f64) -> Self {
        self.option("temperature", temperature)
    }

    /// Set the completion token limit.
    pub fn max_tokens(self, max_tokens: u32) -> Self {
        self.option("max_tokens", max_tokens)
    }

    /// Attach an arbitrary server-defined option.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Shape the JSON request body: `{"model", "messages", ...extras}`.
    pub(crate) fn into_body(self) -> Result<Value> {
        let mut body = Map::new();
        body.insert("model".to_string(), Value::String(self.model));
        body.insert("messages".to_string(), serde_json::to_value(self.messages)?);
        // Extras merge last, matching the server-side contract that explicit
        // options win over the positional fields.
        body.extend(self.extra);
        Ok(Value::Object(body))
    }
}

/// Image generation request parameters.
///
/// The API models image generation as a one-turn conversation: the prompt
/// becomes a single user message against the same endpoint as chat.
#[derive(Debug, Clone)]
pub struct ImageRequest {
    model: String,
    prompt: String,
    extra: Map<String, Value>,
}

impl ImageRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            extra: Map::new(),
        }
    }

    /// Attach an arbitrary server-defined option.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub(crate) fn into_chat(self) -> ChatRequest {
        ChatRequest {
            model: self.model,
            messages: vec![Message::user(self.prompt)],
            extra: self.extra,
        }
    }
}
