//! Typed decoding of a successful API call.

use crate::types::message::Message;
use serde::{Deserialize, Serialize};

/// The validated, fully-typed body of a successful API response.
///
/// Immutable once constructed; `choices` preserves server-provided order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub id: String,
    pub object: String,
    /// Unix timestamp of response creation.
    pub created: u64,
    pub model: String,
    pub choices: Vec<Choice>,
    /// Token accounting. Absent is distinct from zero usage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl ApiResponse {
    /// Content of the first choice, when present.
    ///
    /// Convenience for the common single-choice case.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

/// One candidate response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub index: u32,
    pub message: Message,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Token accounting for a completed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}
