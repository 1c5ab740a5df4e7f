//! Response schema validation.
//!
//! Decodes a raw JSON value into [`ApiResponse`] with strict typing: required
//! fields must be present, integers must be JSON integers (no numeric-string
//! coercion), and `role` must be one of the known values. Every failure names
//! the offending field path (e.g. `choices[0].message.role`).

use crate::types::{ApiResponse, Choice, Message, MessageRole, Usage};
use crate::{Error, ErrorContext, Result};
use serde_json::{Map, Value};

const SOURCE: &str = "response_validator";

/// Validate a decoded response body against the success schema.
///
/// Pure function: no side effects, the input value is not consumed.
pub fn validate_response(raw: &Value) -> Result<ApiResponse> {
    let obj = expect_object(raw, "$")?;

    let choices_value = require(obj, "choices", "$")?;
    let choices_array = expect_array(choices_value, "choices")?;
    let mut choices = Vec::with_capacity(choices_array.len());
    for (i, choice) in choices_array.iter().enumerate() {
        choices.push(validate_choice(choice, &format!("choices[{}]", i))?);
    }

    let usage = match obj.get("usage") {
        None | Some(Value::Null) => None,
        Some(value) => Some(validate_usage(value, "usage")?),
    };

    Ok(ApiResponse {
        id: expect_string(require(obj, "id", "$")?, "id")?,
        object: expect_string(require(obj, "object", "$")?, "object")?,
        created: expect_u64(require(obj, "created", "$")?, "created")?,
        model: expect_string(require(obj, "model", "$")?, "model")?,
        choices,
        usage,
    })
}

fn validate_choice(value: &Value, path: &str) -> Result<Choice> {
    let obj = expect_object(value, path)?;
    let message_path = format!("{}.message", path);
    Ok(Choice {
        index: expect_u32(
            require(obj, "index", path)?,
            &format!("{}.index", path),
        )?,
        message: validate_message(require(obj, "message", path)?, &message_path)?,
        finish_reason: optional_string(obj, "finish_reason", path)?,
    })
}

fn validate_message(value: &Value, path: &str) -> Result<Message> {
    let obj = expect_object(value, path)?;
    let role_path = format!("{}.role", path);
    let role_str = expect_string(require(obj, "role", path)?, &role_path)?;
    let role = match role_str.as_str() {
        "assistant" => MessageRole::Assistant,
        "user" => MessageRole::User,
        "system" => MessageRole::System,
        other => {
            return Err(mismatch(
                &role_path,
                "one of \"assistant\", \"user\", \"system\"",
                &Value::String(other.to_string()),
            ))
        }
    };
    Ok(Message {
        role,
        content: optional_string(obj, "content", path)?,
        image_url: optional_string(obj, "image_url", path)?,
    })
}

fn validate_usage(value: &Value, path: &str) -> Result<Usage> {
    let obj = expect_object(value, path)?;
    Ok(Usage {
        prompt_tokens: expect_u32(
            require(obj, "prompt_tokens", path)?,
            &format!("{}.prompt_tokens", path),
        )?,
        completion_tokens: expect_u32(
            require(obj, "completion_tokens", path)?,
            &format!("{}.completion_tokens", path),
        )?,
        total_tokens: expect_u32(
            require(obj, "total_tokens", path)?,
            &format!("{}.total_tokens", path),
        )?,
    })
}

fn require<'a>(obj: &'a Map<String, Value>, key: &str, parent: &str) -> Result<&'a Value> {
    obj.get(key).ok_or_else(|| {
        Error::validation_with_context(
            "missing required field",
            ErrorContext::new()
                .with_field_path(join_path(parent, key))
                .with_source(SOURCE),
        )
    })
}

fn optional_string(
    obj: &Map<String, Value>,
    key: &str,
    parent: &str,
) -> Result<Option<String>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => expect_string(value, &join_path(parent, key)).map(Some),
    }
}

fn expect_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| mismatch(path, "object", value))
}

fn expect_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| mismatch(path, "array", value))
}

fn expect_string(value: &Value, path: &str) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| mismatch(path, "string", value))
}

fn expect_u64(value: &Value, path: &str) -> Result<u64> {
    value
        .as_u64()
        .ok_or_else(|| mismatch(path, "non-negative integer", value))
}

fn expect_u32(value: &Value, path: &str) -> Result<u32> {
    let n = expect_u64(value, path)?;
    u32::try_from(n).map_err(|_| mismatch(path, "32-bit integer", value))
}

fn mismatch(path: &str, expected: &str, actual: &Value) -> Error {
    Error::validation_with_context(
        format!("expected {}", expected),
        ErrorContext::new()
            .with_field_path(path)
            .with_details(format!("got {}", type_name(actual)))
            .with_source(SOURCE),
    )
}

fn join_path(parent: &str, key: &str) -> String {
    if parent == "$" {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
