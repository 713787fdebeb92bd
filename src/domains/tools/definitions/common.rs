//! Common utilities shared across explorer tools.
//!
//! Argument parsing, result construction and the small normalization helpers
//! several tools need.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::domains::explorer::LookupFailure;
use crate::domains::tools::ToolError;

/// Default page size for paginated lookups.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size the explorer accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

pub fn default_page() -> u64 {
    0
}

pub fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

// ============================================================================
// Arguments
// ============================================================================

/// Tool arguments: deserialized from the call, then range-checked.
pub trait ToolParams: DeserializeOwned + schemars::JsonSchema + Send + 'static {
    /// Checks serde cannot express. Runs before any explorer call.
    fn validate(&self) -> Result<(), ToolError> {
        Ok(())
    }
}

/// Deserialize and validate raw call arguments.
pub fn parse_params<P: ToolParams>(arguments: JsonObject) -> Result<P, ToolError> {
    let params: P = serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
    params.validate()?;
    Ok(params)
}

/// Reject empty or whitespace-only identifiers.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), ToolError> {
    if value.trim().is_empty() {
        return Err(ToolError::invalid_arguments(format!(
            "'{field}' must be a non-empty string"
        )));
    }
    Ok(())
}

// ============================================================================
// Results
// ============================================================================

/// JSON layout of a text result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    Compact,
    Pretty,
}

/// Create a result whose only content item is `text`.
pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Serialize `value` as the single text item, or fall back to `failure_message`.
pub fn json_result<T: Serialize>(value: &T, style: JsonStyle, failure_message: &str) -> CallToolResult {
    let rendered = match style {
        JsonStyle::Compact => serde_json::to_string(value),
        JsonStyle::Pretty => serde_json::to_string_pretty(value),
    };

    match rendered {
        Ok(text) => text_result(text),
        Err(e) => {
            error!("Failed to serialize tool output: {}", e);
            text_result(failure_message)
        }
    }
}

/// Report a lookup that produced no usable payload.
///
/// The caller still receives a normal result; only the log level tells the
/// failure categories apart.
pub fn lookup_failed(message: &str, failure: &LookupFailure) -> CallToolResult {
    match failure {
        // Already logged at error level by the client.
        LookupFailure::Upstream(e) => debug!("{}: {}", message, e),
        LookupFailure::MissingPayload { .. } => warn!("{}: {}", message, failure),
        LookupFailure::Schema(e) => warn!("{}: invalid payload: {}", message, e),
    }
    text_result(message)
}

// ============================================================================
// Normalization
// ============================================================================

/// Decode the JSON string the explorer embeds in extrinsic `params`.
///
/// Anything but a non-empty string holding valid JSON yields `null`.
pub fn decode_params(raw: Option<&Value>) -> Value {
    let Some(raw) = raw.and_then(Value::as_str).filter(|s| !s.is_empty()) else {
        return Value::Null;
    };

    serde_json::from_str(raw).unwrap_or_else(|e| {
        debug!("Could not decode extrinsic params: {}", e);
        Value::Null
    })
}

/// Treat an empty string like a missing one.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Text of the single content item of a result.
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> &str {
    assert_eq!(result.content.len(), 1, "expected exactly one content item");
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        other => panic!("expected text content, got {other:?}"),
    }
}
