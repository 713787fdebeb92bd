//! Envelope unwrapping and payload validation.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::error::{ExplorerResult, LookupFailure};
use super::schema::Envelope;

/// Unwrap the `data` payload of an explorer response, untyped.
///
/// A missing or `null` payload is reported separately from a failed request.
pub fn extract_payload(response: ExplorerResult<Value>) -> Result<Value, LookupFailure> {
    let envelope: Envelope<Value> = serde_json::from_value(response?)?;

    match envelope.data {
        Some(Value::Null) | None => Err(LookupFailure::MissingPayload {
            code: envelope.code,
            message: envelope.message,
        }),
        Some(data) => {
            debug!(code = ?envelope.code, generated_at = ?envelope.generated_at, "Payload received");
            Ok(data)
        }
    }
}

/// Check a payload against its schema without consuming it.
pub fn validate_payload<T: DeserializeOwned>(payload: &Value) -> Result<T, LookupFailure> {
    Ok(T::deserialize(payload)?)
}

/// Unwrap and validate in one step.
pub fn typed_payload<T: DeserializeOwned>(response: ExplorerResult<Value>) -> Result<T, LookupFailure> {
    let payload = extract_payload(response)?;
    validate_payload(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::explorer::error::ExplorerError;
    use crate::domains::explorer::schema::{AccountRecord, BlockRecord};
    use serde_json::json;

    #[test]
    fn test_extract_payload_returns_data() {
        let data = extract_payload(Ok(json!({"code": 0, "data": {"a": 1}}))).unwrap();
        assert_eq!(data, json!({"a": 1}));
    }

    #[test]
    fn test_missing_payload_is_distinct_from_upstream_failure() {
        let missing = extract_payload(Ok(json!({"code": 10004, "message": "Record Not Found"})));
        assert!(matches!(
            missing,
            Err(LookupFailure::MissingPayload { code: Some(10004), .. })
        ));

        let failed = extract_payload(Err(ExplorerError::MissingConfig("API_KEY")));
        assert!(matches!(failed, Err(LookupFailure::Upstream(_))));
    }

    #[test]
    fn test_null_payload_is_missing() {
        let result = extract_payload(Ok(json!({"code": 0, "data": null})));
        assert!(matches!(result, Err(LookupFailure::MissingPayload { .. })));
    }

    #[test]
    fn test_non_object_body_is_schema_failure() {
        let result = extract_payload(Ok(json!("not an envelope")));
        assert!(matches!(result, Err(LookupFailure::Schema(_))));
    }

    #[test]
    fn test_validate_keeps_payload_intact() {
        let payload = json!({"block_num": 5, "hash": "0x05", "custom": [1, 2]});
        let block: BlockRecord = validate_payload(&payload).unwrap();
        assert_eq!(block.block_num, 5);
        assert_eq!(payload["custom"], json!([1, 2]));
    }

    #[test]
    fn test_typed_payload_schema_violation() {
        let result = typed_payload::<AccountRecord>(Ok(json!({"data": {"display": "x"}})));
        assert!(matches!(result, Err(LookupFailure::Schema(_))));
    }
}
