//! Extrinsic (transaction) lookup tool.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use crate::domains::explorer::schema::{DecimalString, ExtrinsicRecord};
use crate::domains::explorer::{ExplorerApi, typed_payload};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    JsonStyle, ToolParams, decode_params, json_result, lookup_failed, require_non_empty,
};
use crate::domains::tools::handlers::ExplorerTool;

/// Parameters for the transaction lookup tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTransactionParams {
    /// The transaction/extrinsic hash to fetch details for.
    #[schemars(
        description = "The transaction/extrinsic hash to fetch details for",
        length(min = 1)
    )]
    pub extrinsic_hash: String,
}

impl ToolParams for GetTransactionParams {
    fn validate(&self) -> Result<(), ToolError> {
        require_non_empty("extrinsicHash", &self.extrinsic_hash)
    }
}

/// Outcome of an extrinsic, derived from the explorer's success flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExtrinsicStatus {
    Success,
    Failed,
}

impl From<bool> for ExtrinsicStatus {
    fn from(success: bool) -> Self {
        if success { Self::Success } else { Self::Failed }
    }
}

/// Flattened view of an extrinsic.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionDetails {
    pub hash: String,
    pub block_num: u64,
    pub timestamp: i64,
    pub module: String,
    pub function: String,
    pub status: ExtrinsicStatus,
    pub fee: DecimalString,
    pub sender: String,
    pub params: Value,
}

impl From<ExtrinsicRecord> for TransactionDetails {
    fn from(tx: ExtrinsicRecord) -> Self {
        Self {
            params: decode_params(tx.params.as_ref()),
            hash: tx.extrinsic_hash,
            block_num: tx.block_num,
            timestamp: tx.block_timestamp,
            module: tx.call_module,
            function: tx.call_module_function,
            status: tx.success.into(),
            fee: tx.fee,
            sender: tx.account_id,
        }
    }
}

/// Transaction lookup tool.
pub struct GetTransactionTool;

#[async_trait::async_trait]
impl ExplorerTool for GetTransactionTool {
    type Params = GetTransactionParams;

    const NAME: &'static str = "get-transaction";

    const DESCRIPTION: &'static str =
        "Fetches transaction/extrinsic details by hash from Vara network";

    #[instrument(skip_all, fields(hash = %params.extrinsic_hash))]
    async fn execute(params: GetTransactionParams, explorer: &dyn ExplorerApi) -> CallToolResult {
        info!("Fetching extrinsic details");
        let failure = format!(
            "Failed to retrieve transaction details for hash: {}",
            params.extrinsic_hash
        );

        let response = explorer.fetch_extrinsic(&params.extrinsic_hash).await;
        match typed_payload::<ExtrinsicRecord>(response) {
            Ok(tx) => json_result(&TransactionDetails::from(tx), JsonStyle::Pretty, &failure),
            Err(e) => lookup_failed(&failure, &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::explorer::mock::MockExplorer;
    use crate::domains::tools::definitions::common::result_text;
    use serde_json::json;

    fn args(value: Value) -> rmcp::model::JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn extrinsic(success: bool, params: Option<&str>) -> Value {
        let mut data = json!({
            "extrinsic_hash": "0xfeed",
            "extrinsic_index": "100-2",
            "block_num": 100,
            "block_timestamp": 1712000000,
            "call_module": "gear",
            "call_module_function": "send_message",
            "success": success,
            "fee": 1500000000u64,
            "fee_used": 1400000000u64,
            "account_id": "kGsender",
            "nonce": 3,
            "finalized": true
        });
        if let Some(params) = params {
            data["params"] = json!(params);
        }
        json!({"code": 0, "message": "Success", "generated_at": 1712000100, "data": data})
    }

    #[test]
    fn test_status_is_total() {
        assert_eq!(ExtrinsicStatus::from(true), ExtrinsicStatus::Success);
        assert_eq!(ExtrinsicStatus::from(false), ExtrinsicStatus::Failed);
        assert_eq!(serde_json::to_value(ExtrinsicStatus::Success).unwrap(), json!("Success"));
        assert_eq!(serde_json::to_value(ExtrinsicStatus::Failed).unwrap(), json!("Failed"));
    }

    #[tokio::test]
    async fn test_transaction_is_flattened() {
        let explorer = MockExplorer::responding(extrinsic(true, Some(r#"[{"name":"value","value":"5"}]"#)));
        let result = GetTransactionTool::call(args(json!({"extrinsicHash": "0xfeed"})), &explorer)
            .await
            .unwrap();

        let output: Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(
            output,
            json!({
                "hash": "0xfeed",
                "block_num": 100,
                "timestamp": 1712000000,
                "module": "gear",
                "function": "send_message",
                "status": "Success",
                "fee": "1500000000",
                "sender": "kGsender",
                "params": [{"name": "value", "value": "5"}]
            })
        );
        assert_eq!(
            explorer.requests(),
            vec![("/api/scan/extrinsic", json!({"hash": "0xfeed"}))]
        );
    }

    #[tokio::test]
    async fn test_failed_extrinsic_with_bad_params() {
        let explorer = MockExplorer::responding(extrinsic(false, Some("{truncated")));
        let result = GetTransactionTool::call(args(json!({"extrinsicHash": "0xfeed"})), &explorer)
            .await
            .unwrap();

        let output: Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(output["status"], json!("Failed"));
        assert_eq!(output["params"], Value::Null);
    }

    #[tokio::test]
    async fn test_non_string_params_is_null() {
        let mut response = extrinsic(true, None);
        response["data"]["params"] = json!([{"name": "x"}]);
        let explorer = MockExplorer::responding(response);
        let result = GetTransactionTool::call(args(json!({"extrinsicHash": "0xfeed"})), &explorer)
            .await
            .unwrap();

        let output: Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(output["hash"], json!("0xfeed"));
        assert_eq!(output["params"], Value::Null);
    }

    #[tokio::test]
    async fn test_absent_params_is_null() {
        let explorer = MockExplorer::responding(extrinsic(true, None));
        let result = GetTransactionTool::call(args(json!({"extrinsicHash": "0xfeed"})), &explorer)
            .await
            .unwrap();

        let output: Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(output["params"], Value::Null);
    }

    #[tokio::test]
    async fn test_unknown_hash() {
        let explorer = MockExplorer::responding(json!({"code": 0, "message": "Success", "data": null}));
        let result = GetTransactionTool::call(args(json!({"extrinsicHash": "0x00"})), &explorer)
            .await
            .unwrap();
        assert_eq!(
            result_text(&result),
            "Failed to retrieve transaction details for hash: 0x00"
        );
    }

    #[tokio::test]
    async fn test_empty_hash_rejected() {
        let explorer = MockExplorer::responding(extrinsic(true, None));
        let result = GetTransactionTool::call(args(json!({"extrinsicHash": ""})), &explorer).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
        assert_eq!(explorer.calls(), 0);
    }
}
