//! Account transaction history tool.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::domains::explorer::schema::{AccountExtrinsicsPage, ExtrinsicRecord};
use crate::domains::explorer::{ExplorerApi, typed_payload};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    JsonStyle, MAX_PAGE_SIZE, ToolParams, default_page, default_page_size, json_result,
    lookup_failed, require_non_empty,
};
use crate::domains::tools::handlers::ExplorerTool;

/// Parameters for the account transactions tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountTransactionsParams {
    /// The account address to fetch transactions for.
    #[schemars(
        description = "The account address to fetch transactions for",
        length(min = 1)
    )]
    pub address: String,

    /// Page number for pagination (default: 0).
    #[schemars(description = "Page number for pagination")]
    #[serde(default = "default_page")]
    pub page: u64,

    /// Number of transactions per page (default: 10, max: 100).
    #[schemars(description = "Number of transactions per page", range(min = 1, max = 100))]
    #[serde(default = "default_page_size")]
    pub per_page: u32,
}

impl ToolParams for GetAccountTransactionsParams {
    fn validate(&self) -> Result<(), ToolError> {
        require_non_empty("address", &self.address)?;
        if !(1..=MAX_PAGE_SIZE).contains(&self.per_page) {
            return Err(ToolError::invalid_arguments(format!(
                "'perPage' must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.per_page
            )));
        }
        Ok(())
    }
}

/// One row of an account's history.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionSummary {
    pub hash: String,
    pub block_num: u64,
    pub timestamp: i64,
    pub module: String,
    pub function: String,
    pub success: bool,
}

impl From<ExtrinsicRecord> for TransactionSummary {
    fn from(tx: ExtrinsicRecord) -> Self {
        Self {
            hash: tx.extrinsic_hash,
            block_num: tx.block_num,
            timestamp: tx.block_timestamp,
            module: tx.call_module,
            function: tx.call_module_function,
            success: tx.success,
        }
    }
}

/// One page of history.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionHistory {
    /// Total across all pages, as reported by the explorer.
    pub total_count: u64,
    pub page: u64,
    pub transactions: Vec<TransactionSummary>,
}

impl TransactionHistory {
    fn new(page: u64, upstream: AccountExtrinsicsPage) -> Self {
        Self {
            total_count: upstream.count,
            page,
            transactions: upstream.extrinsics.into_iter().map(Into::into).collect(),
        }
    }
}

/// Account transaction history tool.
pub struct GetAccountTransactionsTool;

#[async_trait::async_trait]
impl ExplorerTool for GetAccountTransactionsTool {
    type Params = GetAccountTransactionsParams;

    const NAME: &'static str = "get-account-transactions";

    const DESCRIPTION: &'static str = "Fetches account transaction history from Vara network";

    #[instrument(skip_all, fields(address = %params.address, page = params.page, per_page = params.per_page))]
    async fn execute(
        params: GetAccountTransactionsParams,
        explorer: &dyn ExplorerApi,
    ) -> CallToolResult {
        info!("Fetching transaction history");
        let failure = format!(
            "Failed to retrieve transaction history for address: {}",
            params.address
        );

        let response = explorer
            .fetch_account_extrinsics(&params.address, params.page, params.per_page)
            .await;
        match typed_payload::<AccountExtrinsicsPage>(response) {
            Ok(page) => json_result(
                &TransactionHistory::new(params.page, page),
                JsonStyle::Pretty,
                &failure,
            ),
            Err(e) => lookup_failed(&failure, &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::explorer::mock::MockExplorer;
    use crate::domains::tools::definitions::common::result_text;
    use serde_json::{Value, json};

    fn args(value: Value) -> rmcp::model::JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn row(hash: &str, block_num: u64, success: bool) -> Value {
        json!({
            "extrinsic_hash": hash,
            "block_num": block_num,
            "block_timestamp": 1700000000 + block_num,
            "call_module": "balances",
            "call_module_function": "transfer",
            "success": success,
            "fee": "100",
            "account_id": "kGowner",
            "nonce": 1,
            "params": "[]"
        })
    }

    #[test]
    fn test_defaults_applied() {
        let params: GetAccountTransactionsParams =
            serde_json::from_value(json!({"address": "kG"})).unwrap();
        assert_eq!(params.page, 0);
        assert_eq!(params.per_page, 10);
    }

    #[tokio::test]
    async fn test_total_count_is_upstream_total() {
        let explorer = MockExplorer::responding(json!({
            "code": 0,
            "data": {
                "count": 57,
                "extrinsics": [row("0x03", 30, true), row("0x02", 20, false)]
            }
        }));
        let result = GetAccountTransactionsTool::call(
            args(json!({"address": "kGowner", "page": 5, "perPage": 10})),
            &explorer,
        )
        .await
        .unwrap();

        let output: Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(output["total_count"], json!(57));
        assert_eq!(output["page"], json!(5));
        assert_eq!(
            output["transactions"],
            json!([
                {"hash": "0x03", "block_num": 30, "timestamp": 1700000030, "module": "balances", "function": "transfer", "success": true},
                {"hash": "0x02", "block_num": 20, "timestamp": 1700000020, "module": "balances", "function": "transfer", "success": false}
            ])
        );
        assert_eq!(
            explorer.requests(),
            vec![(
                "/api/scan/extrinsics",
                json!({"address": "kGowner", "page": 5, "row": 10, "order": "desc"})
            )]
        );
    }

    #[tokio::test]
    async fn test_empty_history() {
        let explorer =
            MockExplorer::responding(json!({"code": 0, "data": {"count": 0, "extrinsics": null}}));
        let result = GetAccountTransactionsTool::call(args(json!({"address": "kGquiet"})), &explorer)
            .await
            .unwrap();

        let output: Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(output, json!({"total_count": 0, "page": 0, "transactions": []}));
    }

    #[tokio::test]
    async fn test_out_of_range_arguments_never_call_explorer() {
        let explorer = MockExplorer::responding(json!({}));

        for bad in [
            json!({"address": "kG", "perPage": 101}),
            json!({"address": "kG", "perPage": 0}),
            json!({"address": "kG", "page": -1}),
            json!({"address": "", "page": 0}),
            json!({"page": 0}),
        ] {
            let result = GetAccountTransactionsTool::call(args(bad), &explorer).await;
            assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
        }
        assert_eq!(explorer.calls(), 0);
    }

    #[tokio::test]
    async fn test_page_beyond_u32_is_forwarded() {
        let explorer = MockExplorer::responding(json!({"code": 0, "data": {"count": 0, "extrinsics": []}}));
        let page = u64::from(u32::MAX) + 1;
        let result = GetAccountTransactionsTool::call(
            args(json!({"address": "kGowner", "page": page})),
            &explorer,
        )
        .await
        .unwrap();

        let output: Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(output["page"], json!(page));
        assert_eq!(
            explorer.requests(),
            vec![(
                "/api/scan/extrinsics",
                json!({"address": "kGowner", "page": page, "row": 10, "order": "desc"})
            )]
        );
    }

    #[tokio::test]
    async fn test_history_failure_message() {
        let explorer = MockExplorer::unavailable();
        let result = GetAccountTransactionsTool::call(args(json!({"address": "kGowner"})), &explorer)
            .await
            .unwrap();
        assert_eq!(
            result_text(&result),
            "Failed to retrieve transaction history for address: kGowner"
        );
    }
}
