//! Account information tool.
//!
//! Reduces the explorer's account record to a flat summary. Fields the
//! explorer omits (or sends empty) take fixed defaults.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::domains::explorer::schema::AccountRecord;
use crate::domains::explorer::{ExplorerApi, typed_payload};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    JsonStyle, ToolParams, json_result, lookup_failed, non_empty, require_non_empty,
};
use crate::domains::tools::handlers::ExplorerTool;

const DEFAULT_DISPLAY: &str = "Not Set";
const DEFAULT_BALANCE: &str = "0";

/// Parameters for the account information tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetAccountInfoParams {
    /// The account address to fetch information for.
    #[schemars(
        description = "The account address to fetch information for",
        length(min = 1)
    )]
    pub address: String,
}

impl ToolParams for GetAccountInfoParams {
    fn validate(&self) -> Result<(), ToolError> {
        require_non_empty("address", &self.address)
    }
}

/// Flat account summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    pub address: String,
    pub display: String,
    /// Decimal string, never parsed as a number.
    pub balance: String,
    pub extrinsics_count: u64,
    pub transactions_count: u64,
    pub nonce: u64,
    pub has_identity: bool,
}

impl From<AccountRecord> for AccountSummary {
    fn from(account: AccountRecord) -> Self {
        Self {
            address: account.address,
            display: non_empty(account.display).unwrap_or_else(|| DEFAULT_DISPLAY.to_string()),
            balance: account
                .balance
                .filter(|b| !b.is_empty())
                .map(|b| b.into_inner())
                .unwrap_or_else(|| DEFAULT_BALANCE.to_string()),
            extrinsics_count: account.count_extrinsics.unwrap_or_default(),
            transactions_count: account.count_txs.unwrap_or_default(),
            nonce: account.nonce.unwrap_or_default(),
            has_identity: account.identity.unwrap_or_default(),
        }
    }
}

/// Account information tool.
pub struct GetAccountInfoTool;

#[async_trait::async_trait]
impl ExplorerTool for GetAccountInfoTool {
    type Params = GetAccountInfoParams;

    const NAME: &'static str = "get-account-info";

    const DESCRIPTION: &'static str = "Fetches account information from Vara network";

    #[instrument(skip_all, fields(address = %params.address))]
    async fn execute(params: GetAccountInfoParams, explorer: &dyn ExplorerApi) -> CallToolResult {
        info!("Fetching account info");
        let failure = format!(
            "Failed to retrieve account information for address: {}",
            params.address
        );

        let response = explorer.fetch_account(&params.address).await;
        match typed_payload::<AccountRecord>(response) {
            Ok(account) => json_result(&AccountSummary::from(account), JsonStyle::Pretty, &failure),
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

    fn args(address: &str) -> rmcp::model::JsonObject {
        json!({ "address": address }).as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_defaults_for_sparse_account() {
        let explorer = MockExplorer::responding(json!({"code": 0, "data": {"address": "kGsparse"}}));
        let result = GetAccountInfoTool::call(args("kGsparse"), &explorer).await.unwrap();

        let output: Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(
            output,
            json!({
                "address": "kGsparse",
                "display": "Not Set",
                "balance": "0",
                "extrinsics_count": 0,
                "transactions_count": 0,
                "nonce": 0,
                "has_identity": false
            })
        );
    }

    #[tokio::test]
    async fn test_full_account_keeps_values() {
        let explorer = MockExplorer::responding(json!({
            "code": 0,
            "data": {
                "address": "kGfull",
                "display": "Gear Foundation",
                "identity": true,
                "balance": "123456789012345678901234.5",
                "count_extrinsics": 12,
                "count_txs": 30,
                "nonce": 11,
                "judgements": [{"index": 0, "judgement": "Reasonable"}]
            }
        }));
        let result = GetAccountInfoTool::call(args("kGfull"), &explorer).await.unwrap();

        let output: Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(output["display"], json!("Gear Foundation"));
        assert_eq!(output["balance"], json!("123456789012345678901234.5"));
        assert_eq!(output["extrinsics_count"], json!(12));
        assert_eq!(output["transactions_count"], json!(30));
        assert_eq!(output["nonce"], json!(11));
        assert_eq!(output["has_identity"], json!(true));
        assert_eq!(explorer.requests(), vec![("/api/scan/account", json!({"address": "kGfull"}))]);
    }

    #[test]
    fn test_empty_strings_take_defaults() {
        let record: AccountRecord =
            serde_json::from_value(json!({"address": "kG", "display": "", "balance": ""})).unwrap();
        let summary = AccountSummary::from(record);
        assert_eq!(summary.display, "Not Set");
        assert_eq!(summary.balance, "0");
    }

    #[tokio::test]
    async fn test_unindexed_address() {
        let explorer = MockExplorer::responding(json!({"code": 0, "message": "Success"}));
        let result = GetAccountInfoTool::call(args("kGnew"), &explorer).await.unwrap();
        assert_eq!(
            result_text(&result),
            "Failed to retrieve account information for address: kGnew"
        );
    }

    #[tokio::test]
    async fn test_blank_address_rejected() {
        let explorer = MockExplorer::responding(json!({}));
        assert!(GetAccountInfoTool::call(args("  "), &explorer).await.is_err());
        assert_eq!(explorer.calls(), 0);
    }
}
