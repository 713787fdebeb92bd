//! Account balance tool.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::explorer::schema::AccountBalance;
use crate::domains::explorer::{ExplorerApi, typed_payload};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    JsonStyle, ToolParams, json_result, lookup_failed, require_non_empty,
};
use crate::domains::tools::handlers::ExplorerTool;

/// Parameters for the account balance tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetAccountBalanceParams {
    /// The account address to fetch balance for.
    #[schemars(description = "The account address to fetch balance for", length(min = 1))]
    pub address: String,
}

impl ToolParams for GetAccountBalanceParams {
    fn validate(&self) -> Result<(), ToolError> {
        require_non_empty("address", &self.address)
    }
}

/// Account balance tool. Returns the token holdings payload unchanged.
pub struct GetAccountBalanceTool;

#[async_trait::async_trait]
impl ExplorerTool for GetAccountBalanceTool {
    type Params = GetAccountBalanceParams;

    const NAME: &'static str = "get-account-balance";

    const DESCRIPTION: &'static str = "Fetches account balance from Vara network";

    #[instrument(skip_all, fields(address = %params.address))]
    async fn execute(params: GetAccountBalanceParams, explorer: &dyn ExplorerApi) -> CallToolResult {
        info!("Fetching account balance");
        let failure = format!(
            "Failed to retrieve account balance for address: {}",
            params.address
        );

        let response = explorer.fetch_account_balance(&params.address).await;
        match typed_payload::<AccountBalance>(response) {
            Ok(balance) => json_result(&balance, JsonStyle::Pretty, &failure),
            Err(e) => lookup_failed(&failure, &e),
        }
    }
}
