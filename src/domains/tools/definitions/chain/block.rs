//! Block lookup tool.
//!
//! Returns the explorer's block payload as-is.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::explorer::{ExplorerApi, extract_payload, schema::BlockRecord, validate_payload};
use crate::domains::tools::definitions::common::{JsonStyle, ToolParams, json_result, lookup_failed};
use crate::domains::tools::handlers::ExplorerTool;

/// Parameters for the block lookup tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetBlockParams {
    /// The block number to fetch details for.
    #[schemars(description = "The block number to fetch details for")]
    pub block_number: u64,
}

impl ToolParams for GetBlockParams {}

/// Block lookup tool.
pub struct GetBlockTool;

impl GetBlockTool {
    fn failure_message(block_number: u64) -> String {
        format!("Failed to retrieve block details for block number: {block_number}")
    }
}

#[async_trait::async_trait]
impl ExplorerTool for GetBlockTool {
    type Params = GetBlockParams;

    const NAME: &'static str = "get-block";

    const DESCRIPTION: &'static str = "Fetches block details from Vara network";

    #[instrument(skip_all, fields(block_number = params.block_number))]
    async fn execute(params: GetBlockParams, explorer: &dyn ExplorerApi) -> CallToolResult {
        info!("Fetching block details");
        let failure = Self::failure_message(params.block_number);

        let response = explorer.fetch_block(params.block_number).await;
        let payload = match extract_payload(response) {
            Ok(payload) => payload,
            Err(e) => return lookup_failed(&failure, &e),
        };

        // Validated for shape only; the original payload is what gets returned.
        if let Err(e) = validate_payload::<BlockRecord>(&payload) {
            return lookup_failed(&failure, &e);
        }

        json_result(&payload, JsonStyle::Compact, &failure)
    }
}
