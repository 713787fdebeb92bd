//! Tool handler trait.
//!
//! Every explorer tool is a zero-sized type implementing [`ExplorerTool`].
//! The trait supplies the MCP metadata, the rmcp route for the stdio
//! transport and direct dispatch for the registry, so a tool file only
//! declares its parameters and its `execute()` logic.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use tracing::warn;

use super::ToolError;
use super::definitions::common::{ToolParams, parse_params};
use crate::domains::explorer::ExplorerApi;

/// An MCP tool answered by explorer lookups.
#[async_trait::async_trait]
pub trait ExplorerTool: Send + Sync + 'static {
    /// Validated input arguments.
    type Params: ToolParams;

    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Run the lookup and shape its output. Never fails at the protocol level.
    async fn execute(params: Self::Params, explorer: &dyn ExplorerApi) -> CallToolResult;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Parse arguments, then execute.
    ///
    /// Invalid arguments are returned as an error and never reach the explorer.
    async fn call(
        arguments: JsonObject,
        explorer: &dyn ExplorerApi,
    ) -> Result<CallToolResult, ToolError> {
        let params = parse_params::<Self::Params>(arguments).inspect_err(|e| {
            warn!("Rejected {} call: {}", Self::NAME, e);
        })?;
        Ok(Self::execute(params, explorer).await)
    }

    /// Create a ToolRoute for the stdio transport.
    fn create_route<S>(explorer: Arc<dyn ExplorerApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
        Self: Sized,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let explorer = explorer.clone();
            async move {
                Self::call(args, explorer.as_ref())
                    .await
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))
            }
            .boxed()
        })
    }
}
