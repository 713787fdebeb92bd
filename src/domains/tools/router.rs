//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; this module only lists them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    GetAccountBalanceTool, GetAccountInfoTool, GetAccountTransactionsTool, GetBlockTool,
    GetTransactionTool,
};
use super::handlers::ExplorerTool;
use crate::domains::explorer::ExplorerApi;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(explorer: Arc<dyn ExplorerApi>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetBlockTool::create_route(explorer.clone()))
        .with_route(GetTransactionTool::create_route(explorer.clone()))
        .with_route(GetAccountInfoTool::create_route(explorer.clone()))
        .with_route(GetAccountBalanceTool::create_route(explorer.clone()))
        .with_route(GetAccountTransactionsTool::create_route(explorer))
}
