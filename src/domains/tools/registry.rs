//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Direct dispatch for tool calls by name
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use serde_json::Value;
use tracing::warn;

use super::ToolError;
use super::definitions::{
    GetAccountBalanceTool, GetAccountInfoTool, GetAccountTransactionsTool, GetBlockTool,
    GetTransactionTool,
};
use super::handlers::ExplorerTool;
use super::router::build_tool_router;
use crate::domains::explorer::ExplorerApi;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - binds every tool to the explorer it queries.
///
/// Built once at startup and handed to the server; holds no mutable state.
#[derive(Clone)]
pub struct ToolRegistry {
    explorer: Arc<dyn ExplorerApi>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(explorer: Arc<dyn ExplorerApi>) -> Self {
        Self { explorer }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GetBlockTool::NAME,
            GetTransactionTool::NAME,
            GetAccountInfoTool::NAME,
            GetAccountBalanceTool::NAME,
            GetAccountTransactionsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetBlockTool::to_tool(),
            GetTransactionTool::to_tool(),
            GetAccountInfoTool::to_tool(),
            GetAccountBalanceTool::to_tool(),
            GetAccountTransactionsTool::to_tool(),
        ]
    }

    /// Build the rmcp router used by the stdio transport.
    pub fn router<S>(&self) -> ToolRouter<S>
    where
        S: Send + Sync + 'static,
    {
        build_tool_router(self.explorer.clone())
    }

    /// Dispatch a tool call by name.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<CallToolResult, ToolError> {
        let arguments = match arguments {
            Value::Object(map) => map,
            Value::Null => JsonObject::new(),
            other => {
                return Err(ToolError::invalid_arguments(format!(
                    "arguments must be a JSON object, got {other}"
                )));
            }
        };

        let explorer = self.explorer.as_ref();
        match name {
            GetBlockTool::NAME => GetBlockTool::call(arguments, explorer).await,
            GetTransactionTool::NAME => GetTransactionTool::call(arguments, explorer).await,
            GetAccountInfoTool::NAME => GetAccountInfoTool::call(arguments, explorer).await,
            GetAccountBalanceTool::NAME => GetAccountBalanceTool::call(arguments, explorer).await,
            GetAccountTransactionsTool::NAME => {
                GetAccountTransactionsTool::call(arguments, explorer).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
