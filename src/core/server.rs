//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Tool calls are routed through the router built from the
//! [`ToolRegistry`], which is constructed once and passed in explicitly.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::explorer::SubscanClient;
use crate::domains::tools::ToolRegistry;

const INSTRUCTIONS: &str = "Query the Vara network through the Subscan explorer. \
    Use get-block for a block by number, get-transaction for an extrinsic by hash, \
    get-account-info and get-account-balance for an address, and \
    get-account-transactions for an address's extrinsic history (newest first).";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry the tool router was built from.
    registry: ToolRegistry,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server serving the tools of `registry`.
    pub fn new(config: Config, registry: ToolRegistry) -> Self {
        Self {
            tool_router: registry.router::<Self>(),
            config: Arc::new(config),
            registry,
        }
    }

    /// Create a server backed by the Subscan client described in `config`.
    pub fn from_config(config: Config) -> crate::core::Result<Self> {
        let client = SubscanClient::new(&config.explorer)?;
        let registry = ToolRegistry::new(Arc::new(client));
        Ok(Self::new(config, registry))
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.name().into(),
                version: self.version().into(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
