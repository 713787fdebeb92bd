//! Vara explorer MCP server library.
//!
//! Exposes Vara network explorer queries (blocks, extrinsics, accounts) as
//! Model Context Protocol tools backed by the Subscan API.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and its transport
//! - **domains**: business logic organized by bounded contexts
//!   - **explorer**: Subscan payload schemas and HTTP client
//!   - **tools**: the MCP tools and their registry
//!
//! # Example
//!
//! ```rust,no_run
//! use vara_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let server = McpServer::from_config(Config::from_env())?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
