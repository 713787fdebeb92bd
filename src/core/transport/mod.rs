//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output only. The transport
//! owns the connection lifecycle and delegates message handling to
//! [`McpServer`](crate::core::McpServer).

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
