//! Error types and handling for the MCP server.
//!
//! A unified error type for everything that can stop the server. Failed
//! lookups are not errors here: they reach the caller as ordinary results.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the explorer client.
    #[error("Explorer error: {0}")]
    Explorer(#[from] crate::domains::explorer::ExplorerError),

    /// Error from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
