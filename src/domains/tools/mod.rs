//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Each tool answers one explorer query and returns a single text item.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - `ExplorerTool` trait: metadata, routing and dispatch
//! - `router.rs` - ToolRouter builder for the stdio transport
//! - `registry.rs` - Central tool registry and dispatch by name
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with its params and `ExplorerTool` impl
//! 2. Export it in `definitions/mod.rs`
//! 3. Add its route in `router.rs` and its name in `registry.rs`

pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;

pub use error::ToolError;
pub use handlers::ExplorerTool;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
