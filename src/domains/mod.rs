//! Domains module containing business logic organized by bounded contexts.
//!
//! - **explorer**: upstream payload shapes and the Subscan client
//! - **tools**: MCP tools built on top of the explorer

pub mod explorer;
pub mod tools;
