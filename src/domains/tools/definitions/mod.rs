//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod account;
pub mod chain;
pub mod common;

pub use account::{GetAccountBalanceTool, GetAccountInfoTool, GetAccountTransactionsTool};
pub use chain::{GetBlockTool, GetTransactionTool};
