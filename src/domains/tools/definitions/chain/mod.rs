//! Chain data tools: blocks and extrinsics.

pub mod block;
pub mod transaction;

pub use block::{GetBlockParams, GetBlockTool};
pub use transaction::{GetTransactionParams, GetTransactionTool};
