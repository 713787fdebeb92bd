//! Account tools: summary, token balances and extrinsic history.

pub mod balance;
pub mod info;
pub mod transactions;

pub use balance::{GetAccountBalanceParams, GetAccountBalanceTool};
pub use info::{GetAccountInfoParams, GetAccountInfoTool};
pub use transactions::{GetAccountTransactionsParams, GetAccountTransactionsTool};
