//! Explorer domain module.
//!
//! Everything that talks to, or describes the data of, the upstream block
//! explorer (Subscan).
//!
//! ## Architecture
//!
//! - `schema.rs` - Upstream payload shapes
//! - `client.rs` - `ExplorerApi` seam and the Subscan HTTP client
//! - `payload.rs` - Envelope unwrapping and payload validation
//! - `error.rs` - Request and lookup failure types

mod client;
mod error;
mod payload;
pub mod schema;

#[cfg(test)]
pub mod mock;

pub use client::{ExplorerApi, ExplorerRequest, SubscanClient};
pub use error::{ExplorerError, ExplorerResult, LookupFailure};
pub use payload::{extract_payload, typed_payload, validate_payload};
