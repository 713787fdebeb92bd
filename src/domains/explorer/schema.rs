//! Upstream payload shapes returned by the Subscan explorer API.
//!
//! Every struct here ignores fields it does not declare, so new upstream
//! fields never break deserialization. Fields the explorer always sends are
//! plain values; everything else is an `Option` or carries a serde default.
//! Array fields stay `Option<Vec<_>>`: an absent array is not an empty one.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

// ============================================================================
// Envelope
// ============================================================================

/// Outer wrapper shared by every explorer response.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub code: Option<i64>,
    pub message: Option<String>,
    pub generated_at: Option<i64>,

    /// `None` when the field is missing or `null`.
    pub data: Option<T>,
}

// ============================================================================
// Decimal amounts
// ============================================================================

/// An arbitrary-precision amount kept in its decimal string form.
///
/// The explorer sends balances and fees either as JSON strings or as JSON
/// integers depending on the endpoint. Both are accepted; floats are not,
/// because they would already have lost precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DecimalString(String);

impl DecimalString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for DecimalString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for DecimalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DecimalString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DecimalVisitor;

        impl serde::de::Visitor<'_> for DecimalVisitor {
            type Value = DecimalString;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal string or an integer")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(DecimalString(v.to_string()))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(DecimalString(v.to_string()))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(DecimalString(v.to_string()))
            }
        }

        deserializer.deserialize_any(DecimalVisitor)
    }
}

// ============================================================================
// Identity / display
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Judgement {
    pub index: i64,
    pub judgement: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EvmAccountDisplay {
    pub contract_name: Option<String>,
    pub verify_source: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MerkleTag {
    pub address_type: Option<String>,
    pub tag_name: Option<String>,
    pub tag_subtype: Option<String>,
    pub tag_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ParentIdentity {
    pub address: Option<String>,
    pub display: Option<String>,
    pub identity: Option<bool>,
    pub sub_symbol: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PeopleIdentity {
    pub display: Option<String>,
    pub identity: Option<bool>,
    pub judgements: Option<Vec<Judgement>>,
    pub parent: Option<ParentIdentity>,
}

/// How the explorer labels an account next to blocks and extrinsics.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AccountDisplay {
    pub account_index: Option<String>,
    pub address: Option<String>,
    pub display: Option<String>,
    pub evm_address: Option<String>,
    pub evm_contract: Option<EvmAccountDisplay>,
    #[serde(default)]
    pub identity: bool,
    pub judgements: Option<Vec<Judgement>>,
    pub merkle: Option<MerkleTag>,
    pub parent: Option<ParentIdentity>,
    pub people: Option<PeopleIdentity>,
}

// ============================================================================
// Chain records
// ============================================================================

/// A single extrinsic (transaction).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtrinsicRecord {
    pub extrinsic_hash: String,
    pub block_num: u64,
    pub block_timestamp: i64,
    pub call_module: String,
    pub call_module_function: String,
    pub success: bool,
    pub fee: DecimalString,
    pub account_id: String,
    #[serde(default)]
    pub nonce: u64,

    pub extrinsic_index: Option<String>,
    pub account_index: Option<String>,
    pub account_display: Option<AccountDisplay>,
    pub fee_used: Option<DecimalString>,
    pub finalized: Option<bool>,
    pub from_hex: Option<String>,
    pub signature: Option<String>,

    /// Call arguments, normally a JSON-encoded string. Kept loose so an
    /// unexpected shape only loses this field.
    pub params: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventRecord {
    pub event_index: String,
    pub module_id: String,
    pub event_id: String,
    pub block_num: Option<u64>,
    pub block_timestamp: Option<i64>,
    pub event_idx: Option<i64>,
    pub extrinsic_hash: Option<String>,
    pub extrinsic_idx: Option<i64>,
    pub finalized: Option<bool>,
    pub params: Option<Value>,
    pub phase: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogRecord {
    pub log_index: String,
    pub log_type: String,
    pub block_num: Option<u64>,
    pub data: Option<String>,
    pub engine: Option<String>,
    pub id: Option<i64>,
}

/// A block with optional embedded extrinsics, events and logs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlockRecord {
    pub block_num: u64,
    pub hash: String,

    pub parent_hash: Option<String>,
    pub block_timestamp: Option<i64>,
    #[serde(default)]
    pub finalized: bool,
    #[serde(default)]
    pub extrinsics_count: u64,
    #[serde(default)]
    pub event_count: u64,
    pub spec_version: Option<u64>,
    pub state_root: Option<String>,
    pub extrinsics_root: Option<String>,
    pub validator: Option<String>,
    pub account_display: Option<AccountDisplay>,

    pub extrinsics: Option<Vec<ExtrinsicRecord>>,
    pub events: Option<Vec<EventRecord>>,
    pub logs: Option<Vec<LogRecord>>,
}

// ============================================================================
// Accounts
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenBalance {
    pub amount: DecimalString,
    pub decimals: u32,
    pub symbol: String,
    pub token: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Account summary as returned by `/api/scan/account`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccountRecord {
    pub address: String,
    pub display: Option<String>,
    pub identity: Option<bool>,
    pub balance: Option<DecimalString>,
    pub count_extrinsics: Option<u64>,
    pub count_txs: Option<u64>,
    pub nonce: Option<u64>,
    pub judgements: Option<Vec<Judgement>>,
    pub balances: Option<Vec<TokenBalance>>,
}

/// Token holdings as returned by `/api/scan/account/tokens`.
///
/// The explorer groups holdings by token category and the grouping differs
/// between networks, so the payload only has to be a JSON object.
pub type AccountBalance = serde_json::Map<String, Value>;

/// One page of an account's extrinsics.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccountExtrinsicsPage {
    /// Total number of extrinsics across all pages.
    pub count: u64,

    /// Upstream order, newest first when requested with `order: desc`.
    /// The explorer sends `null` for an account with no history.
    #[serde(deserialize_with = "null_as_empty")]
    pub extrinsics: Vec<ExtrinsicRecord>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
