//! Explorer-specific error types.

use thiserror::Error;

/// Result type for explorer API calls.
pub type ExplorerResult<T> = Result<T, ExplorerError>;

/// Reasons an explorer request produced no usable response body.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// A required setting was not provided.
    #[error("Explorer API is not configured: {0} is not set")]
    MissingConfig(&'static str),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never completed (connection refused, DNS, reset...).
    #[error("Request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The explorer answered with a non-success status.
    #[error("{endpoint} responded with HTTP status {status}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    /// The response body was not valid JSON.
    #[error("Invalid JSON body from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ExplorerError {
    /// Create a request error.
    pub fn request(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Request {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Create a status error.
    pub fn status(endpoint: impl Into<String>, status: reqwest::StatusCode) -> Self {
        Self::Status {
            endpoint: endpoint.into(),
            status,
        }
    }

    /// Create a decode error.
    pub fn decode(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            source,
        }
    }
}

/// Why a tool could not obtain a usable payload from an explorer response.
///
/// Each variant is a separate failure category: the request itself failed,
/// the explorer answered without a `data` payload, or the payload did not
/// match the expected shape.
#[derive(Debug, Error)]
pub enum LookupFailure {
    #[error(transparent)]
    Upstream(#[from] ExplorerError),

    #[error("Response carried no data payload (code: {code:?}, message: {message:?})")]
    MissingPayload {
        code: Option<i64>,
        message: Option<String>,
    },

    #[error("Payload does not match the expected schema: {0}")]
    Schema(#[from] serde_json::Error),
}
