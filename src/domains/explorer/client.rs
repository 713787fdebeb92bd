//! Subscan HTTP client.
//!
//! Every operation issues exactly one `POST` with a JSON body and returns the
//! parsed body untyped. Failures are logged and returned as
//! [`ExplorerError`]; nothing is retried.

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, error, instrument};

use super::error::{ExplorerError, ExplorerResult};
use crate::core::config::ExplorerConfig;

const API_KEY_HEADER: &str = "X-API-Key";

// ============================================================================
// Requests
// ============================================================================

/// One explorer request: which resource to hit and with which body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerRequest<'a> {
    Block { block_num: u64 },
    Extrinsic { hash: &'a str },
    Account { address: &'a str },
    AccountTokens { address: &'a str },
    AccountExtrinsics { address: &'a str, page: u64, row: u32 },
}

impl ExplorerRequest<'_> {
    /// Resource path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Block { .. } => "/api/scan/block",
            Self::Extrinsic { .. } => "/api/scan/extrinsic",
            Self::Account { .. } => "/api/scan/account",
            Self::AccountTokens { .. } => "/api/scan/account/tokens",
            Self::AccountExtrinsics { .. } => "/api/scan/extrinsics",
        }
    }

    /// JSON request body.
    pub fn body(&self) -> Value {
        match *self {
            Self::Block { block_num } => json!({ "block_num": block_num }),
            Self::Extrinsic { hash } => json!({ "hash": hash }),
            Self::Account { address } | Self::AccountTokens { address } => {
                json!({ "address": address })
            }
            Self::AccountExtrinsics { address, page, row } => json!({
                "address": address,
                "page": page,
                "row": row,
                "order": "desc",
            }),
        }
    }
}

// ============================================================================
// API seam
// ============================================================================

/// The five explorer lookups the tools depend on.
#[async_trait]
pub trait ExplorerApi: Send + Sync {
    /// Send a single request and return the parsed response body.
    async fn send(&self, request: ExplorerRequest<'_>) -> ExplorerResult<Value>;

    async fn fetch_block(&self, block_num: u64) -> ExplorerResult<Value> {
        self.send(ExplorerRequest::Block { block_num }).await
    }

    async fn fetch_extrinsic(&self, hash: &str) -> ExplorerResult<Value> {
        self.send(ExplorerRequest::Extrinsic { hash }).await
    }

    async fn fetch_account(&self, address: &str) -> ExplorerResult<Value> {
        self.send(ExplorerRequest::Account { address }).await
    }

    async fn fetch_account_balance(&self, address: &str) -> ExplorerResult<Value> {
        self.send(ExplorerRequest::AccountTokens { address }).await
    }

    async fn fetch_account_extrinsics(
        &self,
        address: &str,
        page: u64,
        row: u32,
    ) -> ExplorerResult<Value> {
        self.send(ExplorerRequest::AccountExtrinsics { address, page, row })
            .await
    }
}

// ============================================================================
// Subscan implementation
// ============================================================================

/// [`ExplorerApi`] backed by the Subscan REST API.
#[derive(Clone)]
pub struct SubscanClient {
    http: reqwest::Client,
    base_url: Option<String>,
    api_key: Option<String>,
}

impl SubscanClient {
    /// Build a client. Missing settings are only reported when a request needs them.
    pub fn new(config: &ExplorerConfig) -> ExplorerResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ExplorerError::Client)?;

        Ok(Self {
            http,
            base_url: config
                .api_url
                .as_deref()
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
        })
    }

    fn endpoint(&self, path: &str) -> ExplorerResult<String> {
        let base = self
            .base_url
            .as_deref()
            .ok_or(ExplorerError::MissingConfig("SUBSCAN_API_URL"))?;
        Ok(format!("{base}{path}"))
    }

    async fn post(&self, request: &ExplorerRequest<'_>) -> ExplorerResult<Value> {
        let url = self.endpoint(request.path())?;
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ExplorerError::MissingConfig("API_KEY"))?;

        let body = request.body();
        debug!("POST {} {}", url, body);

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ExplorerError::request(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExplorerError::status(url, status));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ExplorerError::decode(url, e))
    }
}

#[async_trait]
impl ExplorerApi for SubscanClient {
    #[instrument(skip_all, fields(path = request.path()))]
    async fn send(&self, request: ExplorerRequest<'_>) -> ExplorerResult<Value> {
        let result = self.post(&request).await;
        if let Err(e) = &result {
            error!("Explorer request failed: {}", e);
        }
        result
    }
}
