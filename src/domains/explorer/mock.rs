//! In-memory [`ExplorerApi`] double for tool tests.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::client::{ExplorerApi, ExplorerRequest};
use super::error::{ExplorerError, ExplorerResult};

/// Canned reply for every request.
#[derive(Debug, Clone)]
pub enum MockReply {
    Json(Value),
    Unavailable,
}

/// Returns the same reply for every call and records what was asked.
pub struct MockExplorer {
    reply: MockReply,
    calls: AtomicUsize,
    requests: Mutex<Vec<(&'static str, Value)>>,
}

impl MockExplorer {
    pub fn responding(body: Value) -> Self {
        Self::new(MockReply::Json(body))
    }

    pub fn unavailable() -> Self {
        Self::new(MockReply::Unavailable)
    }

    fn new(reply: MockReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(path, body)` of every request received so far.
    pub fn requests(&self) -> Vec<(&'static str, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExplorerApi for MockExplorer {
    async fn send(&self, request: ExplorerRequest<'_>) -> ExplorerResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((request.path(), request.body()));

        match &self.reply {
            MockReply::Json(body) => Ok(body.clone()),
            MockReply::Unavailable => Err(ExplorerError::status(
                request.path(),
                reqwest::StatusCode::SERVICE_UNAVAILABLE,
            )),
        }
    }
}
