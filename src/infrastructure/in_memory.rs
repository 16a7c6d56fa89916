use crate::domain::ports::{Endpoint, Gateway};
use crate::error::{IyzipayError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

/// A scripted gateway that never leaves the process.
///
/// Queued replies are handed out first, oldest first, whatever the endpoint.
/// Once the queue is empty, the per-endpoint reply is used. Every call is
/// recorded in order so tests can assert on the exact bodies the client produced.
/// `Clone` shares the underlying script and call log.
#[derive(Default, Clone)]
pub struct InMemoryGateway {
    replies: Arc<RwLock<HashMap<Endpoint, Value>>>,
    queue: Arc<RwLock<VecDeque<Value>>>,
    calls: Arc<RwLock<Vec<(Endpoint, Value)>>>,
}

impl InMemoryGateway {
    /// Creates a gateway with no scripted replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reply returned for every call to `endpoint`.
    pub async fn respond(&self, endpoint: Endpoint, reply: Value) {
        let mut replies = self.replies.write().await;
        replies.insert(endpoint, reply);
    }

    /// Queues a one-shot reply for the next call.
    pub async fn enqueue(&self, reply: Value) {
        self.queue.write().await.push_back(reply);
    }

    /// Every call received so far, oldest first.
    pub async fn calls(&self) -> Vec<(Endpoint, Value)> {
        let calls = self.calls.read().await;
        calls.clone()
    }
}

#[async_trait]
impl Gateway for InMemoryGateway {
    async fn call(&self, endpoint: Endpoint, body: Value) -> Result<Value> {
        self.calls.write().await.push((endpoint, body));
        if let Some(reply) = self.queue.write().await.pop_front() {
            return Ok(reply);
        }
        let replies = self.replies.read().await;
        replies.get(&endpoint).cloned().ok_or_else(|| {
            IyzipayError::UnexpectedResponse {
                status: 404,
                body: format!("no scripted reply for {}", endpoint),
            }
        })
    }
}
