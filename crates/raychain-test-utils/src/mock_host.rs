// SPDX-FileCopyrightText: 2026 Raychain Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock host AI-ask capability for deterministic testing.
//!
//! `MockHost` implements `AiAsk` with pre-configured replies and
//! records every call it receives, enabling assertions on call count,
//! order, and the options each request carried.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use raychain_core::RaychainError;
use raychain_raycast::{AiAsk, AskOptions};

/// A scripted outcome for one host ask call.
#[derive(Debug, Clone)]
pub enum HostReply {
    /// Resolve with the given completion text.
    Text(String),
    /// Resolve with no output (the host answered nothing).
    Absent,
    /// Fail with a host error carrying the given message.
    Failure(String),
}

/// One recorded host call: the prompt and the options it carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub prompt: String,
    pub options: AskOptions,
}

/// A mock host capability that replays pre-configured replies.
///
/// Replies are popped from a FIFO queue. When the queue is empty, a
/// default "mock response" text is returned. Every call is recorded
/// in arrival order. Clones share the same queue and call log, so a
/// test can keep a handle for assertions after handing the host to an
/// adapter.
#[derive(Clone)]
pub struct MockHost {
    replies: Arc<Mutex<VecDeque<HostReply>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockHost {
    /// Create a mock host with an empty reply queue.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock host that answers each call with the next text.
    pub fn with_responses(responses: Vec<String>) -> Self {
        Self::with_replies(responses.into_iter().map(HostReply::Text).collect())
    }

    /// Create a mock host pre-loaded with the given replies.
    pub fn with_replies(replies: Vec<HostReply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::from(replies))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a reply to the end of the queue.
    pub async fn add_reply(&self, reply: HostReply) {
        self.replies.lock().await.push_back(reply);
    }

    /// The calls received so far, in arrival order.
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    /// Number of calls received so far.
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    /// Pop the next reply, or return the default.
    async fn next_reply(&self) -> HostReply {
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| HostReply::Text("mock response".to_string()))
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiAsk for MockHost {
    async fn ask(
        &self,
        prompt: &str,
        options: &AskOptions,
    ) -> Result<Option<String>, RaychainError> {
        self.calls.lock().await.push(RecordedCall {
            prompt: prompt.to_string(),
            options: *options,
        });

        match self.next_reply().await {
            HostReply::Text(text) => Ok(Some(text)),
            HostReply::Absent => Ok(None),
            HostReply::Failure(message) => Err(RaychainError::Host {
                message,
                source: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> AskOptions {
        AskOptions::default()
    }

    #[tokio::test]
    async fn default_response_when_queue_empty() {
        let host = MockHost::new();
        let reply = host.ask("hello", &options()).await.unwrap();
        assert_eq!(reply.as_deref(), Some("mock response"));
    }

    #[tokio::test]
    async fn queued_replies_returned_in_order() {
        let host = MockHost::with_responses(vec!["first".into(), "second".into()]);
        assert_eq!(
            host.ask("a", &options()).await.unwrap().as_deref(),
            Some("first")
        );
        assert_eq!(
            host.ask("b", &options()).await.unwrap().as_deref(),
            Some("second")
        );
        // Queue exhausted, falls back to default
        assert_eq!(
            host.ask("c", &options()).await.unwrap().as_deref(),
            Some("mock response")
        );
    }

    #[tokio::test]
    async fn absent_reply_resolves_to_none() {
        let host = MockHost::with_replies(vec![HostReply::Absent]);
        assert_eq!(host.ask("a", &options()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn failure_reply_surfaces_host_error() {
        let host = MockHost::with_replies(vec![HostReply::Failure("no entitlement".into())]);
        let err = host.ask("a", &options()).await.unwrap_err();
        assert!(err.to_string().contains("no entitlement"));
    }

    #[tokio::test]
    async fn calls_are_recorded_in_arrival_order() {
        let host = MockHost::new();
        host.ask("one", &options()).await.unwrap();
        host.ask("two", &options()).await.unwrap();

        let calls = host.calls().await;
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].prompt, "one");
        assert_eq!(calls[1].prompt, "two");
    }
}
