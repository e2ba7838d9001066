//! The chat channel port.
//!
//! A `ChatChannel` is the extension point a batch run submits its
//! constructed messages through. Providers (Ollama, echo, future hosted
//! APIs) implement `complete`; `submit` drives a whole batch through it
//! with the ordering and isolation guarantees the executor relies on.

use crate::message::{ChatMessage, Completion};
use promptis_core::AppResult;

/// Trait for chat channel providers.
///
/// Implementations must be safe to share across tasks; the batch
/// executor holds one behind an `Arc`.
#[async_trait::async_trait]
pub trait ChatChannel: Send + Sync {
    /// Get the provider name (e.g., "ollama").
    fn channel_name(&self) -> &str;

    /// Complete a single message.
    async fn complete(&self, message: &ChatMessage) -> AppResult<Completion>;

    /// Submit an ordered batch of messages.
    ///
    /// Returns exactly one result per input message, in input order.
    /// Messages are completed strictly sequentially, and a failure for
    /// one message never prevents the remaining messages from being
    /// attempted.
    async fn submit(&self, messages: &[ChatMessage]) -> Vec<AppResult<Completion>> {
        let mut results = Vec::with_capacity(messages.len());
        for message in messages {
            results.push(self.complete(message).await);
        }
        results
    }
}
