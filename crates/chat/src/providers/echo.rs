//! Echo channel for testing and offline development.

use crate::channel::ChatChannel;
use crate::message::{ChatMessage, Completion};
use promptis_core::AppResult;

/// Channel that deterministically echoes each message's text back.
///
/// No network, no state. Useful for exercising the batch executor's
/// submission path end to end without a model behind it.
#[derive(Debug, Default)]
pub struct EchoChannel;

impl EchoChannel {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ChatChannel for EchoChannel {
    fn channel_name(&self) -> &str {
        "echo"
    }

    async fn complete(&self, message: &ChatMessage) -> AppResult<Completion> {
        Ok(Completion {
            content: message.text.clone(),
            model: "echo".to_string(),
            usage: Default::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_returns_message_text() {
        let channel = EchoChannel::new();
        let completion = channel.complete(&ChatMessage::user("hello")).await.unwrap();
        assert_eq!(completion.content, "hello");
        assert_eq!(completion.model, "echo");
    }

    #[tokio::test]
    async fn test_echo_submit_preserves_order() {
        let channel = EchoChannel::new();
        let messages = vec![ChatMessage::user("one"), ChatMessage::user("two")];

        let results = channel.submit(&messages).await;
        let contents: Vec<String> = results
            .into_iter()
            .map(|r| r.unwrap().content)
            .collect();
        assert_eq!(contents, vec!["one", "two"]);
    }
}
