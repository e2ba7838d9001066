//! Chat message and completion types.

use serde::{Deserialize, Serialize};

/// Role of a chat message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One conversational turn to be submitted to a chat channel.
///
/// A batch run builds one user message per successfully loaded prompt
/// file; `source` keeps the originating file name so completions stay
/// attributable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author role
    pub role: ChatRole,

    /// Message text
    pub text: String,

    /// Originating prompt file name, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ChatMessage {
    /// Create a user-role message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            source: None,
        }
    }

    /// Attach the originating file name.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// A model completion for one submitted message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    /// The generated text
    pub content: String,

    /// Model that generated the completion
    pub model: String,

    /// Token usage statistics
    #[serde(default)]
    pub usage: CompletionUsage,
}

/// Token usage statistics.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CompletionUsage {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_tokens: u32,

    /// Tokens in the completion
    #[serde(default)]
    pub completion_tokens: u32,

    /// Total tokens used
    #[serde(default)]
    pub total_tokens: u32,
}

impl CompletionUsage {
    /// Create usage stats from prompt and completion token counts.
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let message = ChatMessage::user("hello").with_source("a.txt");
        assert_eq!(message.role, ChatRole::User);
        assert_eq!(message.text, "hello");
        assert_eq!(message.source.as_deref(), Some("a.txt"));
    }

    #[test]
    fn test_usage_totals() {
        let usage = CompletionUsage::new(10, 5);
        assert_eq!(usage.total_tokens, 15);
    }
}
