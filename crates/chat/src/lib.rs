//! Chat integration crate for the Promptis CLI.
//!
//! This crate provides everything that faces the conversational side of
//! Promptis:
//! - The `ChatChannel` port: submit ordered messages, receive ordered
//!   per-message completions with failures isolated per message
//! - Channel providers (Ollama, plus a deterministic echo channel)
//! - The chat protocol handler, the per-turn request/response surface
//!
//! # Example
//! ```no_run
//! use promptis_chat::{ChatChannel, ChatMessage, providers::OllamaChannel};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let channel = OllamaChannel::new("llama3.2");
//! let message = ChatMessage::user("Hello, world!");
//! let completion = channel.complete(&message).await?;
//! println!("{}", completion.content);
//! # Ok(())
//! # }
//! ```

pub mod channel;
pub mod factory;
pub mod handler;
pub mod message;
pub mod providers;
pub mod request;

// Re-export main types
pub use channel::ChatChannel;
pub use factory::create_channel;
pub use handler::{ChatHandler, PARTICIPANT_ID};
pub use message::{ChatMessage, ChatRole, Completion, CompletionUsage};
pub use request::{ChatReference, ChatRequest, ChatResult, ChatTurn, FILE_REFERENCE_ID};
