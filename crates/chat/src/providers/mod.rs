//! Chat channel provider implementations.

pub mod echo;
pub mod ollama;

pub use echo::EchoChannel;
pub use ollama::OllamaChannel;
