//! Chat channel factory.
//!
//! Creates the channel implementation named by configuration, injecting
//! endpoint and secret material where the provider needs them.

use crate::channel::ChatChannel;
use crate::providers::{EchoChannel, OllamaChannel};
use promptis_core::{AppError, AppResult};
use std::sync::Arc;

/// Create a chat channel based on the provider name.
///
/// # Arguments
/// * `provider` - Provider identifier ("ollama", "echo", ...)
/// * `model` - Model identifier passed to the provider
/// * `endpoint` - Optional custom endpoint URL
/// * `api_key` - Optional API key (for providers that require it)
///
/// # Errors
/// Returns a configuration error for unknown providers and for known
/// providers that are not implemented yet.
pub fn create_channel(
    provider: &str,
    model: &str,
    endpoint: Option<&str>,
    api_key: Option<&str>,
) -> AppResult<Arc<dyn ChatChannel>> {
    match provider.to_lowercase().as_str() {
        "ollama" => {
            let base_url = endpoint.unwrap_or("http://localhost:11434");
            Ok(Arc::new(OllamaChannel::with_base_url(model, base_url)))
        }
        "echo" => Ok(Arc::new(EchoChannel::new())),
        "openai" => {
            if api_key.is_none() {
                return Err(AppError::Config(
                    "OpenAI provider requires an API key".to_string(),
                ));
            }
            Err(AppError::Config(
                "OpenAI provider not yet implemented".to_string(),
            ))
        }
        "claude" | "anthropic" => {
            if api_key.is_none() {
                return Err(AppError::Config(
                    "Claude provider requires an API key".to_string(),
                ));
            }
            Err(AppError::Config(
                "Claude provider not yet implemented".to_string(),
            ))
        }
        _ => Err(AppError::Config(format!("Unknown provider: {}", provider))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_ollama_channel() {
        let channel = create_channel("ollama", "llama3.2", None, None).unwrap();
        assert_eq!(channel.channel_name(), "ollama");
    }

    #[test]
    fn test_create_ollama_with_custom_endpoint() {
        let channel =
            create_channel("ollama", "llama3.2", Some("http://localhost:8080"), None);
        assert!(channel.is_ok());
    }

    #[test]
    fn test_create_echo_channel() {
        let channel = create_channel("echo", "unused", None, None).unwrap();
        assert_eq!(channel.channel_name(), "echo");
    }

    #[test]
    fn test_openai_requires_api_key() {
        match create_channel("openai", "gpt-4", None, None) {
            Err(err) => assert!(err.to_string().contains("requires an API key")),
            Ok(_) => panic!("Expected error for OpenAI without API key"),
        }
    }

    #[test]
    fn test_unknown_provider() {
        match create_channel("unknown", "m", None, None) {
            Err(err) => assert!(err.to_string().contains("Unknown provider")),
            Ok(_) => panic!("Expected error for unknown provider"),
        }
    }
}
