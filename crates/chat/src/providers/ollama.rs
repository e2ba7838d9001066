//! Ollama chat channel implementation.
//!
//! This module provides integration with Ollama, a local LLM runtime.
//! Ollama API: https://github.com/ollama/ollama/blob/main/docs/api.md

use crate::channel::ChatChannel;
use crate::message::{ChatMessage, Completion, CompletionUsage};
use promptis_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Ollama API request format.
#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
}

/// Ollama API response format.
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    model: String,
    response: String,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}

/// Ollama chat channel.
pub struct OllamaChannel {
    /// Base URL for the Ollama API
    base_url: String,

    /// Model to complete with
    model: String,

    /// HTTP client
    client: reqwest::Client,
}

impl OllamaChannel {
    /// Create a new Ollama channel with the default endpoint.
    ///
    /// Default URL: http://localhost:11434
    pub fn new(model: impl Into<String>) -> Self {
        Self::with_base_url(model, "http://localhost:11434")
    }

    /// Create a new Ollama channel with a custom base URL.
    pub fn with_base_url(model: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }

    fn to_ollama_request(&self, message: &ChatMessage) -> OllamaRequest {
        OllamaRequest {
            model: self.model.clone(),
            prompt: message.text.clone(),
            stream: false,
        }
    }

    fn convert_response(&self, response: OllamaResponse) -> Completion {
        let usage = CompletionUsage::new(
            response.prompt_eval_count.unwrap_or(0),
            response.eval_count.unwrap_or(0),
        );

        Completion {
            content: response.response,
            model: response.model,
            usage,
        }
    }
}

#[async_trait::async_trait]
impl ChatChannel for OllamaChannel {
    fn channel_name(&self) -> &str {
        "ollama"
    }

    async fn complete(&self, message: &ChatMessage) -> AppResult<Completion> {
        let url = format!("{}/api/generate", self.base_url);
        let body = self.to_ollama_request(message);

        tracing::debug!("Submitting message to Ollama: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Chat(format!("Ollama request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Chat(format!(
                "Ollama returned {}: {}",
                status, text
            )));
        }

        let ollama_response: OllamaResponse = response
            .json()
            .await
            .map_err(|e| AppError::Chat(format!("Failed to parse Ollama response: {}", e)))?;

        Ok(self.convert_response(ollama_response))
    }
}
