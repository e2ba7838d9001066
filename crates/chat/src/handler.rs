//! The chat protocol handler.
//!
//! Invoked once per user turn. The contract with the host is strict:
//! the handler never propagates an error (failures become a
//! failure-shaped [`ChatResult`]), and it must return promptly once the
//! supplied cancellation token fires, performing no further file or
//! network I/O.

use crate::request::{ChatRequest, ChatResult, ChatTurn};
use promptis_core::AppResult;
use promptis_prompt::{load_prompt, PromptFile};
use tokio_util::sync::CancellationToken;

/// Stable participant identifier registered with the host chat surface.
pub const PARTICIPANT_ID: &str = "promptis.promptis";

/// Stateless per-turn request handler.
#[derive(Debug, Default)]
pub struct ChatHandler;

impl ChatHandler {
    pub fn new() -> Self {
        Self
    }

    /// Handle one user turn.
    ///
    /// Echoes a diagnostic of what was received and resolves each file
    /// reference to its content through the prompt loader, with
    /// per-reference failures isolated. `history` is accepted per the
    /// protocol contract but not consumed yet.
    pub async fn handle(
        &self,
        request: &ChatRequest,
        _history: &[ChatTurn],
        cancel: &CancellationToken,
    ) -> ChatResult {
        match self.try_handle(request, cancel).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Chat handler failed: {}", e);
                ChatResult::failure(e.to_string())
            }
        }
    }

    async fn try_handle(
        &self,
        request: &ChatRequest,
        cancel: &CancellationToken,
    ) -> AppResult<ChatResult> {
        if cancel.is_cancelled() {
            return Ok(ChatResult::cancelled());
        }

        let echo = format!(
            "Received message: [{}], [{}], [{}]",
            request.command.as_deref().unwrap_or(""),
            request.prompt,
            serde_json::to_string(&request.references)?
        );
        tracing::debug!("{}", echo);

        let mut details = echo;

        for reference in &request.references {
            if cancel.is_cancelled() {
                return Ok(ChatResult::cancelled());
            }

            let Some(path) = reference.file_path() else {
                continue;
            };

            let Some(file) = PromptFile::from_path(&path) else {
                details.push_str(&format!(
                    "\nFailed to resolve {}: not a file path",
                    reference.name
                ));
                continue;
            };

            match load_prompt(&file).await {
                Ok(content) => {
                    details.push_str(&format!(
                        "\nResolved {}: {}",
                        reference.name, content.text
                    ));
                }
                Err(e) => {
                    details.push_str(&format!("\nFailed to resolve {}: {}", reference.name, e));
                }
            }
        }

        Ok(ChatResult::with_details(details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ChatReference;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_empty_request_returns_well_formed_result() {
        let handler = ChatHandler::new();
        let request = ChatRequest::new("");
        let result = handler
            .handle(&request, &[], &CancellationToken::new())
            .await;

        assert!(!result.is_failure());
        assert!(result.details.unwrap().starts_with("Received message:"));
    }

    #[tokio::test]
    async fn test_pre_cancelled_returns_promptly() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.txt");
        fs::write(&path, "hello").unwrap();

        let mut request = ChatRequest::new("look at #file:a.txt");
        request
            .references
            .push(ChatReference::file("file:a.txt", [8, 19], &path));

        let cancel = CancellationToken::new();
        cancel.cancel();

        let handler = ChatHandler::new();
        let result = handler.handle(&request, &[], &cancel).await;

        // No reference was resolved; the turn was abandoned
        assert!(result.is_failure());
        assert!(result.error.unwrap().contains("cancelled"));
    }

    #[tokio::test]
    async fn test_resolves_file_references() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.txt");
        fs::write(&path, "hello").unwrap();

        let mut request = ChatRequest::new("look at #file:a.txt");
        request.command = Some("review".to_string());
        request
            .references
            .push(ChatReference::file("file:a.txt", [8, 19], &path));

        let handler = ChatHandler::new();
        let result = handler
            .handle(&request, &[], &CancellationToken::new())
            .await;

        assert!(!result.is_failure());
        let details = result.details.unwrap();
        assert!(details.contains("[review]"));
        assert!(details.contains("Resolved file:a.txt: hello"));
    }

    #[tokio::test]
    async fn test_missing_reference_is_isolated() {
        let temp = TempDir::new().unwrap();
        let good = temp.path().join("good.txt");
        fs::write(&good, "fine").unwrap();
        let missing = temp.path().join("missing.txt");

        let mut request = ChatRequest::new("two refs");
        request
            .references
            .push(ChatReference::file("file:missing.txt", [0, 0], &missing));
        request
            .references
            .push(ChatReference::file("file:good.txt", [0, 0], &good));

        let handler = ChatHandler::new();
        let result = handler
            .handle(&request, &[], &CancellationToken::new())
            .await;

        // A failed reference never fails the turn or its siblings
        assert!(!result.is_failure());
        let details = result.details.unwrap();
        assert!(details.contains("Failed to resolve file:missing.txt"));
        assert!(details.contains("Resolved file:good.txt: fine"));
    }
}
