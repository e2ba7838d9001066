//! Chat command handler.
//!
//! Builds a single-turn chat request (free text plus optional file
//! references) and invokes the participant handler once, printing the
//! structured result.

use clap::Args;
use promptis_chat::{ChatHandler, ChatReference, ChatRequest, PARTICIPANT_ID};
use promptis_core::{config::AppConfig, AppResult};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

/// Send one chat turn to the participant
#[derive(Args, Debug)]
pub struct ChatCommand {
    /// Free-form prompt text
    pub prompt: Option<String>,

    /// Attach a file as a typed reference (repeatable)
    #[arg(short, long = "file")]
    pub files: Vec<PathBuf>,

    /// Command name selecting a participant sub-behavior
    #[arg(long)]
    pub command: Option<String>,
}

impl ChatCommand {
    /// Execute the chat command.
    pub async fn execute(&self, _config: &AppConfig) -> AppResult<()> {
        tracing::info!("Invoking chat participant {}", PARTICIPANT_ID);

        let request = self.build_request();

        // Ctrl-C cancels the in-flight turn
        let cancel = CancellationToken::new();
        let signal_cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                signal_cancel.cancel();
            }
        });

        let handler = ChatHandler::new();
        let result = handler.handle(&request, &[], &cancel).await;

        println!("{}", serde_json::to_string_pretty(&result)?);
        Ok(())
    }

    /// Assemble the ChatRequest, appending one reference marker per file.
    ///
    /// Each `--file` contributes a `#file:{name}` marker to the prompt
    /// text; the reference's range covers exactly that marker's span.
    fn build_request(&self) -> ChatRequest {
        let mut prompt = self.prompt.clone().unwrap_or_default();
        let mut references = Vec::new();

        for path in &self.files {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned());
            let display = format!("file:{}", name);
            let marker = format!("#{}", display);

            if !prompt.is_empty() {
                prompt.push(' ');
            }
            let start = prompt.chars().count();
            prompt.push_str(&marker);
            let end = start + marker.chars().count();

            references.push(ChatReference::file(display, [start, end], path));
        }

        ChatRequest {
            command: self.command.clone(),
            prompt,
            references,
        }
    }
}
