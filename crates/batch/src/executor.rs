//! The batch executor.
//!
//! Drives one batch run: scan once, then load each file strictly
//! sequentially — every load is awaited before the next file starts, so
//! reports arrive in scan order and each outcome is attributable — and
//! finally submit the constructed messages through the chat channel, if
//! one is wired.

use crate::report::Reporter;
use promptis_chat::{ChatChannel, ChatMessage};
use promptis_core::{AppError, AppResult};
use promptis_prompt::{load_prompt, scan_prompt_dir};
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Options for one batch run.
///
/// Configuration is handed in explicitly at invocation time; the
/// executor never consults ambient global state.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Directory containing prompt files; `None` or empty means not configured
    pub prompt_dir: Option<PathBuf>,
}

/// Outcome counts for one batch run.
///
/// Two runs against an unchanged directory produce equal summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files the scanner discovered
    pub discovered: usize,

    /// Files whose content loaded successfully
    pub loaded: usize,

    /// Files whose load failed
    pub load_failures: usize,

    /// Messages the channel completed
    pub completions: usize,

    /// Messages the channel failed on
    pub completion_failures: usize,
}

/// Sequential prompt-file batch executor.
pub struct BatchExecutor {
    reporter: Arc<dyn Reporter>,
    channel: Option<Arc<dyn ChatChannel>>,
    cancel: CancellationToken,
}

impl BatchExecutor {
    pub fn new(reporter: Arc<dyn Reporter>) -> Self {
        Self {
            reporter,
            channel: None,
            cancel: CancellationToken::new(),
        }
    }

    /// Wire a chat channel; without one the run stops after the load phase.
    pub fn with_channel(mut self, channel: Arc<dyn ChatChannel>) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Use an externally owned cancellation token.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Execute one batch run.
    ///
    /// Terminates before any filesystem access when the prompt directory
    /// is not configured, and after reporting when the scan fails or
    /// finds nothing. A single file's load failure is reported and the
    /// remaining files are still attempted.
    pub async fn run(&self, options: &RunOptions) -> AppResult<BatchSummary> {
        let dir = match options
            .prompt_dir
            .as_deref()
            .filter(|d| !d.as_os_str().is_empty())
        {
            Some(dir) => dir,
            None => {
                self.reporter.error("Prompt directory is not set");
                return Err(AppError::Config("Prompt directory is not set".to_string()));
            }
        };

        let files = match scan_prompt_dir(dir) {
            Ok(files) => files,
            Err(e) => {
                self.reporter.error(&e.to_string());
                return Err(e);
            }
        };

        if files.is_empty() {
            self.reporter
                .info(&format!("No prompt files found in {}", dir.display()));
            return Ok(BatchSummary::default());
        }

        self.reporter
            .info(&format!("Found {} files in {}", files.len(), dir.display()));

        let mut summary = BatchSummary {
            discovered: files.len(),
            ..BatchSummary::default()
        };
        let mut messages = Vec::new();

        for file in &files {
            if self.cancel.is_cancelled() {
                self.reporter.info("Batch run cancelled");
                return Ok(summary);
            }

            self.reporter.info(&format!("Running {}", file.name));

            // Awaited before the next file starts; one load in flight at a time
            match load_prompt(file).await {
                Ok(content) => {
                    self.reporter
                        .info(&format!("Content of {}: {}", file.name, content.text));
                    messages.push(ChatMessage::user(content.text).with_source(&file.name));
                    summary.loaded += 1;
                }
                Err(e) => {
                    self.reporter.error(&e.to_string());
                    summary.load_failures += 1;
                }
            }
        }

        if let Some(channel) = &self.channel {
            if !messages.is_empty() && !self.cancel.is_cancelled() {
                self.submit(channel.as_ref(), &messages, &mut summary).await;
            }
        }

        tracing::info!(
            "Batch run complete: {} discovered, {} loaded, {} load failures",
            summary.discovered,
            summary.loaded,
            summary.load_failures
        );

        Ok(summary)
    }

    /// Submit the loaded messages and report per-message outcomes.
    ///
    /// The channel returns one result per message in input order; a
    /// failed completion is reported against its source file and never
    /// aborts the rest.
    async fn submit(
        &self,
        channel: &dyn ChatChannel,
        messages: &[ChatMessage],
        summary: &mut BatchSummary,
    ) {
        self.reporter.info(&format!(
            "Submitting {} messages to {}",
            messages.len(),
            channel.channel_name()
        ));

        let results = channel.submit(messages).await;

        for (message, result) in messages.iter().zip(results) {
            let source = message.source.as_deref().unwrap_or("prompt");
            match result {
                Ok(completion) => {
                    self.reporter
                        .info(&format!("Response for {}: {}", source, completion.content));
                    summary.completions += 1;
                }
                Err(e) => {
                    self.reporter
                        .error(&format!("Failed to complete {}: {}", source, e));
                    summary.completion_failures += 1;
                }
            }
        }
    }
}
