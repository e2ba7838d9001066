//! Run command handler.
//!
//! Triggers one batch run over the configured prompt directory.

use clap::Args;
use promptis_batch::{BatchExecutor, ConsoleReporter, Reporter, RunOptions};
use promptis_chat::create_channel;
use promptis_core::{config::AppConfig, AppResult};
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Run all prompt files under the configured directory
#[derive(Args, Debug)]
pub struct RunCommand {
    /// Prompt directory override for this run
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Load and report files without submitting to the chat channel
    #[arg(long)]
    pub no_submit: bool,
}

impl RunCommand {
    /// Execute the run command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing run command");

        let options = RunOptions {
            prompt_dir: self.dir.clone().or_else(|| config.prompt_dir.clone()),
        };

        let reporter: Arc<dyn Reporter> = Arc::new(ConsoleReporter);
        let mut executor = BatchExecutor::new(reporter);

        if !self.no_submit {
            let channel = create_channel(
                &config.provider,
                &config.model,
                config.endpoint.as_deref(),
                config.api_key.as_deref(),
            )?;
            executor = executor.with_channel(channel);
        }

        // Ctrl-C cancels cooperatively between files
        let cancel = CancellationToken::new();
        let signal_cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("Interrupt received, cancelling batch run");
                signal_cancel.cancel();
            }
        });
        executor = executor.with_cancellation(cancel);

        let summary = executor.run(&options).await?;

        tracing::info!(
            "Batch summary: {} discovered, {} loaded, {} load failures, {} completions, {} completion failures",
            summary.discovered,
            summary.loaded,
            summary.load_failures,
            summary.completions,
            summary.completion_failures
        );

        Ok(())
    }
}
