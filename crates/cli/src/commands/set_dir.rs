//! Set-dir command handler.
//!
//! The directory-picker collaborator of the batch runner: validates the
//! chosen directory and persists it as `promptDirectory`. On any
//! validation failure the configuration is left unchanged.

use clap::Args;
use promptis_core::{config::AppConfig, AppError, AppResult};
use std::path::PathBuf;

/// Select the directory containing prompt files
#[derive(Args, Debug)]
pub struct SetDirCommand {
    /// Directory containing prompt files
    pub dir: PathBuf,
}

impl SetDirCommand {
    /// Execute the set-dir command.
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        // Canonicalize so the stored value is always absolute and existing
        let dir = std::fs::canonicalize(&self.dir).map_err(|e| {
            AppError::Config(format!("Invalid prompt directory {:?}: {}", self.dir, e))
        })?;

        config.write_prompt_directory(&dir)?;
        println!("Selected folder: {}", dir.display());
        Ok(())
    }
}
