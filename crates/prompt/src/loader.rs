//! Asynchronous prompt-file loading.

use crate::types::{PromptContent, PromptFile};
use promptis_core::{AppError, AppResult};

/// Load the text content of one prompt file.
///
/// Reads the file at the descriptor's full path as UTF-8 text without
/// blocking the runtime. Failures (missing file, permission error,
/// invalid UTF-8) are returned as a prompt error naming the file, so a
/// batch run can attribute the failure and continue with its remaining
/// files.
pub async fn load_prompt(file: &PromptFile) -> AppResult<PromptContent> {
    let path = file.full_path();
    tracing::debug!("Loading prompt file: {}", path.display());

    let text = tokio::fs::read_to_string(&path).await.map_err(|e| {
        AppError::Prompt(format!("Failed to read prompt file {}: {}", file.name, e))
    })?;

    Ok(PromptContent {
        file: file.clone(),
        text,
    })
}
