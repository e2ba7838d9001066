//! Prompt types for the Promptis CLI.
//!
//! This module defines the domain entities shared by the scanner and loader.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One discovered prompt file.
///
/// Created by the scanner for every regular file under the prompt
/// directory. The descriptor is best-effort: the file existed at scan
/// time but may have been removed or made unreadable by the time it is
/// loaded, which surfaces as a per-file load error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptFile {
    /// Absolute path of the containing directory
    pub parent: PathBuf,

    /// Base file name
    pub name: String,
}

impl PromptFile {
    /// Create a descriptor from a parent directory and file name.
    pub fn new(parent: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            name: name.into(),
        }
    }

    /// Build a descriptor from a full file path.
    ///
    /// Returns `None` when the path has no file name component.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().into_owned();
        let parent = path.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
        Some(Self { parent, name })
    }

    /// The full path of the file (join of parent and name).
    pub fn full_path(&self) -> PathBuf {
        self.parent.join(&self.name)
    }
}

/// The text content loaded from one prompt file.
///
/// Only successful loads produce a `PromptContent`; a failed load is an
/// `AppError::Prompt` naming the file, so failures stay attributable
/// without carrying a half-populated value around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptContent {
    /// The file this content was loaded from
    pub file: PromptFile,

    /// Raw file bytes decoded as UTF-8 text
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_path_joins_parent_and_name() {
        let file = PromptFile::new("/prompts/sub", "c.txt");
        assert_eq!(file.full_path(), PathBuf::from("/prompts/sub/c.txt"));
    }

    #[test]
    fn test_from_path() {
        let file = PromptFile::from_path(Path::new("/prompts/a.txt")).unwrap();
        assert_eq!(file.parent, PathBuf::from("/prompts"));
        assert_eq!(file.name, "a.txt");
    }

    #[test]
    fn test_from_path_without_file_name() {
        assert!(PromptFile::from_path(Path::new("/")).is_none());
    }
}
