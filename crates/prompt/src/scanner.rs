//! Recursive prompt-file discovery.
//!
//! The scanner walks the configured prompt directory and returns every
//! regular file underneath it, at any depth. The result is tagged: an
//! empty directory is `Ok` with an empty list, while an unreadable or
//! missing root is an error, so callers can report the two cases
//! differently.

use crate::types::PromptFile;
use promptis_core::{AppError, AppResult};
use std::path::Path;

/// Recursively enumerate the regular files under `root`.
///
/// - Directories, symbolic links, and special files are excluded.
/// - Ordering follows the filesystem's enumeration order; it is
///   deterministic for an unchanged tree but not sorted, and callers
///   must not assume lexical order.
/// - The scan fails as a whole on any traversal error: a missing root,
///   an unreadable root, or an unreadable subdirectory mid-walk all
///   abort without partial results.
pub fn scan_prompt_dir(root: &Path) -> AppResult<Vec<PromptFile>> {
    tracing::debug!("Scanning prompt directory: {}", root.display());

    let mut files = Vec::new();

    for entry in walkdir::WalkDir::new(root) {
        let entry = entry.map_err(|e| {
            AppError::Scan(format!("Failed to read directory {:?}: {}", root, e))
        })?;

        // file_type() does not follow symlinks, so links are excluded here
        if !entry.file_type().is_file() {
            continue;
        }

        if let Some(file) = PromptFile::from_path(entry.path()) {
            files.push(file);
        }
    }

    tracing::debug!("Found {} prompt files under {}", files.len(), root.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_scan_finds_nested_files() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("a.txt"), "hello");
        touch(&temp.path().join("b.txt"), "world");
        touch(&temp.path().join("sub/c.txt"), "nested");
        touch(&temp.path().join("sub/deep/d.txt"), "deeper");

        let files = scan_prompt_dir(temp.path()).unwrap();
        assert_eq!(files.len(), 4);

        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        for expected in ["a.txt", "b.txt", "c.txt", "d.txt"] {
            assert!(names.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_scan_excludes_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("only/dirs/here")).unwrap();

        let files = scan_prompt_dir(temp.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_scan_empty_directory_is_ok() {
        let temp = TempDir::new().unwrap();
        let files = scan_prompt_dir(temp.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_scan_missing_root_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");
        let result = scan_prompt_dir(&missing);
        assert!(matches!(result, Err(AppError::Scan(_))));
    }

    #[test]
    fn test_descriptor_paths_resolve() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("sub/c.txt"), "nested");

        let files = scan_prompt_dir(temp.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "c.txt");
        assert!(files[0].full_path().is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_excludes_symlinks() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("real.txt"), "real");
        std::os::unix::fs::symlink(
            temp.path().join("real.txt"),
            temp.path().join("link.txt"),
        )
        .unwrap();

        let files = scan_prompt_dir(temp.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "real.txt");
    }
}
