//! Prompt discovery and loading for the Promptis CLI.
//!
//! This crate covers the filesystem-facing half of a batch run:
//! - **Scanner**: recursively enumerates prompt files under a directory
//! - **Loader**: asynchronously reads one prompt file's text content
//!
//! # Example
//! ```no_run
//! use promptis_prompt::{load_prompt, scan_prompt_dir};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let files = scan_prompt_dir(Path::new("/prompts"))?;
//! for file in &files {
//!     let content = load_prompt(file).await?;
//!     println!("{}: {}", file.name, content.text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod scanner;
pub mod types;

// Re-export main types
pub use loader::load_prompt;
pub use scanner::scan_prompt_dir;
pub use types::{PromptContent, PromptFile};
