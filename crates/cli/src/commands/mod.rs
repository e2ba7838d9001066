//! Command handlers for the Promptis CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod chat;
pub mod run;
pub mod set_dir;

// Re-export command types for convenience
pub use chat::ChatCommand;
pub use run::RunCommand;
pub use set_dir::SetDirCommand;
