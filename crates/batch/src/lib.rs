//! Batch execution for the Promptis CLI.
//!
//! A batch run is one end-to-end pass: scan the configured prompt
//! directory, load each discovered file sequentially, report per-file
//! status, and submit the constructed chat messages through a
//! [`promptis_chat::ChatChannel`]. User-facing reporting flows through
//! the [`report::Reporter`] port so the executor is testable against an
//! in-memory fake.

pub mod executor;
pub mod report;

// Re-export main types
pub use executor::{BatchExecutor, BatchSummary, RunOptions};
pub use report::{ConsoleReporter, MemoryReporter, Reporter};
