//! Promptis CLI
//!
//! Main entry point for the promptis command-line tool.
//! Runs directories of prompt files against a chat channel and exposes
//! the chat participant surface for single turns.

mod commands;

use clap::{Parser, Subcommand};
use commands::{ChatCommand, RunCommand, SetDirCommand};
use promptis_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// Promptis CLI - run a directory of prompt files against a chat channel
#[derive(Parser, Debug)]
#[command(name = "promptis")]
#[command(about = "Directory-driven prompt batch runner", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to workspace directory (default: current directory)
    #[arg(short, long, global = true, env = "PROMPTIS_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, env = "PROMPTIS_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    /// Chat channel provider (ollama, echo, ...)
    #[arg(short, long, global = true, env = "PROMPTIS_PROVIDER")]
    provider: Option<String>,

    /// Model identifier
    #[arg(short, long, global = true, env = "PROMPTIS_MODEL")]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run all prompt files under the configured directory
    Run(RunCommand),

    /// Select the directory containing prompt files
    SetDir(SetDirCommand),

    /// Send one chat turn to the participant
    Chat(ChatCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration; workspace/config flags are resolved first
    // so the YAML merge reads the same file set-dir writes
    let config = AppConfig::load_with(cli.workspace.clone(), cli.config.clone())?;

    // Apply the remaining CLI overrides
    let config = config.with_overrides(
        cli.provider,
        cli.model,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("Promptis CLI starting");
    tracing::debug!("Workspace: {:?}", config.workspace);
    tracing::debug!("Prompt directory: {:?}", config.prompt_dir);
    tracing::debug!("Provider: {}", config.provider);

    let command_name = match &cli.command {
        Commands::Run(_) => "run",
        Commands::SetDir(_) => "set-dir",
        Commands::Chat(_) => "chat",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Run(cmd) => cmd.execute(&config).await,
        Commands::SetDir(cmd) => cmd.execute(&config),
        Commands::Chat(cmd) => cmd.execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
