//! Configuration management for the Promptis CLI.
//!
//! This module handles loading and merging configuration from multiple sources:
//! - Defaults
//! - Config file (.promptis/config.yaml)
//! - Environment variables
//! - Command-line flags (applied by the caller via `with_overrides`)
//!
//! The one load-bearing value is `promptDirectory`, the directory whose
//! prompt files a batch run executes. An empty or absent value means
//! "not configured" — it is never interpreted as the working directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Main application configuration.
///
/// This struct holds all global configuration options that affect
/// CLI behavior across commands. It is assembled once at startup and
/// passed explicitly to the components that need it; nothing reads
/// configuration through ambient global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the workspace root (contains .promptis/)
    pub workspace: PathBuf,

    /// Optional config file path override
    pub config_file: Option<PathBuf>,

    /// Directory containing prompt files; `None` means not configured
    pub prompt_dir: Option<PathBuf>,

    /// Chat channel provider (e.g., "ollama")
    pub provider: String,

    /// Default model identifier
    pub model: String,

    /// Optional custom provider endpoint
    pub endpoint: Option<String>,

    /// API key for providers that require one
    pub api_key: Option<String>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure (.promptis/config.yaml).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    /// The prompt directory setting, key `promptDirectory`
    #[serde(rename = "promptDirectory", skip_serializing_if = "Option::is_none")]
    prompt_directory: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    chat: Option<ChatConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatConfig {
    provider: Option<String>,
    model: Option<String>,
    endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_file: None,
            prompt_dir: None,
            provider: "ollama".to_string(), // Local-first default
            model: "llama3.2".to_string(),
            endpoint: None,
            api_key: None,
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the config file and environment variables.
    ///
    /// Environment variables:
    /// - `PROMPTIS_WORKSPACE`: Override workspace path
    /// - `PROMPTIS_CONFIG`: Path to config file
    /// - `PROMPTIS_PROMPT_DIR`: Prompt directory
    /// - `PROMPTIS_PROVIDER`: Chat channel provider
    /// - `PROMPTIS_MODEL`: Model identifier
    /// - `PROMPTIS_API_KEY`: API key
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    pub fn load() -> AppResult<Self> {
        Self::load_with(None, None)
    }

    /// Load configuration with explicit workspace and config file paths.
    ///
    /// The paths decide which YAML file the merge reads, so they must be
    /// resolved before it runs; `set-dir` writes and `run` reads through
    /// the same `config_path()`, and both follow these overrides.
    pub fn load_with(
        workspace: Option<PathBuf>,
        config_file: Option<PathBuf>,
    ) -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(workspace) = std::env::var("PROMPTIS_WORKSPACE") {
            config.workspace = PathBuf::from(workspace);
        }

        if let Ok(config_file) = std::env::var("PROMPTIS_CONFIG") {
            config.config_file = Some(PathBuf::from(config_file));
        }

        // CLI flags outrank the environment for the paths the merge uses
        if let Some(workspace) = workspace {
            config.workspace = workspace;
        }

        if let Some(config_file) = config_file {
            config.config_file = Some(config_file);
        }

        // Load from YAML config file if it exists
        let config_path = config.config_path();
        if config_path.exists() {
            config.merge_yaml(&config_path)?;
        }

        // Environment variables override the config file
        if let Ok(dir) = std::env::var("PROMPTIS_PROMPT_DIR") {
            config.prompt_dir = non_empty_path(&dir);
        }

        if let Ok(provider) = std::env::var("PROMPTIS_PROVIDER") {
            config.provider = provider;
        }

        if let Ok(model) = std::env::var("PROMPTIS_MODEL") {
            config.model = model;
        }

        if let Ok(key) = std::env::var("PROMPTIS_API_KEY") {
            config.api_key = Some(key);
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Resolve the active config file path.
    pub fn config_path(&self) -> PathBuf {
        if let Some(ref cf) = self.config_file {
            cf.clone()
        } else {
            self.workspace.join(".promptis/config.yaml")
        }
    }

    /// Merge YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &Path) -> AppResult<()> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        // Empty string is "not configured", same as absent
        if let Some(dir) = config_file.prompt_directory {
            self.prompt_dir = non_empty_path(&dir);
        }

        if let Some(chat) = config_file.chat {
            if let Some(provider) = chat.provider {
                self.provider = provider;
            }
            if let Some(model) = chat.model {
                self.model = model;
            }
            if chat.endpoint.is_some() {
                self.endpoint = chat.endpoint;
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                self.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                self.no_color = !color;
            }
        }

        Ok(())
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// This method merges command-line flags with the loaded configuration,
    /// giving precedence to CLI flags over environment variables. Workspace
    /// and config-file flags are not handled here; `load_with` applies them
    /// before the YAML merge.
    pub fn with_overrides(
        mut self,
        provider: Option<String>,
        model: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(provider) = provider {
            self.provider = provider;
        }

        if let Some(model) = model {
            self.model = model;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Get the path to the .promptis directory.
    pub fn promptis_dir(&self) -> PathBuf {
        self.workspace.join(".promptis")
    }

    /// Persist `promptDirectory` to the config file, preserving any other
    /// settings already present.
    ///
    /// The directory must be an absolute path to an existing directory;
    /// otherwise the config file is left unchanged and an error is returned.
    pub fn write_prompt_directory(&self, dir: &Path) -> AppResult<()> {
        if !dir.is_absolute() {
            return Err(AppError::Config(format!(
                "Prompt directory must be an absolute path: {:?}",
                dir
            )));
        }

        if !dir.is_dir() {
            return Err(AppError::Config(format!(
                "Prompt directory does not exist: {:?}",
                dir
            )));
        }

        let config_path = self.config_path();

        let mut config_file: ConfigFile = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(|e| {
                AppError::Config(format!("Failed to read config file {:?}: {}", config_path, e))
            })?;
            serde_yaml::from_str(&contents).map_err(|e| {
                AppError::Config(format!(
                    "Failed to parse config file {:?}: {}",
                    config_path, e
                ))
            })?
        } else {
            ConfigFile::default()
        };

        config_file.prompt_directory = Some(dir.to_string_lossy().into_owned());

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let contents = serde_yaml::to_string(&config_file)?;
        std::fs::write(&config_path, contents).map_err(|e| {
            AppError::Config(format!(
                "Failed to write config file {:?}: {}",
                config_path, e
            ))
        })?;

        tracing::info!("Saved prompt directory: {}", dir.display());
        Ok(())
    }
}

/// Map a possibly-empty string to an optional path.
fn non_empty_path(value: &str) -> Option<PathBuf> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.provider, "ollama");
        assert_eq!(config.model, "llama3.2");
        assert!(config.prompt_dir.is_none());
        assert!(!config.verbose);
        assert!(!config.no_color);
    }

    #[test]
    fn test_promptis_dir() {
        let config = AppConfig::default();
        assert!(config.promptis_dir().ends_with(".promptis"));
    }

    #[test]
    fn test_with_overrides() {
        let config = AppConfig::default();
        let overridden = config.with_overrides(
            Some("ollama".to_string()),
            Some("llama3.1".to_string()),
            None,
            true,
            false,
        );

        assert_eq!(overridden.provider, "ollama");
        assert_eq!(overridden.model, "llama3.1");
        assert!(overridden.verbose);
        assert_eq!(overridden.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_empty_prompt_directory_is_not_configured() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.yaml");
        std::fs::write(&config_path, "promptDirectory: \"\"\n").unwrap();

        let mut config = AppConfig {
            workspace: temp.path().to_path_buf(),
            config_file: Some(config_path.clone()),
            ..AppConfig::default()
        };
        config.merge_yaml(&config_path).unwrap();

        assert!(config.prompt_dir.is_none());
    }

    #[test]
    fn test_merge_yaml_prompt_directory() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.yaml");
        std::fs::write(
            &config_path,
            "promptDirectory: /prompts\nchat:\n  provider: ollama\n  model: llama3.1\n  endpoint: http://localhost:9999\n",
        )
        .unwrap();

        let mut config = AppConfig::default();
        config.merge_yaml(&config_path).unwrap();

        assert_eq!(config.prompt_dir, Some(PathBuf::from("/prompts")));
        assert_eq!(config.model, "llama3.1");
        assert_eq!(config.endpoint, Some("http://localhost:9999".to_string()));
    }

    #[test]
    fn test_write_prompt_directory_round_trip() {
        let temp = TempDir::new().unwrap();
        let prompt_dir = temp.path().join("prompts");
        std::fs::create_dir(&prompt_dir).unwrap();

        let config = AppConfig {
            workspace: temp.path().to_path_buf(),
            ..AppConfig::default()
        };
        config.write_prompt_directory(&prompt_dir).unwrap();

        let mut reloaded = AppConfig {
            workspace: temp.path().to_path_buf(),
            ..AppConfig::default()
        };
        reloaded.merge_yaml(&config.config_path()).unwrap();
        assert_eq!(reloaded.prompt_dir, Some(prompt_dir));
    }

    #[test]
    fn test_load_with_workspace_round_trips_prompt_directory() {
        let temp = TempDir::new().unwrap();
        let prompt_dir = temp.path().join("prompts");
        std::fs::create_dir(&prompt_dir).unwrap();

        // Write through an explicit workspace, as `set-dir --workspace` does
        let writer = AppConfig {
            workspace: temp.path().to_path_buf(),
            ..AppConfig::default()
        };
        writer.write_prompt_directory(&prompt_dir).unwrap();

        // A later load with the same workspace flag must see the setting
        let loaded = AppConfig::load_with(Some(temp.path().to_path_buf()), None).unwrap();
        assert_eq!(loaded.prompt_dir, Some(prompt_dir));
    }

    #[test]
    fn test_load_with_explicit_config_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("elsewhere.yaml");
        std::fs::write(&config_path, "promptDirectory: /prompts\n").unwrap();

        let loaded = AppConfig::load_with(None, Some(config_path)).unwrap();
        assert_eq!(loaded.prompt_dir, Some(PathBuf::from("/prompts")));
    }

    #[test]
    fn test_write_prompt_directory_rejects_relative() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig {
            workspace: temp.path().to_path_buf(),
            ..AppConfig::default()
        };
        assert!(config
            .write_prompt_directory(Path::new("relative/prompts"))
            .is_err());
        assert!(!config.config_path().exists());
    }

    #[test]
    fn test_write_prompt_directory_rejects_missing() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig {
            workspace: temp.path().to_path_buf(),
            ..AppConfig::default()
        };
        let missing = temp.path().join("nope");
        assert!(config.write_prompt_directory(&missing).is_err());
        assert!(!config.config_path().exists());
    }
}
