//! Configuration system for the `DeskChat` shell.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/deskchat/config.toml`)
//! 4. Compiled defaults
//!
//! A missing config file is not an error (defaults are used). An explicit
//! `--config` path that doesn't exist is.

use std::path::PathBuf;

/// Errors that can occur when loading shell configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure for the shell.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ShellConfigFile {
    shell: ShellFileSection,
}

/// `[shell]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ShellFileSection {
    prompt: Option<String>,
    suggestion_limit: Option<usize>,
    log_level: Option<String>,
    log_file: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// CLI arguments
// ---------------------------------------------------------------------------

/// CLI arguments for the shell.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "In-memory messaging shell with username autocomplete")]
pub struct CliArgs {
    /// Prompt shown while no user is logged in.
    #[arg(long)]
    pub prompt: Option<String>,

    /// Maximum usernames listed per `users` query (0 = unlimited).
    #[arg(long)]
    pub suggestion_limit: Option<usize>,

    /// Path to config file (default: `~/.config/deskchat/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, env = "DESKCHAT_LOG")]
    pub log_level: Option<String>,

    /// Path to log file (default: `$TMPDIR/deskchat.log`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// Fully resolved shell configuration.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Prompt shown while no user is logged in.
    pub prompt: String,
    /// Maximum usernames listed per `users` query (0 = unlimited).
    pub suggestion_limit: usize,
    /// Log level filter string.
    pub log_level: String,
    /// Log file path, if one was requested.
    pub log_file: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            suggestion_limit: 10,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl ShellConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an error.
    /// If no `--config` is given, the default path is tried and missing file
    /// is treated as empty config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the explicit config file cannot be read
    /// or parsed.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Ok(Self::resolve(cli, &file))
    }

    /// Resolve a `ShellConfig` from CLI args and a parsed config file.
    ///
    /// Priority: CLI > file > default.
    #[must_use]
    fn resolve(cli: &CliArgs, file: &ShellConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            prompt: cli
                .prompt
                .clone()
                .or_else(|| file.shell.prompt.clone())
                .unwrap_or(defaults.prompt),
            suggestion_limit: cli
                .suggestion_limit
                .or(file.shell.suggestion_limit)
                .unwrap_or(defaults.suggestion_limit),
            log_level: cli
                .log_level
                .clone()
                .or_else(|| file.shell.log_level.clone())
                .unwrap_or(defaults.log_level),
            log_file: cli
                .log_file
                .clone()
                .or_else(|| file.shell.log_file.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Load and parse a TOML config file for the shell.
fn load_config_file(
    explicit_path: Option<&std::path::Path>,
) -> Result<ShellConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(config_dir) = dirs::config_dir() else {
            return Ok(ShellConfigFile::default());
        };
        config_dir.join("deskchat").join("config.toml")
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ShellConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}
