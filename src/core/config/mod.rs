//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `$FIGUREWORK_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/figurework/config.toml`
//! 3. `~/.figurework/config.toml`
//!
//! A missing file is not an error; defaults are used.
//!
//! # Example
//!
//! ```no_run
//! use figurework::core::config::Config;
//!
//! let result = Config::load().unwrap();
//! let config = result.config;
//!
//! if let Some(directive) = config.directive() {
//!     println!("Default directive: {}", directive);
//! }
//! println!("Interactive: {}", config.interactive());
//! ```

pub mod schema;

pub use schema::FigureConfig;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FIGUREWORK_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Loaded configuration with defaults applied by the accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub file: FigureConfig,
    /// Path the config was loaded from (if any)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated.
    pub fn load() -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        for path in Self::candidate_paths(&mut warnings) {
            if path.exists() {
                let config = Self::load_from(&path)?;
                return Ok(ConfigLoadResult { config, warnings });
            }
        }

        Ok(ConfigLoadResult {
            config: Config::default(),
            warnings,
        })
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: FigureConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        Ok(Config {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    /// Locations to search, in order.
    fn candidate_paths(warnings: &mut Vec<ConfigWarning>) -> Vec<PathBuf> {
        Self::search_paths(std::env::var_os(CONFIG_ENV).map(PathBuf::from), warnings)
    }

    /// Locations to search, starting with `explicit` (the `$FIGUREWORK_CONFIG` value).
    fn search_paths(
        explicit: Option<PathBuf>,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(path) = explicit {
            if !path.exists() {
                warnings.push(ConfigWarning {
                    message: format!("${} points to a missing file, ignoring it", CONFIG_ENV),
                    path: path.clone(),
                });
            }
            paths.push(path);
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_home).join("figurework/config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".figurework/config.toml"));
        }

        paths
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Default directive, if configured.
    pub fn directive(&self) -> Option<&str> {
        self.file.directive.as_deref()
    }

    /// Seed for random sources, if configured.
    pub fn seed(&self) -> Option<u64> {
        self.file.seed
    }

    /// Whether to prompt for a directive.
    ///
    /// Defaults to `true` if not configured.
    pub fn interactive(&self) -> bool {
        self.file.interactive.unwrap_or(true)
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
