//! cli
//!
//! Command-line interface layer for figurework.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Handlers obtain a [`crate::source::FigureFactory`]
//! and poll it; this is the only layer that reports errors to the user and
//! decides whether to keep going after one.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::core::config::Config;
use crate::ui::output::{self, Verbosity};
use anyhow::{Context as _, Result};
use std::path::Path;

/// Execution context shared by all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output verbosity from `--quiet` / `--debug`.
    pub verbosity: Verbosity,
    /// Loaded configuration.
    pub config: Config,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            config: Config::default(),
        }
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    let ctx = Context {
        verbosity,
        config: load_config(cli.config.as_deref(), verbosity)?,
    };

    commands::dispatch(cli.command, &ctx)
}

fn load_config(path: Option<&Path>, verbosity: Verbosity) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let result = Config::load().context("Failed to load config")?;
            for warning in &result.warnings {
                output::warn(
                    format!("{} ({})", warning.message, warning.path.display()),
                    verbosity,
                );
            }
            result.config
        }
    };

    if let Some(path) = config.loaded_from() {
        output::debug(format!("Loaded config from {}", path.display()), verbosity);
    }

    Ok(config)
}
