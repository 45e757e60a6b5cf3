//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this config file instead of searching for one
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fig - Build validated geometric figures from random, file or stdin sources
#[derive(Parser, Debug)]
#[command(name = "fig")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the standard locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Collect figures from a source and print them
    #[command(
        name = "collect",
        long_about = "Collect figures from a source and print them.\n\n\
            The source is chosen by a directive: `Random <count>`, `STDIN <count>` \
            or `File <path>`, where a count of -1 means unbounded. Without \
            --directive the configured default is used, and failing that the \
            directive is read interactively from standard input.\n\n\
            Lines that fail to parse are reported and skipped.",
        after_help = "\
EXAMPLES:
    # Ten random figures, reproducibly
    fig collect --directive 'Random 10' --seed 42

    # Figures from a file
    fig collect --directive 'File shapes.txt'

    # Pipe figures in
    printf 'Circle 1\\nRectangle 2 3\\n' | fig collect --directive 'STDIN -1'"
    )]
    Collect {
        /// Source directive, e.g. "Random 10"
        #[arg(short, long)]
        directive: Option<String>,

        /// Seed for random sources
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after this many figures
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List the sources a directive can select
    Sources,

    /// Query the figure and factory type hierarchy
    Types {
        /// Type to query; lists every declared edge when omitted
        name: Option<String>,

        /// Show only ancestors
        #[arg(long, conflicts_with = "descendants")]
        ancestors: bool,

        /// Show only descendants
        #[arg(long)]
        descendants: bool,

        /// Fail if the declared hierarchy contains a cycle
        #[arg(long)]
        check: bool,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
INSTALLATION:
    # Bash
    fig completion bash > ~/.local/share/bash-completion/completions/fig

    # Zsh
    fig completion zsh > ~/.zfunc/_fig

    # Fish
    fig completion fish > ~/.config/fish/completions/fig.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
