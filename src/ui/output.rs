//! ui::output
//!
//! Output formatting and diagnostic logging.
//!
//! # Design
//!
//! Results go to stdout and respect the quiet flag. Diagnostics go to
//! stderr with a fixed prefix so they never mix with figure output.

use std::fmt::Display;
use std::io::{self, Write};

use crate::core::figure::Figure;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a prompt without a trailing newline and flush it.
///
/// # Errors
///
/// Returns an error if stdout cannot be flushed.
pub fn prompt(message: impl Display, verbosity: Verbosity) -> io::Result<()> {
    if verbosity != Verbosity::Quiet {
        print!("{}", message);
        io::stdout().flush()?;
    }
    Ok(())
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format a figure with its perimeter.
pub fn format_figure(figure: &Figure) -> String {
    format!("{} (perimeter {:.3})", figure, figure.perimeter())
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}
