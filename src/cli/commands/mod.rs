//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls into [`crate::source`] or [`crate::core`]
//! 3. Formats and displays output

mod collect;
mod completion;
mod sources;
mod types;

pub use collect::{collect, gather};
pub use completion::completion;
pub use sources::sources;
pub use types::types;

use crate::cli::args::Command;
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Collect {
            directive,
            seed,
            limit,
        } => collect::collect(ctx, directive.as_deref(), seed, limit),
        Command::Sources => sources::sources(ctx),
        Command::Types {
            name,
            ancestors,
            descendants,
            check,
        } => types::types(ctx, name.as_deref(), ancestors, descendants, check),
        Command::Completion { shell } => completion::completion(shell),
    }
}
