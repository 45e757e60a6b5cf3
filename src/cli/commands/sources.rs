//! sources command - List the sources a directive can select

use crate::cli::Context;
use crate::source::FactoryType;
use crate::ui::output;
use anyhow::Result;

/// Print one usage line per selectable source.
pub fn sources(ctx: &Context) -> Result<()> {
    let lines: Vec<_> = FactoryType::all()
        .iter()
        .map(|t| t.descriptor().description)
        .collect();
    output::print(output::format_list(&lines, ""), ctx.verbosity);
    Ok(())
}
