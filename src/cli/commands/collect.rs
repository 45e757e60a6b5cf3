//! collect command - Build figures from a source and print them

use std::io;

use crate::cli::Context;
use crate::core::figure::Figure;
use crate::source::{Directive, ErrorKind, FigureFactory, MetaFactory};
use crate::ui::output::{self, Verbosity};
use anyhow::{bail, Context as _, Result};

/// Collect figures from the selected source and print each with its perimeter.
///
/// The directive comes from `directive`, then the config file, then an
/// interactive prompt on stdin.
pub fn collect(
    ctx: &Context,
    directive: Option<&str>,
    seed: Option<u64>,
    limit: Option<usize>,
) -> Result<()> {
    let seed = seed.or(ctx.config.seed());

    let mut factory = match directive.or(ctx.config.directive()) {
        Some(line) => {
            let directive =
                Directive::parse(line).with_context(|| format!("Invalid directive '{}'", line))?;
            output::debug(
                format!("Using {} directive '{}'", directive.factory_type(), directive),
                ctx.verbosity,
            );
            directive
                .instantiate(seed)
                .with_context(|| format!("Invalid directive '{}'", line))?
        }
        None if ctx.config.interactive() => prompt_for_factory(ctx, seed)?,
        None => bail!("No directive given. Pass --directive or set `directive` in the config."),
    };

    output::debug(format!("Reading from {}", factory.type_name()), ctx.verbosity);
    let figures = gather(&mut factory, limit, ctx.verbosity);
    output::debug(format!("Collected {} figure(s)", figures.len()), ctx.verbosity);

    for figure in &figures {
        output::print(output::format_figure(figure), ctx.verbosity);
    }

    Ok(())
}

/// Ask for a directive on stdin until one yields a source.
///
/// Malformed directives and unopenable files are reported and the prompt
/// repeats; running out of input ends the prompt with an error.
fn prompt_for_factory(ctx: &Context, seed: Option<u64>) -> Result<FigureFactory> {
    let mut meta = MetaFactory::new(io::stdin().lock()).with_seed(seed);

    let listing: Vec<_> = meta
        .list_factory_types()
        .iter()
        .map(|d| d.description)
        .collect();
    output::print("Enter input method: [", ctx.verbosity);
    output::print(output::format_list(&listing, "    "), ctx.verbosity);
    output::print("]", ctx.verbosity);

    loop {
        output::prompt("==> ", ctx.verbosity)?;
        match meta.create() {
            Ok(factory) => return Ok(factory),
            Err(e) if e.kind() == ErrorKind::RuntimeFailure => {
                return Err(e).context("No input method selected");
            }
            Err(e) => output::error(e),
        }
    }
}

/// Poll `factory` until it is exhausted or `limit` figures are collected.
///
/// Per-line errors are reported and polling continues. A read failure ends
/// collection, since the source cannot recover from it.
pub fn gather(
    factory: &mut FigureFactory,
    limit: Option<usize>,
    verbosity: Verbosity,
) -> Vec<Figure> {
    let mut figures = Vec::new();

    while limit.map_or(true, |limit| figures.len() < limit) {
        match factory.create() {
            Ok(Some(figure)) => {
                output::debug(format!("Produced {}", figure), verbosity);
                figures.push(figure);
            }
            Ok(None) => break,
            Err(e) if e.kind() == ErrorKind::RuntimeFailure => {
                output::error(e);
                break;
            }
            Err(e) => output::error(e),
        }
    }

    figures
}
