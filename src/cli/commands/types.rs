//! types command - Query the declared type hierarchy

use crate::cli::Context;
use crate::core::registry::TypeRegistry;
use crate::ui::output;
use anyhow::{bail, Result};

/// Print the ancestors and/or descendants of `name`, or every declared
/// edge when no name is given.
pub fn types(
    ctx: &Context,
    name: Option<&str>,
    ancestors: bool,
    descendants: bool,
    check: bool,
) -> Result<()> {
    let registry = TypeRegistry::builtin();

    if check {
        if let Some(start) = registry.find_cycle() {
            bail!("Type hierarchy has a cycle through '{}'", start);
        }
        output::debug("Type hierarchy is acyclic", ctx.verbosity);
    }

    let Some(name) = name else {
        for child in registry.types() {
            if let Some(parents) = registry.parents(child) {
                for parent in parents {
                    output::print(format!("{} -> {}", child, parent), ctx.verbosity);
                }
            }
        }
        return Ok(());
    };

    if !registry.types().contains(name) {
        output::warn(format!("'{}' is not a registered type", name), ctx.verbosity);
        return Ok(());
    }

    // Bare names when a single direction is requested, headed sections otherwise.
    match (ancestors, descendants) {
        (true, false) => print_names(&registry.ancestors(name), "", ctx),
        (false, true) => print_names(&registry.descendants(name), "", ctx),
        _ => {
            output::print("ancestors:", ctx.verbosity);
            print_names(&registry.ancestors(name), "  ", ctx);
            output::print("descendants:", ctx.verbosity);
            print_names(&registry.descendants(name), "  ", ctx);
        }
    }

    Ok(())
}

fn print_names(names: &[String], prefix: &str, ctx: &Context) {
    if !names.is_empty() {
        output::print(output::format_list(names, prefix), ctx.verbosity);
    }
}
