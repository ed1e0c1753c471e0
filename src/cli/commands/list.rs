//! list command - Show the groups and pages of a catalog

use anyhow::Result;
use std::path::Path;

use super::workspace;
use crate::cli::Context;
use crate::core::catalog::{Page, Selection};
use crate::ui::output;

/// List groups with their entry counts, then pages with their imports.
pub fn list(ctx: &Context, path: &Path) -> Result<()> {
    let ws = workspace::load(ctx, path)?;
    let verbosity = ctx.verbosity();

    let groups: Vec<_> = ws
        .catalog
        .groups()
        .map(|g| format!("{} ({})", g.name(), g.len()))
        .collect();
    output::print("Groups:", verbosity);
    if groups.is_empty() {
        output::print("  (none)", verbosity);
    } else {
        output::print(output::format_list(&groups, "  "), verbosity);
    }

    let pages: Vec<_> = ws.catalog.pages().map(describe_page).collect();
    output::print("Pages:", verbosity);
    if pages.is_empty() {
        output::print("  (none)", verbosity);
    } else {
        output::print(output::format_list(&pages, "  "), verbosity);
    }

    Ok(())
}

fn describe_page(page: &Page) -> String {
    let mut sources: Vec<String> = page
        .imports()
        .iter()
        .map(|import| match &import.selection {
            Selection::All => format!("{} (all)", import.group),
            Selection::Only(names) => format!("{} ({})", import.group, names.len()),
        })
        .collect();
    if !page.props().is_empty() {
        sources.push(format!("local ({})", page.props().len()));
    }

    if sources.is_empty() {
        page.name().to_string()
    } else {
        format!("{} <- {}", page.name(), sources.join(", "))
    }
}
