//! check command - Validate groups and compose every page

use anyhow::{Context as _, Result};
use std::path::Path;

use super::workspace;
use crate::cli::Context;
use crate::ui::output;

/// Validate a catalog.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `path` - Catalog file
pub fn check(ctx: &Context, path: &Path) -> Result<()> {
    let ws = workspace::load(ctx, path)?;
    let options = ws.check_options(ctx);

    let report = ws
        .catalog
        .check(&options)
        .with_context(|| format!("Check failed for '{}'", path.display()))?;

    let verbosity = ctx.verbosity();
    for warning in &report.warnings {
        output::warn(warning, verbosity);
    }

    let mut summary = format!(
        "Checked {} {} and {} {}",
        report.groups,
        plural(report.groups, "group", "groups"),
        report.pages,
        plural(report.pages, "page", "pages"),
    );
    if !report.warnings.is_empty() {
        summary.push_str(&format!(
            " ({} {})",
            report.warnings.len(),
            plural(report.warnings.len(), "warning", "warnings")
        ));
    }
    output::print(summary, verbosity);

    Ok(())
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}
