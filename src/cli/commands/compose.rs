//! compose command - Print a page's composed table

use anyhow::{Context as _, Result};
use std::path::Path;

use super::workspace;
use crate::cli::Context;
use crate::ui::output;

/// Print the composed table of `page` as JSON records.
///
/// The page is composed under the same check levels as `propdoc check`, so
/// a whole-group import or descriptor rejected there is never printed.
/// Output goes to stdout even in quiet mode; it is the command's result.
pub fn compose(ctx: &Context, path: &Path, page: &str, compact: bool) -> Result<()> {
    let ws = workspace::load(ctx, path)?;
    let options = ws.check_options(ctx);
    let (table, warnings) = ws.catalog.compose_page_checked(page, &options)?;

    for warning in &warnings {
        output::warn(warning, ctx.verbosity());
    }

    let pretty = !compact && ws.config.pretty();
    let json = table
        .to_json(pretty)
        .context("Failed to serialize table")?;
    println!("{}", json);

    Ok(())
}
