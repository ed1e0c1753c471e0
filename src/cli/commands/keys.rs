//! keys command - Print a group's property names

use anyhow::{bail, Result};
use std::path::Path;

use super::workspace;
use crate::cli::Context;

/// Print the property names of `group`, one per line, in declaration order.
pub fn keys(ctx: &Context, path: &Path, group: &str) -> Result<()> {
    let ws = workspace::load(ctx, path)?;

    let Some(found) = ws.catalog.group(group) else {
        let known: Vec<_> = ws.catalog.groups().map(|g| g.name().to_string()).collect();
        if known.is_empty() {
            bail!("Unknown group '{}'; the catalog defines no groups", group);
        }
        bail!(
            "Unknown group '{}'. Known groups: {}",
            group,
            known.join(", ")
        );
    };

    for name in found.keys() {
        println!("{}", name);
    }

    Ok(())
}
