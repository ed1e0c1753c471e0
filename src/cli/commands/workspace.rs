//! Shared loading of a catalog and the configuration that applies to it

use anyhow::{bail, Context as _, Result};
use std::fs;
use std::path::Path;

use crate::cli::Context;
use crate::core::catalog::{Catalog, CatalogFormat, CheckOptions};
use crate::core::config::Config;
use crate::ui::output;

/// A parsed catalog with its resolved configuration.
#[derive(Debug)]
pub struct Workspace {
    pub catalog: Catalog,
    pub config: Config,
}

impl Workspace {
    /// Check options from config, upgraded when `--strict` is set.
    pub fn check_options(&self, ctx: &Context) -> CheckOptions {
        let options = self.config.check_options();
        if ctx.strict {
            options.strict()
        } else {
            options
        }
    }
}

/// Read a catalog file and load the config for its directory.
///
/// Config warnings are printed here so every command reports them the same
/// way.
pub fn load(ctx: &Context, path: &Path) -> Result<Workspace> {
    let Some(format) = CatalogFormat::from_path(path) else {
        bail!(
            "Cannot tell the format of '{}'; use a .toml or .json file",
            path.display()
        );
    };

    let project_dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let loaded = Config::load(ctx.config.as_deref(), project_dir.or(Some(Path::new("."))))
        .context("Failed to load configuration")?;
    for warning in &loaded.warnings {
        output::warn(&warning.message, ctx.verbosity());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog '{}'", path.display()))?;
    let catalog = Catalog::parse(&contents, format)
        .with_context(|| format!("Invalid catalog '{}'", path.display()))?;

    output::debug(
        format!(
            "loaded {} groups and {} pages from {}",
            catalog.groups().count(),
            catalog.pages().count(),
            path.display()
        ),
        ctx.verbosity(),
    );

    Ok(Workspace {
        catalog,
        config: loaded.config,
    })
}
