//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! propdoc has two configuration scopes:
//! - **Global**: User-level settings
//! - **Project**: Settings next to the catalog being checked
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Project config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. An explicit path (`--config`), which must exist
//! 2. `$PROPDOC_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/propdoc/config.toml`
//! 4. `~/.propdoc/config.toml`
//!
//! # Project Config Locations
//!
//! Searched in order inside the catalog's directory:
//! 1. `propdoc.toml` (canonical)
//! 2. `.propdoc.toml` (compatibility, warns)
//!
//! # Example
//!
//! ```no_run
//! use propdoc::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(None, Some(Path::new("docs/props"))).unwrap();
//! let options = result.config.check_options();
//! println!("import_all: {:?}", options.import_all);
//! ```

pub mod schema;

pub use schema::{ComposeConfig, ConfigFile, OutputConfig, ValidationConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::catalog::CheckOptions;
use crate::core::descriptor::{CheckLevel, ValidationOptions};

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "propdoc.toml";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("config file '{0}' does not exist")]
    NotFound(PathBuf),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence automatically: project config overrides
/// global config, which overrides defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: ConfigFile,
    /// Project configuration (if found)
    pub project: Option<ConfigFile>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the project config file (if loaded)
    project_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration.
    ///
    /// `explicit` replaces the global lookup. `project_dir` is the directory
    /// holding the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or
    /// parsed, or if `explicit` does not exist. Missing files found by
    /// lookup are not an error (defaults are used).
    pub fn load(
        explicit: Option<&Path>,
        project_dir: Option<&Path>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let (global, global_path) = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                (Self::read_config(path)?, Some(path.to_path_buf()))
            }
            None => Self::load_global()?,
        };

        let (project, project_path) = match project_dir {
            Some(dir) => Self::load_project(dir, &mut warnings)?,
            None => (None, None),
        };

        tracing::debug!(
            global = ?global_path,
            project = ?project_path,
            "loaded configuration"
        );

        Ok(ConfigLoadResult {
            config: Config {
                global,
                project,
                global_path,
                project_path,
            },
            warnings,
        })
    }

    /// Load global configuration from standard locations.
    fn load_global() -> Result<(ConfigFile, Option<PathBuf>), ConfigError> {
        // 1. Check $PROPDOC_CONFIG
        if let Ok(path) = std::env::var("PROPDOC_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 2. Check $XDG_CONFIG_HOME/propdoc/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("propdoc/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 3. Check ~/.propdoc/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".propdoc/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        Ok((ConfigFile::default(), None))
    }

    /// Load project configuration from the catalog directory.
    fn load_project(
        dir: &Path,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<(Option<ConfigFile>, Option<PathBuf>), ConfigError> {
        let canonical = dir.join(PROJECT_CONFIG_FILE);
        if canonical.exists() {
            let config = Self::read_config(&canonical)?;
            return Ok((Some(config), Some(canonical)));
        }

        let hidden = dir.join(".propdoc.toml");
        if hidden.exists() {
            warnings.push(ConfigWarning {
                message: format!(
                    "Using deprecated config location. Please rename to '{}'",
                    canonical.display()
                ),
                path: hidden.clone(),
            });
            let config = Self::read_config(&hidden)?;
            return Ok((Some(config), Some(hidden)));
        }

        Ok((None, None))
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<ConfigFile, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Resolve a setting: project, then global.
    fn resolve<T>(&self, get: impl Fn(&ConfigFile) -> Option<T>) -> Option<T> {
        self.project.as_ref().and_then(&get).or_else(|| get(&self.global))
    }

    /// Level for default/type mismatches.
    ///
    /// Defaults to `warn` if not configured.
    pub fn default_mismatch(&self) -> CheckLevel {
        self.resolve(|c| c.validation.as_ref()?.default_mismatch)
            .unwrap_or_default()
    }

    /// Level for repeated literals in a type union.
    ///
    /// Defaults to `warn` if not configured.
    pub fn duplicate_literal(&self) -> CheckLevel {
        self.resolve(|c| c.validation.as_ref()?.duplicate_literal)
            .unwrap_or_default()
    }

    /// Level for whole-group imports.
    ///
    /// Defaults to `warn` if not configured.
    pub fn import_all(&self) -> CheckLevel {
        self.resolve(|c| c.compose.as_ref()?.import_all)
            .unwrap_or_default()
    }

    /// Whether JSON output is pretty-printed.
    ///
    /// Defaults to `true` if not configured.
    pub fn pretty(&self) -> bool {
        self.resolve(|c| c.output.as_ref()?.pretty).unwrap_or(true)
    }

    /// All check levels as catalog check options.
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            validation: ValidationOptions {
                default_mismatch: self.default_mismatch(),
                duplicate_literal: self.duplicate_literal(),
            },
            import_all: self.import_all(),
        }
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded project config file.
    pub fn project_config_loaded_from(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }
}
