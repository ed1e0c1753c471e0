//! core::config::schema
//!
//! Configuration schema types.
//!
//! The global file and the project file share one schema; the project file
//! wins key by key.
//!
//! # Example
//!
//! ```toml
//! [validation]
//! default_mismatch = "error"
//! duplicate_literal = "warn"
//!
//! [compose]
//! import_all = "warn"
//!
//! [output]
//! pretty = true
//! ```
//!
//! Levels are `"error"`, `"warn"` or `"ignore"`. For `import_all`, `error`
//! forbids whole-group imports and `ignore` allows them silently.

use serde::{Deserialize, Serialize};

use crate::core::descriptor::CheckLevel;

/// One configuration file (global or project scope).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Descriptor check levels
    pub validation: Option<ValidationConfig>,

    /// Composition policies
    pub compose: Option<ComposeConfig>,

    /// Output settings
    pub output: Option<OutputConfig>,
}

/// `[validation]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Default value incompatible with the declared type
    pub default_mismatch: Option<CheckLevel>,

    /// Literal repeated in a type union
    pub duplicate_literal: Option<CheckLevel>,
}

/// `[compose]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ComposeConfig {
    /// Treatment of whole-group imports
    pub import_all: Option<CheckLevel>,
}

/// `[output]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    pub pretty: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ConfigFile::default();
        assert!(config.validation.is_none());
        assert!(config.compose.is_none());
        assert!(config.output.is_none());
    }

    #[test]
    fn parse_full() {
        let toml = r#"
            [validation]
            default_mismatch = "error"
            duplicate_literal = "ignore"

            [compose]
            import_all = "warn"

            [output]
            pretty = false
        "#;
        let config: ConfigFile = toml::from_str(toml).unwrap();
        let validation = config.validation.unwrap();
        assert_eq!(validation.default_mismatch, Some(CheckLevel::Error));
        assert_eq!(validation.duplicate_literal, Some(CheckLevel::Ignore));
        assert_eq!(config.compose.unwrap().import_all, Some(CheckLevel::Warn));
        assert_eq!(config.output.unwrap().pretty, Some(false));
    }

    #[test]
    fn partial_table() {
        let config: ConfigFile = toml::from_str("[validation]\ndefault_mismatch = \"warn\"").unwrap();
        let validation = config.validation.unwrap();
        assert_eq!(validation.default_mismatch, Some(CheckLevel::Warn));
        assert!(validation.duplicate_literal.is_none());
    }

    #[test]
    fn invalid_level_rejected() {
        let result: Result<ConfigFile, _> = toml::from_str("[compose]\nimport_all = \"deny\"");
        assert!(result.is_err());
    }

    #[test]
    fn reject_unknown_fields() {
        let toml = r#"
            [validation]
            default_mismatch = "warn"
            unknown_field = true
        "#;
        let result: Result<ConfigFile, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn roundtrip() {
        let config = ConfigFile {
            validation: Some(ValidationConfig {
                default_mismatch: Some(CheckLevel::Error),
                duplicate_literal: Some(CheckLevel::Warn),
            }),
            compose: Some(ComposeConfig {
                import_all: Some(CheckLevel::Ignore),
            }),
            output: Some(OutputConfig { pretty: Some(true) }),
        };

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: ConfigFile = toml::from_str(&toml).unwrap();
        assert_eq!(config, parsed);
    }
}
