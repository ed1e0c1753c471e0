//! core::descriptor::check
//!
//! Opt-in content checks beyond the required-field schema.
//!
//! Required fields are always enforced. The checks here catch data-quality
//! problems that the schema alone allows, such as a numeric default on a
//! union of string tags. Each check has a [`CheckLevel`] so a project can
//! adopt them gradually.

use serde::{Deserialize, Serialize};

use super::schema::{Descriptor, SchemaError};

/// How a failed check is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckLevel {
    /// Fail validation.
    Error,
    /// Report and continue.
    #[default]
    Warn,
    /// Skip the check.
    Ignore,
}

impl CheckLevel {
    /// Upgrade `Warn` to `Error`; other levels are unchanged.
    pub fn strict(self) -> Self {
        match self {
            CheckLevel::Warn => CheckLevel::Error,
            other => other,
        }
    }
}

/// Levels for each descriptor check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationOptions {
    /// Default value incompatible with the declared type.
    pub default_mismatch: CheckLevel,
    /// Literal listed twice in a type union.
    pub duplicate_literal: CheckLevel,
}

impl ValidationOptions {
    /// Options where every check is an error.
    pub fn strict() -> Self {
        Self {
            default_mismatch: CheckLevel::Error,
            duplicate_literal: CheckLevel::Error,
        }
    }

    /// Options where every check is skipped.
    pub fn lenient() -> Self {
        Self {
            default_mismatch: CheckLevel::Ignore,
            duplicate_literal: CheckLevel::Ignore,
        }
    }
}

impl Descriptor {
    /// Run the opt-in checks.
    ///
    /// Returns the warnings raised by checks at [`CheckLevel::Warn`].
    ///
    /// # Errors
    ///
    /// Returns the first failure of a check at [`CheckLevel::Error`].
    pub fn validate(&self, options: &ValidationOptions) -> Result<Vec<SchemaError>, SchemaError> {
        let mut warnings = Vec::new();
        let checks: [(CheckLevel, fn(&Descriptor) -> Result<(), SchemaError>); 2] = [
            (options.default_mismatch, Descriptor::check_default),
            (options.duplicate_literal, Descriptor::check_literals),
        ];

        for (level, check) in checks {
            if level == CheckLevel::Ignore {
                continue;
            }
            if let Err(e) = check(self) {
                match level {
                    CheckLevel::Error => return Err(e),
                    _ => warnings.push(e),
                }
            }
        }

        Ok(warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Category;

    fn icon_type() -> Descriptor {
        Descriptor::builder()
            .description("The type of icon in each legend item.")
            .summary("'line' | 'square' | 'square'")
            .default_value(14_i64)
            .category(Category::general())
            .build()
            .unwrap()
    }

    #[test]
    fn default_levels_warn() {
        let warnings = icon_type()
            .validate(&ValidationOptions::default())
            .unwrap();
        assert_eq!(warnings.len(), 2);
        assert!(matches!(warnings[0], SchemaError::DefaultMismatch { .. }));
        assert!(matches!(warnings[1], SchemaError::DuplicateLiteral { .. }));
    }

    #[test]
    fn strict_fails_on_first() {
        let err = icon_type()
            .validate(&ValidationOptions::strict())
            .unwrap_err();
        assert!(matches!(err, SchemaError::DefaultMismatch { .. }));
    }

    #[test]
    fn lenient_reports_nothing() {
        let warnings = icon_type()
            .validate(&ValidationOptions::lenient())
            .unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn mixed_levels() {
        let options = ValidationOptions {
            default_mismatch: CheckLevel::Ignore,
            duplicate_literal: CheckLevel::Error,
        };
        let err = icon_type().validate(&options).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateLiteral { .. }));
    }

    #[test]
    fn strict_upgrade() {
        assert_eq!(CheckLevel::Warn.strict(), CheckLevel::Error);
        assert_eq!(CheckLevel::Ignore.strict(), CheckLevel::Ignore);
        assert_eq!(CheckLevel::Error.strict(), CheckLevel::Error);
    }

    #[test]
    fn level_parses_from_toml() {
        #[derive(Deserialize)]
        struct Holder {
            level: CheckLevel,
        }
        let h: Holder = toml::from_str("level = \"ignore\"").unwrap();
        assert_eq!(h.level, CheckLevel::Ignore);
    }
}
