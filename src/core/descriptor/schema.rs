//! core::descriptor::schema
//!
//! The descriptor record: documentation of one property.
//!
//! # Schema Design
//!
//! Descriptors serialize in the Storybook arg shape that documentation
//! renderers already understand:
//!
//! ```json
//! {
//!   "description": "The layout of legend items.",
//!   "table": {
//!     "type": { "summary": "horizontal | vertical" },
//!     "defaultValue": "horizontal",
//!     "category": "General"
//!   }
//! }
//! ```
//!
//! - Required fields (`description`, `table.type.summary`, `table.category`)
//!   are checked when a descriptor is built or parsed; an empty string counts
//!   as missing.
//! - Unknown fields are rejected.
//! - A `defaultValue` is accepted at the top level as well as inside
//!   `table`, and normalized into `table`. Both at once must agree.
//!
//! # Example
//!
//! ```
//! use propdoc::core::descriptor::Descriptor;
//! use propdoc::core::types::Category;
//!
//! let layout = Descriptor::builder()
//!     .description("The layout of legend items.")
//!     .summary("horizontal | vertical")
//!     .default_value("horizontal")
//!     .category(Category::general())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(layout.summary(), "horizontal | vertical");
//! assert_eq!(layout.default_value().and_then(|v| v.as_text()), Some("horizontal"));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::shape::TypeShape;
use crate::core::types::{Category, DefaultValue, TypeError};

/// Errors from descriptor construction and validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SchemaError {
    #[error("descriptor is missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("default value {value} does not match declared type '{summary}'")]
    DefaultMismatch { value: String, summary: String },

    #[error("type '{summary}' lists literal {literal} more than once")]
    DuplicateLiteral { literal: String, summary: String },

    #[error("conflicting default values: {outer} at top level, {inner} in table")]
    ConflictingDefault { outer: String, inner: String },

    #[error("{0}")]
    InvalidValue(#[from] TypeError),
}

/// Documentation of one property.
///
/// Fields are private so a `Descriptor` can only exist in a validated state.
/// Build one with [`Descriptor::builder`] or deserialize it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDescriptor")]
pub struct Descriptor {
    description: String,
    table: TableInfo,
}

/// The `table` block of a descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableInfo {
    #[serde(rename = "type")]
    type_info: TypeInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_value: Option<DefaultValue>,
    category: Category,
}

/// The `table.type` block of a descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeInfo {
    summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl Descriptor {
    /// Start building a descriptor.
    pub fn builder() -> DescriptorBuilder {
        DescriptorBuilder::default()
    }

    /// Free-form description text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Display string of the accepted type.
    pub fn summary(&self) -> &str {
        &self.table.type_info.summary
    }

    /// Extended type detail, typically a multi-line usage example.
    pub fn detail(&self) -> Option<&str> {
        self.table.type_info.detail.as_deref()
    }

    /// Documented default, if any.
    pub fn default_value(&self) -> Option<&DefaultValue> {
        self.table.default_value.as_ref()
    }

    /// Presentation category.
    pub fn category(&self) -> &Category {
        &self.table.category
    }

    /// Structured reading of [`summary`](Self::summary).
    pub fn shape(&self) -> TypeShape {
        TypeShape::parse(self.summary())
    }

    /// Check that the documented default can inhabit the declared type.
    ///
    /// Descriptors without a default always pass.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::DefaultMismatch` when the default's shape is
    /// incompatible with every member of the type union.
    pub fn check_default(&self) -> Result<(), SchemaError> {
        match self.default_value() {
            Some(value) if !self.shape().accepts(value) => Err(SchemaError::DefaultMismatch {
                value: value.to_string(),
                summary: self.summary().to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Check that a literal union does not repeat a member.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::DuplicateLiteral` naming the first repeated
    /// literal.
    pub fn check_literals(&self) -> Result<(), SchemaError> {
        let shape = self.shape();
        match shape.duplicate_literals().first() {
            Some(lit) => Err(SchemaError::DuplicateLiteral {
                literal: lit.to_string(),
                summary: self.summary().to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Builder for [`Descriptor`].
///
/// Every setter is optional at compile time; [`build`](Self::build) reports
/// the first missing required field.
#[derive(Debug, Clone, Default)]
pub struct DescriptorBuilder {
    description: Option<String>,
    summary: Option<String>,
    detail: Option<String>,
    default_value: Option<DefaultValue>,
    category: Option<Category>,
}

impl DescriptorBuilder {
    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the type summary.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the type detail.
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the documented default.
    pub fn default_value(mut self, value: impl Into<DefaultValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Set the category.
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Build the descriptor.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::MissingField` if `description`, `summary` or
    /// `category` is absent or blank.
    pub fn build(self) -> Result<Descriptor, SchemaError> {
        let description = required(self.description, "description")?;
        let summary = required(self.summary, "table.type.summary")?;
        let category = self.category.ok_or(SchemaError::MissingField {
            field: "table.category",
        })?;

        Ok(Descriptor {
            description,
            table: TableInfo {
                type_info: TypeInfo {
                    summary,
                    detail: self.detail,
                },
                default_value: self.default_value,
                category,
            },
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, SchemaError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(SchemaError::MissingField { field }),
    }
}

/// Wire form of a descriptor before required-field checks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct RawDescriptor {
    pub(crate) description: Option<String>,
    pub(crate) default_value: Option<DefaultValue>,
    pub(crate) table: Option<RawTable>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct RawTable {
    #[serde(rename = "type")]
    pub(crate) type_info: Option<RawType>,
    pub(crate) default_value: Option<DefaultValue>,
    pub(crate) category: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawType {
    pub(crate) summary: Option<String>,
    pub(crate) detail: Option<String>,
}

impl TryFrom<RawDescriptor> for Descriptor {
    type Error = SchemaError;

    fn try_from(raw: RawDescriptor) -> Result<Self, Self::Error> {
        let table = raw.table.unwrap_or_default();
        let type_info = table.type_info.unwrap_or_default();

        let default_value = match (raw.default_value, table.default_value) {
            (Some(outer), Some(inner)) if outer != inner => {
                return Err(SchemaError::ConflictingDefault {
                    outer: outer.to_string(),
                    inner: inner.to_string(),
                })
            }
            (outer, inner) => inner.or(outer),
        };

        let mut builder = Descriptor::builder();
        builder.description = raw.description;
        builder.summary = type_info.summary;
        builder.detail = type_info.detail;
        builder.default_value = default_value;
        builder.category = match table.category {
            Some(tag) if !tag.trim().is_empty() => Some(Category::new(tag)?),
            _ => None,
        };
        builder.build()
    }
}
