//! core::types
//!
//! Strong types for registry concepts.
//!
//! # Types
//!
//! - [`PropName`] - Validated property name (the key of a descriptor)
//! - [`GroupName`] - Validated name of a descriptor group
//! - [`Category`] - Presentation tag such as "General" or "Style"
//! - [`DefaultValue`] - Typed literal documenting a property's default
//!
//! # Validation
//!
//! These types enforce validity at construction time. An empty property
//! name or a blank category cannot be represented, so every table handed to
//! a renderer is well-formed by construction.
//!
//! # Examples
//!
//! ```
//! use propdoc::core::types::{Category, PropName};
//!
//! let name = PropName::new("verticalAlign").unwrap();
//! assert_eq!(name.as_str(), "verticalAlign");
//! assert_eq!(Category::general().as_str(), "General");
//!
//! assert!(PropName::new("").is_err());
//! assert!(PropName::new("has space").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid property name: {0}")]
    InvalidPropName(String),

    #[error("invalid group name: {0}")]
    InvalidGroupName(String),

    #[error("invalid category: {0}")]
    InvalidCategory(String),
}

/// A validated property name.
///
/// Property names are the keys of groups and tables. They must be non-empty
/// and contain no whitespace or control characters. Beyond that the
/// registry does not impose an identifier grammar, since components are free
/// to name their props (`onMouseDown`, `aria-label`, `data-testid`).
///
/// # Example
///
/// ```
/// use propdoc::core::types::PropName;
///
/// assert!(PropName::new("onMouseDown").is_ok());
/// assert!(PropName::new("aria-label").is_ok());
/// assert!(PropName::new("").is_err());
/// assert!(PropName::new("icon size").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PropName(String);

impl PropName {
    /// Create a new validated property name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidPropName` if the name is empty or contains
    /// whitespace or control characters.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TypeError::InvalidPropName(
                "property name cannot be empty".into(),
            ));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(TypeError::InvalidPropName(format!(
                "property name '{}' cannot contain whitespace",
                name.escape_debug()
            )));
        }
        if name.chars().any(char::is_control) {
            return Err(TypeError::InvalidPropName(
                "property name cannot contain control characters".into(),
            ));
        }
        Ok(Self(name))
    }

    /// Get the property name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PropName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for PropName {
    type Error = TypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PropName> for String {
    fn from(name: PropName) -> Self {
        name.0
    }
}

impl AsRef<str> for PropName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for PropName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PropName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated group name.
///
/// Group names label a reusable set of descriptors ("Legend", "Axis
/// events"). They appear in provenance and error messages, so they may
/// contain spaces, but not leading/trailing whitespace or control characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupName(String);

impl GroupName {
    /// Create a new validated group name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidGroupName` if the name is blank, padded
    /// with whitespace, or contains control characters.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TypeError::InvalidGroupName(
                "group name cannot be empty".into(),
            ));
        }
        if name.trim() != name {
            return Err(TypeError::InvalidGroupName(format!(
                "group name '{name}' has leading or trailing whitespace"
            )));
        }
        if name.chars().any(char::is_control) {
            return Err(TypeError::InvalidGroupName(
                "group name cannot contain control characters".into(),
            ));
        }
        Ok(Self(name))
    }

    /// Get the group name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for GroupName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<GroupName> for String {
    fn from(name: GroupName) -> Self {
        name.0
    }
}

impl AsRef<str> for GroupName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for GroupName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GroupName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A presentation category tag.
///
/// Categories only drive grouping in the rendered table. The set is open,
/// but the common tags have constructors so authors spell them the same way
/// across a group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    /// Create a new category tag.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidCategory` if the tag is blank.
    pub fn new(tag: impl Into<String>) -> Result<Self, TypeError> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(TypeError::InvalidCategory("category cannot be empty".into()));
        }
        Ok(Self(tag))
    }

    /// The "General" category.
    pub fn general() -> Self {
        Self("General".to_string())
    }

    /// The "Style" category.
    pub fn style() -> Self {
        Self("Style".to_string())
    }

    /// Get the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Category {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A documented default value.
///
/// Defaults are literals shaped like the property's type: a number, a
/// string tag, a boolean, or a structural array/object literal. `null` is
/// not a default; absence of a default is expressed by `Option::None` on the
/// descriptor.
///
/// # Example
///
/// ```
/// use propdoc::core::types::{DefaultValue, ValueKind};
///
/// let v: DefaultValue = serde_json::from_str("14").unwrap();
/// assert_eq!(v.kind(), ValueKind::Number);
///
/// let v: DefaultValue = serde_json::from_str("\"horizontal\"").unwrap();
/// assert_eq!(v.as_text(), Some("horizontal"));
///
/// assert!(serde_json::from_str::<DefaultValue>("null").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// Boolean literal
    Bool(bool),
    /// Numeric literal
    Number(serde_json::Number),
    /// String literal (often one tag of a literal union)
    Text(String),
    /// Array literal
    Array(Vec<serde_json::Value>),
    /// Object literal
    Object(serde_json::Map<String, serde_json::Value>),
}

/// The shape of a [`DefaultValue`], used when checking it against a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Number,
    Text,
    Array,
    Object,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::Text => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        f.write_str(s)
    }
}

impl DefaultValue {
    /// Get the shape of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            DefaultValue::Bool(_) => ValueKind::Bool,
            DefaultValue::Number(_) => ValueKind::Number,
            DefaultValue::Text(_) => ValueKind::Text,
            DefaultValue::Array(_) => ValueKind::Array,
            DefaultValue::Object(_) => ValueKind::Object,
        }
    }

    /// Get the string content if this is a string literal.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DefaultValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the numeric value if this is a number literal.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DefaultValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(s: &str) -> Self {
        DefaultValue::Text(s.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(s: String) -> Self {
        DefaultValue::Text(s)
    }
}

impl From<bool> for DefaultValue {
    fn from(b: bool) -> Self {
        DefaultValue::Bool(b)
    }
}

impl From<i64> for DefaultValue {
    fn from(n: i64) -> Self {
        DefaultValue::Number(n.into())
    }
}

impl std::fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefaultValue::Bool(b) => write!(f, "{b}"),
            DefaultValue::Number(n) => write!(f, "{n}"),
            DefaultValue::Text(s) => write!(f, "'{s}'"),
            DefaultValue::Array(items) => {
                write!(f, "{}", serde_json::Value::Array(items.clone()))
            }
            DefaultValue::Object(map) => write!(f, "{}", serde_json::Value::Object(map.clone())),
        }
    }
}
