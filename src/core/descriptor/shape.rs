//! core::descriptor::shape
//!
//! Structured reading of a type summary.
//!
//! Type summaries are display strings written for humans:
//! `'line' | 'plainline' | 'square'`, `horizontal | vertical`, `Number`,
//! `ReactElement | Function`. [`TypeShape::parse`] splits a summary on its
//! top-level `|` and classifies every member as a literal tag, a known
//! primitive, or an opaque type name. The display string itself is never
//! rewritten; the shape only exists so defaults can be checked against it.
//!
//! # Example
//!
//! ```
//! use propdoc::core::descriptor::shape::{Primitive, TypeMember, TypeShape};
//!
//! let shape = TypeShape::parse("horizontal | vertical");
//! assert_eq!(shape.literals(), Some(vec!["horizontal", "vertical"]));
//!
//! let shape = TypeShape::parse("ReactElement | Function");
//! assert_eq!(shape.members()[1], TypeMember::Primitive(Primitive::Function));
//! ```

use crate::core::types::DefaultValue;

/// A known primitive or structural type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Number,
    String,
    Boolean,
    Object,
    Array,
    Function,
    ReactElement,
    ReactNode,
    Any,
}

impl Primitive {
    /// Look up a primitive by its summary spelling (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let p = match name.to_ascii_lowercase().as_str() {
            "number" => Primitive::Number,
            "string" => Primitive::String,
            "boolean" | "bool" => Primitive::Boolean,
            "object" => Primitive::Object,
            "array" => Primitive::Array,
            "function" => Primitive::Function,
            "reactelement" | "element" => Primitive::ReactElement,
            "reactnode" => Primitive::ReactNode,
            "any" | "unknown" => Primitive::Any,
            _ => return None,
        };
        Some(p)
    }

    fn accepts(self, value: &DefaultValue) -> bool {
        match (self, value) {
            (Primitive::Any, _) => true,
            (Primitive::Number, DefaultValue::Number(_)) => true,
            (Primitive::String, DefaultValue::Text(_)) => true,
            (Primitive::Boolean, DefaultValue::Bool(_)) => true,
            (Primitive::Object, DefaultValue::Object(_)) => true,
            (Primitive::Array, DefaultValue::Array(_)) => true,
            (Primitive::ReactNode, v) => !matches!(v, DefaultValue::Object(_)),
            _ => false,
        }
    }
}

/// A literal member of a union.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Literal {
    fn accepts(&self, value: &DefaultValue) -> bool {
        match (self, value) {
            (Literal::Text(tag), DefaultValue::Text(v)) => tag == v,
            (Literal::Number(n), DefaultValue::Number(v)) => v.as_f64() == Some(*n),
            (Literal::Bool(b), DefaultValue::Bool(v)) => b == v,
            _ => false,
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Text(s) => write!(f, "'{s}'"),
            Literal::Number(n) => write!(f, "{n}"),
            Literal::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// One member of a type union.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeMember {
    Literal(Literal),
    Primitive(Primitive),
    /// A type name the registry does not know (`CSSProperties`, `Props`).
    Named(String),
}

/// The parsed union behind a type summary.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypeShape {
    members: Vec<TypeMember>,
}

impl TypeShape {
    /// Parse a type summary.
    ///
    /// Parsing never fails: anything unrecognized becomes
    /// [`TypeMember::Named`], which accepts every default.
    pub fn parse(summary: &str) -> Self {
        let members = split_union(summary)
            .into_iter()
            .filter(|token| !token.is_empty())
            .map(classify)
            .collect();
        Self { members }
    }

    /// The union members in summary order.
    pub fn members(&self) -> &[TypeMember] {
        &self.members
    }

    /// The string tags, if every member is a string literal.
    ///
    /// This is the closed-enumeration view of the summary.
    pub fn literals(&self) -> Option<Vec<&str>> {
        if self.members.is_empty() {
            return None;
        }
        self.members
            .iter()
            .map(|m| match m {
                TypeMember::Literal(Literal::Text(s)) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Check whether a default value can inhabit this type.
    ///
    /// An opaque [`TypeMember::Named`] member makes the whole shape accept,
    /// since the registry cannot reason about it.
    pub fn accepts(&self, value: &DefaultValue) -> bool {
        if self.members.is_empty() {
            return true;
        }
        self.members.iter().any(|m| match m {
            TypeMember::Literal(lit) => lit.accepts(value),
            TypeMember::Primitive(p) => p.accepts(value),
            TypeMember::Named(_) => true,
        })
    }

    /// Literals listed more than once, in order of their second appearance.
    pub fn duplicate_literals(&self) -> Vec<&Literal> {
        let mut seen: Vec<&Literal> = Vec::new();
        let mut dupes: Vec<&Literal> = Vec::new();
        for member in &self.members {
            if let TypeMember::Literal(lit) = member {
                if seen.contains(&lit) {
                    if !dupes.contains(&lit) {
                        dupes.push(lit);
                    }
                } else {
                    seen.push(lit);
                }
            }
        }
        dupes
    }
}

/// Split a summary on `|` that are not nested in brackets or quotes.
fn split_union(summary: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth: usize = 0;
    let mut quote: Option<char> = None;
    let mut start = 0;
    let mut prev = '\0';

    for (i, c) in summary.char_indices() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' | '`' => quote = Some(c),
                '(' | '[' | '{' | '<' => depth += 1,
                // `=>` is an arrow, not a closing angle bracket
                '>' if prev == '=' => {}
                ')' | ']' | '}' | '>' => depth = depth.saturating_sub(1),
                '|' if depth == 0 => {
                    parts.push(summary[start..i].trim());
                    start = i + c.len_utf8();
                }
                _ => {}
            },
        }
        prev = c;
    }
    parts.push(summary[start..].trim());
    parts
}

fn classify(token: &str) -> TypeMember {
    if let Some(inner) = strip_quotes(token) {
        return TypeMember::Literal(Literal::Text(inner.to_string()));
    }
    match token {
        "true" => return TypeMember::Literal(Literal::Bool(true)),
        "false" => return TypeMember::Literal(Literal::Bool(false)),
        _ => {}
    }
    if let Some(n) = parse_number(token) {
        return TypeMember::Literal(Literal::Number(n));
    }
    if let Some(p) = Primitive::from_name(token) {
        return TypeMember::Primitive(p);
    }
    if token.contains("=>") {
        return TypeMember::Primitive(Primitive::Function);
    }
    if token.ends_with("[]") || token.starts_with("Array<") {
        return TypeMember::Primitive(Primitive::Array);
    }
    if token.starts_with('{') {
        return TypeMember::Primitive(Primitive::Object);
    }
    if is_bare_tag(token) {
        return TypeMember::Literal(Literal::Text(token.to_string()));
    }
    TypeMember::Named(token.to_string())
}

fn strip_quotes(token: &str) -> Option<&str> {
    let first = token.chars().next()?;
    if !matches!(first, '\'' | '"' | '`') || token.len() < 2 || !token.ends_with(first) {
        return None;
    }
    Some(&token[1..token.len() - 1])
}

fn parse_number(token: &str) -> Option<f64> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if !digits.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    token.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Bare tags are lowercase-initial words such as `horizontal` or `top-left`.
fn is_bare_tag(token: &str) -> bool {
    token.starts_with(|c: char| c.is_ascii_lowercase())
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
