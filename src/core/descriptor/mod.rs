//! core::descriptor
//!
//! Property descriptor schema.
//!
//! # Modules
//!
//! - [`schema`] - The [`Descriptor`] record, its builder and wire form
//! - [`shape`] - Structured reading of a type summary
//! - [`check`] - Opt-in content checks (default/type mismatch, repeated literals)
//!
//! # Schema Design
//!
//! - Statically shaped: a `Descriptor` value is always complete
//! - Strict parsing: unknown fields are rejected
//! - The type summary stays a display string; [`shape::TypeShape`] is derived
//!   from it on demand

pub mod check;
pub mod schema;
pub mod shape;

pub use check::{CheckLevel, ValidationOptions};
pub use schema::{Descriptor, DescriptorBuilder, SchemaError};
pub use shape::TypeShape;
