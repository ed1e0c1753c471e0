//! propdoc - Declarative property metadata for component documentation
//!
//! propdoc keeps the documentation metadata of UI component properties in
//! named groups and composes per-component tables from them. A documentation
//! renderer consumes the composed tables as an ordered record list.
//!
//! # Architecture
//!
//! - [`core`] - Descriptor schema, groups, composition, catalogs, config
//! - [`cli`] - Command-line interface layer (parses args, runs commands)
//! - [`ui`] - User-facing output
//!
//! # Correctness Invariants
//!
//! propdoc maintains the following invariants:
//!
//! 1. Property names are unique within a group and within a composed table
//! 2. Every descriptor carries a description, a type summary and a category
//! 3. Composition preserves declaration order and never overwrites an entry
//! 4. Lookups of unknown properties fail loudly

pub mod cli;
pub mod core;
pub mod ui;
