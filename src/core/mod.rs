//! core
//!
//! Core domain types, schemas, and operations for propdoc.
//!
//! # Modules
//!
//! - [`types`] - Strong types: PropName, GroupName, Category, DefaultValue
//! - [`descriptor`] - Property descriptor schema and checks
//! - [`group`] - Named, immutable descriptor groups
//! - [`compose`] - Table composition: import_all, import_subset, merge
//! - [`catalog`] - Catalog files declaring groups and pages
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Schemas are strict and self-describing
//! - Collisions are errors, never silent overwrites

pub mod catalog;
pub mod compose;
pub mod config;
pub mod descriptor;
pub mod group;
pub mod types;
