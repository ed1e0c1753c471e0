//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! Command results and messages go through this module so quiet and debug
//! modes are handled in one place. Library diagnostics use `tracing`
//! instead.

pub mod output;
