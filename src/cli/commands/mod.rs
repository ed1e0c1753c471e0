//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads the catalog and its configuration
//! 2. Calls into [`crate::core`]
//! 3. Formats and displays output
//!
//! Handlers never write files.

mod check;
mod completion;
mod compose;
mod keys;
mod list;
mod workspace;

// Re-export command functions for testing and direct invocation
pub use check::check;
pub use completion::completion;
pub use compose::compose;
pub use keys::keys;
pub use list::list;
pub use workspace::{load, Workspace};

use super::args::Command;
use super::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Check { catalog } => check::check(ctx, &catalog),
        Command::Compose {
            catalog,
            page,
            compact,
        } => compose::compose(ctx, &catalog, &page, compact),
        Command::List { catalog } => list::list(ctx, &catalog),
        Command::Keys { catalog, group } => keys::keys(ctx, &catalog, &group),
        Command::Completion { shell } => completion::completion(shell),
    }
}
