//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this global config file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--strict`: Treat every warning as an error

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// propdoc - Declarative property metadata for component documentation
#[derive(Parser, Debug)]
#[command(name = "propdoc")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the global lookup
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Upgrade every `warn` check level to `error`
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate every group and compose every page of a catalog
    #[command(
        name = "check",
        long_about = "Validate every group and compose every page of a catalog.\n\n\
            Every descriptor must carry a description, a type summary and a category. \
            Content checks (defaults that do not fit the declared type, literals listed \
            twice in a union) and whole-group imports are reported at the level set in \
            the config. Every page is composed, so unknown properties and name \
            collisions are caught here rather than in the rendered docs.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Check a catalog before committing
    propdoc check docs/props.toml

    # Fail on anything that would only be a warning (good for CI)
    propdoc check docs/props.toml --strict

CONFIGURATION:
    Levels come from propdoc.toml next to the catalog, then the global config:
        [validation]
        default_mismatch = \"error\"
        duplicate_literal = \"warn\"
        [compose]
        import_all = \"warn\""
    )]
    Check {
        /// Catalog file (.toml or .json)
        catalog: PathBuf,
    },

    /// Print a page's composed property table as JSON
    #[command(
        name = "compose",
        long_about = "Print a page's composed property table as JSON.\n\n\
            The table is the page's imports in declaration order followed by its local \
            props. Each record carries name, description, typeSummary, category and, \
            when present, typeDetail and defaultValue.\n\n\
            The page is composed under the same check levels as `propdoc check`: a \
            whole-group import or descriptor check at `error` level fails the command \
            instead of printing the table.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Table for the Legend docs page
    propdoc compose docs/props.toml --page Legend

    # Single-line JSON for piping
    propdoc compose docs/props.toml --page Legend --compact | jq '.[].name'"
    )]
    Compose {
        /// Catalog file (.toml or .json)
        catalog: PathBuf,

        /// Page to compose
        #[arg(long, short)]
        page: String,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },

    /// List the groups and pages of a catalog
    #[command(
        name = "list",
        after_help = "\
WORKFLOW EXAMPLES:
    # See what a catalog defines
    propdoc list docs/props.toml"
    )]
    List {
        /// Catalog file (.toml or .json)
        catalog: PathBuf,
    },

    /// Print the property names of one group in order
    #[command(
        name = "keys",
        after_help = "\
WORKFLOW EXAMPLES:
    # Names to paste into an `only = [...]` import
    propdoc keys docs/props.toml --group Legend"
    )]
    Keys {
        /// Catalog file (.toml or .json)
        catalog: PathBuf,

        /// Group to list
        #[arg(long, short)]
        group: String,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
INSTALLATION:
    # Bash
    propdoc completion bash > ~/.local/share/bash-completion/completions/propdoc

    # Zsh
    propdoc completion zsh > ~/.zfunc/_propdoc

    # Fish
    propdoc completion fish > ~/.config/fish/completions/propdoc.fish

    # PowerShell
    propdoc completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn about_comes_from_doc_comment() {
        let cmd = Cli::command();
        let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();
        assert!(about.contains("property metadata"), "about was: {about}");
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["propdoc", "check", "props.toml", "--strict", "-q"]).unwrap();
        assert!(cli.strict);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Command::Check { .. }));
    }

    #[test]
    fn compose_requires_page() {
        assert!(Cli::try_parse_from(["propdoc", "compose", "props.toml"]).is_err());

        let cli = Cli::try_parse_from([
            "propdoc",
            "compose",
            "props.toml",
            "--page",
            "Legend",
            "--compact",
        ])
        .unwrap();
        match cli.command {
            Command::Compose { page, compact, .. } => {
                assert_eq!(page, "Legend");
                assert!(compact);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn completion_shell_value() {
        let cli = Cli::try_parse_from(["propdoc", "completion", "zsh"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Completion { shell: Shell::Zsh }
        ));
    }
}
