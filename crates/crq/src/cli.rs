//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the crq CLI.

use clap::{Parser, Subcommand, ValueEnum};

/// crq - Inspect filter expressions and query criteria
#[derive(Parser, Debug)]
#[command(name = "crq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Keep keyword case as typed (only uppercase keywords are recognized)
    #[arg(long, global = true)]
    pub no_normalize: bool,

    /// Fail on malformed filters instead of falling back to an empty filter
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a filter expression and print its tree
    #[command(alias = "p")]
    Parse {
        /// Filter expression (e.g., "a = 1 AND b IS NULL")
        filter: String,
    },

    /// Compile a filter expression to a WHERE clause and arguments
    Sql {
        /// Filter expression
        filter: String,
    },

    /// Show the tokens and postfix order of a filter expression
    Tokens {
        /// Filter expression
        filter: String,
    },

    /// Parse a sort specification (e.g., "created,-updated")
    Sort {
        /// Comma-separated columns; prefix with '-' for descending
        #[arg(allow_hyphen_values = true)]
        spec: String,
    },

    /// Build full query criteria from a filter, sort, and page bounds
    #[command(alias = "c")]
    Criteria {
        /// Filter expression
        #[arg(short, long, default_value = "")]
        filter: String,

        /// Sort specification
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        sort: String,

        /// Rows to skip (negative values become 0)
        #[arg(long, allow_negative_numbers = true)]
        offset: Option<i64>,

        /// Page size (values below 1 become 1; default from config)
        #[arg(long, allow_negative_numbers = true)]
        size: Option<i64>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Show config file path
    Path,

    /// Write a commented default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., filter.strict, page.size)
        key: String,

        /// Configuration value
        value: String,
    },
}
