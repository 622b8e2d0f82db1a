//! Command implementations for the crq CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod completions;
pub mod config;
pub mod criteria;
pub mod parse;
pub mod sort;
pub mod sql;
pub mod tokens;

use std::env;

use criteria_rs::filter::{Filter, FilterError, FilterParser, ParseOptions};
use tracing::warn;

use crate::cli::Cli;
use config::Config;

/// Page size used when neither `--size` nor the config file sets one.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Filter parsing error.
    #[error("filter error: {0}")]
    Filter(#[from] FilterError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
    /// Parser configured from flags and the config file.
    pub parser: FilterParser,
    /// Whether a malformed filter is an error instead of a match-all.
    pub strict: bool,
    /// Page size applied when a command does not set one.
    pub page_size: u64,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    ///
    /// Flags win over the config file; the config file wins over defaults.
    pub fn from_cli(cli: &Cli, config: &Config) -> Self {
        let defaults = ParseOptions::default();
        let options = ParseOptions {
            normalize: !cli.no_normalize && config.filter.normalize.unwrap_or(defaults.normalize),
        };

        Self {
            json_output: cli.json,
            use_colors: !cli.no_color
                && config.output.color.unwrap_or(true)
                && env::var_os("NO_COLOR").is_none(),
            quiet: cli.quiet,
            verbose: cli.verbose,
            parser: FilterParser::with_options(options),
            strict: cli.strict || config.filter.strict.unwrap_or(false),
            page_size: config.page.size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    /// Parses a filter with the configured parser.
    ///
    /// In strict mode a malformed filter is an error. Otherwise a warning is
    /// logged and the filter degrades to empty, which matches every row.
    pub fn parse_filter(&self, input: &str) -> Result<Filter> {
        match self.parser.try_parse(input) {
            Ok(filter) => Ok(filter),
            Err(err) if self.strict => Err(err.into()),
            Err(err) => {
                warn!("{err}; using an empty filter");
                Ok(Filter::default())
            }
        }
    }
}
