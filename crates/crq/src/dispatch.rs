//! Command dispatch module for routing CLI commands to their handlers.

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::commands::{self, CommandContext, CommandError, Result};

/// Routes the parsed command line to its handler.
pub fn execute(cli: &Cli, ctx: &CommandContext) -> Result<()> {
    match &cli.command {
        Some(Commands::Parse { filter }) => commands::parse::execute(ctx, filter),
        Some(Commands::Sql { filter }) => commands::sql::execute(ctx, filter),
        Some(Commands::Tokens { filter }) => commands::tokens::execute(ctx, filter),
        Some(Commands::Sort { spec }) => commands::sort::execute(ctx, spec),
        Some(Commands::Criteria {
            filter,
            sort,
            offset,
            size,
        }) => {
            let opts = commands::criteria::CriteriaOptions {
                filter: filter.clone(),
                sort: sort.clone(),
                offset: *offset,
                size: *size,
            };
            commands::criteria::execute(ctx, &opts)
        }
        Some(Commands::Config { command }) => dispatch_config(ctx, command),
        Some(Commands::Completions { shell }) => {
            commands::completions::execute(*shell).map_err(CommandError::Io)
        }
        None => {
            if !ctx.quiet {
                println!("crq - filter expression and query criteria inspector");
                println!("Use --help for usage information");
            }
            Ok(())
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
        Some(ConfigCommands::Init { force }) => commands::config::execute_init(ctx, *force),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
    }
}
