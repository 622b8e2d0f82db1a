//! Sql command implementation.
//!
//! Compiles a filter expression to a WHERE clause with `?` placeholders.

use tracing::debug;

use super::{CommandContext, Result};
use crate::output::{format_sql_json, format_sql_text};

/// Executes the sql command.
pub fn execute(ctx: &CommandContext, input: &str) -> Result<()> {
    let filter = ctx.parse_filter(input)?;
    let (where_clause, args) = filter.to_sql();
    debug!(placeholders = args.len(), "compiled filter");

    if ctx.json_output {
        println!("{}", format_sql_json(&where_clause, &args)?);
    } else if !ctx.quiet {
        print!("{}", format_sql_text(&where_clause, &args, ctx.use_colors));
    }

    Ok(())
}
