//! Parse command implementation.
//!
//! Parses a filter expression and prints the resulting tree.

use super::{CommandContext, Result};
use crate::output::{format_filter_json, format_filter_tree};

/// Executes the parse command.
pub fn execute(ctx: &CommandContext, input: &str) -> Result<()> {
    let filter = ctx.parse_filter(input)?;

    if ctx.json_output {
        println!("{}", format_filter_json(&filter)?);
    } else if !ctx.quiet {
        print!("{}", format_filter_tree(&filter, ctx.use_colors));
    }

    Ok(())
}
