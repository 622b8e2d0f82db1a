//! Sort command implementation.

use criteria_rs::parse_sort;

use super::{CommandContext, Result};
use crate::output::{format_sort_json, format_sort_table};

/// Executes the sort command.
pub fn execute(ctx: &CommandContext, spec: &str) -> Result<()> {
    let sort_by = parse_sort(spec);

    if ctx.json_output {
        println!("{}", format_sort_json(&sort_by)?);
    } else if !ctx.quiet {
        print!("{}", format_sort_table(&sort_by, ctx.use_colors));
    }

    Ok(())
}
