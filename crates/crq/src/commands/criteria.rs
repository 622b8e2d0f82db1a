//! Criteria command implementation.
//!
//! Builds full query criteria from a filter, a sort specification, and page
//! bounds, then prints them with the compiled WHERE clause.

use criteria_rs::{parse_sort, Criteria};

use super::{CommandContext, Result};
use crate::output::{format_criteria_json, format_criteria_text};

/// Options for the criteria command.
pub struct CriteriaOptions {
    /// Filter expression.
    pub filter: String,
    /// Sort specification.
    pub sort: String,
    /// Rows to skip.
    pub offset: Option<i64>,
    /// Page size.
    pub size: Option<i64>,
}

/// Builds criteria from the options. Unset bounds stay unset.
pub fn build_criteria(ctx: &CommandContext, opts: &CriteriaOptions) -> Result<Criteria> {
    let mut criteria = Criteria::new(ctx.parse_filter(&opts.filter)?, parse_sort(&opts.sort));
    if let Some(offset) = opts.offset {
        criteria.set_offset(offset);
    }
    if let Some(size) = opts.size {
        criteria.set_size(size);
    }
    Ok(criteria)
}

/// Executes the criteria command.
pub fn execute(ctx: &CommandContext, opts: &CriteriaOptions) -> Result<()> {
    let criteria = build_criteria(ctx, opts)?;
    let (where_clause, args) = criteria.filter.to_sql();

    if ctx.json_output {
        let output = format_criteria_json(&criteria, &where_clause, &args, ctx.page_size)?;
        println!("{output}");
    } else if !ctx.quiet {
        print!(
            "{}",
            format_criteria_text(&criteria, &where_clause, &args, ctx.page_size, ctx.use_colors)
        );
    }

    Ok(())
}
