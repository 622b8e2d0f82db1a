//! Tokens command implementation.
//!
//! Shows each stage of the filter pipeline: the prepared input, its tokens,
//! and their postfix order.

use criteria_rs::filter::{to_postfix, Lexer};

use super::{CommandContext, Result};
use crate::output::{format_tokens_json, format_tokens_table};

/// Executes the tokens command.
///
/// Parenthesis mismatches are reported alongside the tokens rather than as
/// an error, since the point is to inspect malformed input.
pub fn execute(ctx: &CommandContext, input: &str) -> Result<()> {
    let prepared = ctx.parser.prepare(input);
    let tokens = Lexer::new(&prepared).tokenize();
    let postfix = to_postfix(tokens.clone());

    if ctx.json_output {
        let output = format_tokens_json(&prepared, &tokens, &postfix.tokens, &postfix.errors)?;
        println!("{output}");
    } else if !ctx.quiet {
        print!(
            "{}",
            format_tokens_table(
                &prepared,
                &tokens,
                &postfix.tokens,
                &postfix.errors,
                ctx.use_colors
            )
        );
    }

    Ok(())
}
