//! Operator-precedence reordering (shunting-yard) into postfix order.

use super::error::FilterError;
use super::lexer::{FilterToken, PositionedToken};

/// Result of reordering a token stream.
#[derive(Debug, Clone, PartialEq)]
pub struct PostfixResult {
    /// Tokens in postfix order. Parentheses never appear here.
    pub tokens: Vec<PositionedToken>,
    /// Parenthesis mismatches found along the way. Offending parentheses are
    /// dropped and reordering continues.
    pub errors: Vec<FilterError>,
}

/// Converts infix tokens to postfix order.
///
/// `OR` binds loosest, then `AND`, then every comparison in one tier. Within
/// a tier operators are left-associative. Words pass straight to the output.
///
/// # Example
///
/// ```
/// use criteria_rs::filter::{to_postfix, Lexer};
///
/// let postfix = to_postfix(Lexer::new("a = 1 OR b = 2").tokenize());
/// let text: Vec<String> = postfix.tokens.iter().map(|t| t.token.to_string()).collect();
/// assert_eq!(text, ["a", "1", "=", "b", "2", "=", "OR"]);
/// ```
pub fn to_postfix(tokens: Vec<PositionedToken>) -> PostfixResult {
    let mut stack: Vec<PositionedToken> = Vec::new();
    let mut output = Vec::with_capacity(tokens.len());
    let mut errors = Vec::new();

    for positioned in tokens {
        match positioned.token {
            FilterToken::OpenParen => stack.push(positioned),
            FilterToken::CloseParen => {
                let mut matched = false;
                while let Some(top) = stack.pop() {
                    if top.token == FilterToken::OpenParen {
                        matched = true;
                        break;
                    }
                    output.push(top);
                }
                if !matched {
                    errors.push(FilterError::UnbalancedParenthesis {
                        position: positioned.position,
                    });
                }
            }
            FilterToken::Word(_) => output.push(positioned),
            _ => {
                let precedence = positioned.token.precedence();
                while stack
                    .last()
                    .and_then(|top| top.token.precedence())
                    .is_some_and(|top| Some(top) >= precedence)
                {
                    if let Some(top) = stack.pop() {
                        output.push(top);
                    }
                }
                stack.push(positioned);
            }
        }
    }

    while let Some(top) = stack.pop() {
        if top.token == FilterToken::OpenParen {
            errors.push(FilterError::UnbalancedParenthesis {
                position: top.position,
            });
        } else {
            output.push(top);
        }
    }

    PostfixResult {
        tokens: output,
        errors,
    }
}
