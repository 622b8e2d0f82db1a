//! Stack machine that folds postfix tokens into a [`Filter`] tree.

use super::ast::{Condition, Filter, Node};
use super::cast::cast;
use super::error::{FilterError, FilterResult};
use super::lexer::{FilterToken, PositionedToken};
use super::value::Value;
use crate::operator::Operator;

/// An entry on the builder stack.
#[derive(Debug)]
enum Operand {
    /// A word not yet consumed by any operator.
    Text(String),
    Condition(Condition),
    Filter(Filter),
}

impl From<Operand> for Node {
    fn from(operand: Operand) -> Self {
        match operand {
            Operand::Text(text) => Node::Raw(text),
            Operand::Condition(condition) => Node::Condition(condition),
            Operand::Filter(filter) => Node::Filter(filter),
        }
    }
}

/// Builds a filter tree from postfix tokens.
///
/// - `AND` / `OR` pop two entries of any kind into a new group. Words that
///   were never consumed become raw SQL fragments.
/// - Comparisons pop a literal and a column, both plain words.
/// - `IN` / `NOT IN` gather every consecutive word below the top, since a
///   list such as `1, 2` arrives as separate words. The deepest one is the
///   column; the rest are joined and split on commas.
/// - `IS NULL` / `IS NOT NULL` pop a column.
///
/// The stack must end with exactly one group or condition.
///
/// # Errors
///
/// Returns a [`FilterError`] describing the first reduction that could not
/// be applied, or why the final stack is not a single tree.
pub fn build(postfix: Vec<PositionedToken>) -> FilterResult<Filter> {
    let mut stack: Vec<Operand> = Vec::new();

    for PositionedToken { token, position } in postfix {
        match token {
            FilterToken::And => reduce_group(&mut stack, Operator::AND, position)?,
            FilterToken::Or => reduce_group(&mut stack, Operator::OR, position)?,
            FilterToken::Compare(operator) => {
                let literal = pop_text(&mut stack, &operator, position)?;
                let column = pop_text(&mut stack, &operator, position)?;
                stack.push(Operand::Condition(Condition {
                    column,
                    operator,
                    value: Some(Value::Scalar(cast(&literal))),
                }));
            }
            FilterToken::In(operator) => {
                let mut run = Vec::new();
                while let Some(Operand::Text(_)) = stack.last() {
                    if let Some(Operand::Text(text)) = stack.pop() {
                        run.push(text);
                    }
                }
                // `run` is top-first, so the column is last.
                let column = run.pop();
                let (Some(column), false) = (column, run.is_empty()) else {
                    return Err(FilterError::missing_operand(operator.as_str(), position));
                };
                run.reverse();
                let items = split_list(&run.concat()).into_iter().map(cast).collect();
                stack.push(Operand::Condition(Condition {
                    column,
                    operator,
                    value: Some(Value::List(items)),
                }));
            }
            FilterToken::NullTest(operator) => {
                let column = pop_text(&mut stack, &operator, position)?;
                stack.push(Operand::Condition(Condition {
                    column,
                    operator,
                    value: None,
                }));
            }
            FilterToken::Word(text) => stack.push(Operand::Text(text)),
            FilterToken::OpenParen | FilterToken::CloseParen => {
                return Err(FilterError::UnbalancedParenthesis { position });
            }
        }
    }

    if stack.len() != 1 {
        return Err(FilterError::IncompleteExpression {
            remaining: stack.len(),
        });
    }

    match stack.pop() {
        Some(Operand::Filter(filter)) => Ok(filter),
        Some(Operand::Condition(condition)) => Ok(Filter::leaf(condition)),
        Some(Operand::Text(text)) => Err(FilterError::lone_operand(text)),
        None => Err(FilterError::IncompleteExpression { remaining: 0 }),
    }
}

/// Pops two entries of any kind and pushes them back as one group.
fn reduce_group(stack: &mut Vec<Operand>, operator: Operator, position: usize) -> FilterResult<()> {
    let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
        return Err(FilterError::missing_operand(operator.as_str(), position));
    };
    stack.push(Operand::Filter(Filter {
        operator,
        conditions: vec![left.into(), right.into()],
    }));
    Ok(())
}

/// Pops a plain word for `operator`.
fn pop_text(stack: &mut Vec<Operand>, operator: &Operator, position: usize) -> FilterResult<String> {
    match stack.pop() {
        Some(Operand::Text(text)) => Ok(text),
        Some(_) => Err(FilterError::unexpected_operand(operator.as_str(), position)),
        None => Err(FilterError::missing_operand(operator.as_str(), position)),
    }
}

/// Splits an `IN` list on commas that are not inside quotes.
fn split_list(text: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (c, quote) {
            ('\\', Some(_)) => escaped = true,
            ('\'' | '"', None) => quote = Some(c),
            (c, Some(open)) if c == open => quote = None,
            (',', None) => {
                items.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&text[start..]);
    items
}
