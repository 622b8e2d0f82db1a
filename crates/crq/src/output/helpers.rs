//! Common helper functions for output formatting.

use criteria_rs::filter::{Condition, FilterToken, Scalar, Value};
use criteria_rs::Operator;
use owo_colors::OwoColorize;

/// Formats a section heading.
pub fn format_heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Formats a column name.
pub fn format_column(column: &str, use_colors: bool) -> String {
    if use_colors {
        column.cyan().to_string()
    } else {
        column.to_string()
    }
}

/// Formats an operator keyword or symbol.
pub fn format_operator(operator: &Operator, use_colors: bool) -> String {
    if use_colors {
        operator.yellow().to_string()
    } else {
        operator.to_string()
    }
}

/// Formats a literal value.
pub fn format_value(value: &Value, use_colors: bool) -> String {
    if use_colors {
        value.green().to_string()
    } else {
        value.to_string()
    }
}

/// Returns the type name shown next to a bound argument.
pub fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Scalar(scalar) => scalar.type_name(),
        Value::List(_) => "list",
    }
}

/// Formats a condition as `column operator value`.
pub fn format_condition(condition: &Condition, use_colors: bool) -> String {
    let column = format_column(&condition.column, use_colors);
    let operator = format_operator(&condition.operator, use_colors);
    let null = Value::Scalar(Scalar::Null);
    let value = format_value(condition.value.as_ref().unwrap_or(&null), use_colors);
    format!("{column} {operator} {value}")
}

/// Returns a short name for the kind of a token.
pub fn token_kind(token: &FilterToken) -> &'static str {
    match token {
        FilterToken::And | FilterToken::Or => "connective",
        FilterToken::Compare(_) => "compare",
        FilterToken::In(_) => "membership",
        FilterToken::NullTest(_) => "null-test",
        FilterToken::OpenParen | FilterToken::CloseParen => "paren",
        FilterToken::Word(_) => "word",
    }
}
