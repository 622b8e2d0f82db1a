//! Abstract Syntax Tree (AST) for filter expressions.

use serde::Serialize;

use super::value::Value;
use crate::operator::Operator;

/// A leaf predicate: `column operator value`.
///
/// `value` is `None` only for the `IS` family, which renders as
/// `column IS [NOT] NULL`. `IN` and `NOT IN` carry a [`Value::List`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    pub column: String,
    pub operator: Operator,
    pub value: Option<Value>,
}

impl Condition {
    /// Creates a condition comparing `column` against `value`.
    pub fn new(column: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            operator,
            value: Some(value.into()),
        }
    }

    /// Creates `column IS NULL`.
    pub fn is_null(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            operator: Operator::IS,
            value: None,
        }
    }

    /// Creates `column IS NOT NULL`.
    pub fn is_not_null(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            operator: Operator::IS_NOT,
            value: None,
        }
    }
}

/// One entry of a [`Filter`]'s condition list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// A SQL fragment emitted verbatim, such as an unspaced `a=1` operand.
    Raw(String),
    /// A leaf predicate.
    Condition(Condition),
    /// A nested group, rendered in parentheses.
    Filter(Filter),
}

impl From<Condition> for Node {
    fn from(condition: Condition) -> Self {
        Node::Condition(condition)
    }
}

impl From<Filter> for Node {
    fn from(filter: Filter) -> Self {
        Node::Filter(filter)
    }
}

/// A boolean expression tree over conditions.
///
/// Interior nodes hold `AND` or `OR` with two entries; a parsed single
/// condition is wrapped with an empty operator. A filter with no entries is
/// empty and renders as no SQL at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Filter {
    pub operator: Operator,
    pub conditions: Vec<Node>,
}

impl Filter {
    /// Wraps a single node.
    pub fn leaf(node: impl Into<Node>) -> Self {
        Self {
            operator: Operator::EMPTY,
            conditions: vec![node.into()],
        }
    }

    /// Creates an AND filter from two nodes.
    ///
    /// # Example
    ///
    /// ```
    /// use criteria_rs::filter::{Condition, Filter};
    /// use criteria_rs::Operator;
    ///
    /// let filter = Filter::and(
    ///     Condition::new("a", Operator::EQUAL, 1_i64),
    ///     Condition::is_null("b"),
    /// );
    /// assert_eq!(filter.operator, Operator::AND);
    /// assert_eq!(filter.conditions.len(), 2);
    /// ```
    pub fn and(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Self {
            operator: Operator::AND,
            conditions: vec![left.into(), right.into()],
        }
    }

    /// Creates an OR filter from two nodes.
    pub fn or(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Self {
            operator: Operator::OR,
            conditions: vec![left.into(), right.into()],
        }
    }

    /// Returns true if the filter has no conditions.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}
