//! Error types for the filter parser.
//!
//! The default parse path never surfaces these: a malformed expression
//! degrades to an empty filter. They are returned by
//! [`FilterParser::try_parse`](super::FilterParser::try_parse) so callers can
//! tell a degraded parse apart from an intentionally empty one.

use thiserror::Error;

/// A specialized Result type for filter parsing operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Reasons a filter expression could not be turned into a tree.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// A `)` without a matching `(`, or a `(` that was never closed.
    #[error("unbalanced parenthesis at position {position}")]
    UnbalancedParenthesis {
        /// Byte offset of the offending parenthesis.
        position: usize,
    },

    /// An operator did not find enough operands on the stack.
    #[error("missing operand for {operator} at position {position}")]
    MissingOperand {
        /// The operator that was being reduced.
        operator: String,
        /// Byte offset of the operator.
        position: usize,
    },

    /// A comparison found an already-resolved condition or group where it
    /// expected a plain column name or literal.
    #[error("unexpected operand for {operator} at position {position}")]
    UnexpectedOperand {
        /// The operator that was being reduced.
        operator: String,
        /// Byte offset of the operator.
        position: usize,
    },

    /// The expression did not reduce to a single tree.
    #[error("incomplete expression: {remaining} operands left unreduced")]
    IncompleteExpression {
        /// Number of entries left on the stack.
        remaining: usize,
    },

    /// The whole expression was a single word with no operator applied.
    #[error("expression has no operator: {token}")]
    LoneOperand {
        /// The unreduced word.
        token: String,
    },
}

impl FilterError {
    /// Creates a missing operand error.
    pub fn missing_operand(operator: impl Into<String>, position: usize) -> Self {
        FilterError::MissingOperand {
            operator: operator.into(),
            position,
        }
    }

    /// Creates an unexpected operand error.
    pub fn unexpected_operand(operator: impl Into<String>, position: usize) -> Self {
        FilterError::UnexpectedOperand {
            operator: operator.into(),
            position,
        }
    }

    /// Creates a lone operand error.
    pub fn lone_operand(token: impl Into<String>) -> Self {
        FilterError::LoneOperand {
            token: token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FilterError::UnbalancedParenthesis { position: 4 }.to_string(),
            "unbalanced parenthesis at position 4"
        );
        assert_eq!(
            FilterError::missing_operand("AND", 7).to_string(),
            "missing operand for AND at position 7"
        );
        assert_eq!(
            FilterError::IncompleteExpression { remaining: 2 }.to_string(),
            "incomplete expression: 2 operands left unreduced"
        );
        assert_eq!(
            FilterError::lone_operand("a=1").to_string(),
            "expression has no operator: a=1"
        );
    }
}
