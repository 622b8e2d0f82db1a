//! Entry point tying the filter pipeline together.

use std::borrow::Cow;

use serde::Serialize;
use tracing::{debug, trace};

use super::ast::Filter;
use super::builder::build;
use super::error::FilterResult;
use super::lexer::{normalize, Lexer};
use super::postfix::to_postfix;

/// Per-parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParseOptions {
    /// Uppercase keyword regions (`and`, `is not null`, ...) before
    /// tokenizing, so keywords are case-insensitive.
    pub normalize: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { normalize: true }
    }
}

/// Parser for filter expressions.
///
/// The pipeline is: optional keyword normalization, tokenizing,
/// precedence reordering into postfix, then folding into a [`Filter`].
///
/// # Grammar
///
/// ```text
/// expression ::= expression ("AND" | "OR") expression
///              | "(" expression ")"
///              | column compare literal
///              | column ("IN" | "NOT IN") literal ("," literal)*
///              | column ("IS NULL" | "IS NOT NULL")
///              | raw-fragment
/// compare    ::= "=" | "<>" | "!=" | "<" | "<=" | ">" | ">="
///              | "LIKE" | "NOT LIKE" | "ILIKE" | "NOT ILIKE"
/// ```
///
/// # Operator Precedence (highest to lowest)
///
/// 1. comparisons, `IN`, null tests
/// 2. `AND`
/// 3. `OR`
///
/// All binary operators are left-associative.
///
/// # Example
///
/// ```
/// use criteria_rs::filter::{FilterParser, ParseOptions};
///
/// let filter = FilterParser::new().parse("status in 2,3 and title is null");
/// assert_eq!(filter.to_sql().0, "status IN (?) AND title IS NULL");
///
/// assert!(FilterParser::new().parse("(a = 1").is_empty());
///
/// let raw = FilterParser::with_options(ParseOptions { normalize: false });
/// assert!(raw.try_parse("a = 1 and b = 2").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterParser {
    options: ParseOptions,
}

impl FilterParser {
    /// Creates a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with the given options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Returns the parser's options.
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Trims the input and, if enabled, normalizes keyword case.
    pub fn prepare<'a>(&self, input: &'a str) -> Cow<'a, str> {
        let trimmed = input.trim();
        if self.options.normalize {
            normalize(trimmed)
        } else {
            Cow::Borrowed(trimmed)
        }
    }

    /// Parses an expression, degrading to an empty filter on malformed
    /// input.
    ///
    /// An empty filter matches every row. Use [`try_parse`](Self::try_parse)
    /// when that must be told apart from a deliberately empty expression.
    pub fn parse(&self, input: &str) -> Filter {
        self.try_parse(input).unwrap_or_else(|err| {
            debug!(input, error = %err, "filter degraded to empty");
            Filter::default()
        })
    }

    /// Parses an expression, reporting why it could not be built.
    ///
    /// Blank input is not an error and yields an empty filter.
    ///
    /// # Errors
    ///
    /// Returns the first unbalanced parenthesis, or else the first
    /// [`FilterError`](super::FilterError) raised while building the tree.
    pub fn try_parse(&self, input: &str) -> FilterResult<Filter> {
        let prepared = self.prepare(input);
        if prepared.is_empty() {
            return Ok(Filter::default());
        }
        trace!(input = %prepared, "prepared filter");

        let tokens = Lexer::new(&prepared).tokenize();
        trace!(count = tokens.len(), ?tokens, "tokenized filter");

        let postfix = to_postfix(tokens);
        trace!(tokens = ?postfix.tokens, "reordered filter");
        if let Some(err) = postfix.errors.into_iter().next() {
            return Err(err);
        }

        build(postfix.tokens)
    }
}
