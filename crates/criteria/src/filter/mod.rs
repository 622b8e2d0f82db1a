//! Filter expression parser and SQL renderer.
//!
//! This module turns a human-typed filter such as
//! `created = '2023-11-23' AND (status IN 2,3 OR title IS NULL)` into a
//! [`Filter`] tree, and renders that tree as a WHERE clause with `?`
//! placeholders and a positional argument list.
//!
//! # Supported Syntax
//!
//! ## Comparisons
//! - `=`, `<>`, `!=`, `<`, `<=`, `>`, `>=`
//! - `LIKE`, `NOT LIKE`, `ILIKE`, `NOT ILIKE`
//!
//! Operators must be separated from their operands by whitespace. An
//! unspaced `a=1` is kept as a raw SQL fragment.
//!
//! ## Membership
//! - `IN`, `NOT IN` followed by a comma-separated list (`IN 1, 2, 3`)
//!
//! ## Null Tests
//! - `IS NULL`, `IS NOT NULL`
//!
//! ## Boolean Operators
//! - `AND`, `OR`
//! - `()` - Grouping
//!
//! ## Literals
//! - `'...'` or `"..."` - string, UUID, or timestamp
//! - `true`, `false`, `null`
//! - integers and floats
//!
//! # Example
//!
//! ```
//! use criteria_rs::filter::FilterParser;
//!
//! let filter = FilterParser::new().parse("a = 1 OR b = 2 AND c = 3");
//! let (sql, args) = filter.to_sql();
//! assert_eq!(sql, "a = (?) OR (b = (?) AND c = (?))");
//! assert_eq!(args.len(), 3);
//! ```

mod ast;
mod builder;
mod cast;
mod error;
mod lexer;
mod parser;
mod postfix;
mod sql;
mod value;

pub use ast::{Condition, Filter, Node};
pub use builder::build;
pub use cast::cast;
pub use error::{FilterError, FilterResult};
pub use lexer::{normalize, FilterToken, Lexer, PositionedToken};
pub use parser::{FilterParser, ParseOptions};
pub use postfix::{to_postfix, PostfixResult};
pub use value::{Scalar, Value};
