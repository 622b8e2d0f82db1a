//! Filter, sort, and pagination criteria for SQL queries.
//!
//! This crate parses a small human-typed filter language into a
//! [`Filter`](filter::Filter) tree and compiles it to a WHERE clause with `?`
//! placeholders plus positional arguments. A comma-separated sort string is
//! parsed into [`SortBy`], and [`Criteria`] bundles both with an offset and
//! page size.
//!
//! # Example
//!
//! ```
//! use criteria_rs::Criteria;
//!
//! let mut criteria = Criteria::parse(
//!     "m.created = '2023-11-23' AND m.status IN 2,3",
//!     "m.created,-m.updated",
//! );
//! criteria.set_offset(0).set_size(20);
//!
//! let (sql, args) = criteria.filter.to_sql();
//! assert_eq!(sql, "m.created = (?) AND m.status IN (?)");
//! assert_eq!(args.len(), 2);
//! assert_eq!(criteria.sort_by.to_string(), "m.created ASC, m.updated DESC");
//! ```

pub mod criteria;
pub mod filter;
pub mod operator;
pub mod sort;

pub use criteria::Criteria;
pub use filter::{Filter, FilterError, FilterParser, ParseOptions};
pub use operator::Operator;
pub use sort::{parse_sort, Order, Sort, SortBy};
