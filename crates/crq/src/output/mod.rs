//! Output formatting utilities for the crq CLI.
//!
//! This module provides functions for formatting data as text or JSON.
//! It is organized into submodules by subject:
//!
//! - [`filter`] - Filter trees, WHERE clauses, and token dumps
//! - [`sort`] - Sort keys and full criteria
//! - [`helpers`] - Common formatting utilities (columns, operators, values)

mod filter;
pub mod helpers;
mod sort;

// Filters
pub use filter::{
    format_filter_json, format_filter_tree, format_sql_json, format_sql_text, format_tokens_json,
    format_tokens_table,
};

// Sort and criteria
pub use sort::{format_criteria_json, format_criteria_text, format_sort_json, format_sort_table};
