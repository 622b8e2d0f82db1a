//! Query criteria: a filter, sort keys, and pagination bounds.

use serde::Serialize;

use crate::filter::{Filter, FilterParser};
use crate::sort::{parse_sort, SortBy};

/// Everything a query engine needs to select one page of rows.
///
/// Offset and size are normalized when set: a negative offset becomes 0 and
/// a size below 1 becomes 1.
///
/// # Example
///
/// ```
/// use criteria_rs::Criteria;
///
/// let mut criteria = Criteria::parse("status = 1", "-created");
/// criteria.set_offset(-5).set_size(0);
/// assert_eq!(criteria.offset(), 0);
/// assert_eq!(criteria.size(20), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Criteria {
    pub filter: Filter,
    pub sort_by: SortBy,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<u64>,
}

impl Criteria {
    /// Creates criteria from a filter and sort keys, with no pagination.
    pub fn new(filter: Filter, sort_by: SortBy) -> Self {
        Self {
            filter,
            sort_by,
            ..Self::default()
        }
    }

    /// Parses a filter expression and a sort specification with the
    /// default parser.
    ///
    /// A malformed filter degrades to an empty one.
    pub fn parse(filter: &str, sort: &str) -> Self {
        Self::parse_with(&FilterParser::new(), filter, sort)
    }

    /// Same as [`parse`](Self::parse), using the given parser.
    pub fn parse_with(parser: &FilterParser, filter: &str, sort: &str) -> Self {
        Self::new(parser.parse(filter), parse_sort(sort))
    }

    pub fn set_filter(&mut self, filter: Filter) -> &mut Self {
        self.filter = filter;
        self
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) -> &mut Self {
        self.sort_by = sort_by;
        self
    }

    /// Sets the number of rows to skip. Negative values become 0.
    pub fn set_offset(&mut self, offset: i64) -> &mut Self {
        self.offset = Some(u64::try_from(offset).unwrap_or(0));
        self
    }

    /// Sets the page size. Values below 1 become 1.
    pub fn set_size(&mut self, size: i64) -> &mut Self {
        self.size = Some(u64::try_from(size).unwrap_or(0).max(1));
        self
    }

    /// Returns the offset, or 0 when unset.
    pub fn offset(&self) -> u64 {
        self.offset.unwrap_or(0)
    }

    /// Returns the page size, or `default` when unset.
    pub fn size(&self, default: u64) -> u64 {
        self.size.unwrap_or(default)
    }

    /// Returns true if an offset was set.
    pub fn has_offset(&self) -> bool {
        self.offset.is_some()
    }

    /// Returns true if a page size was set.
    pub fn has_size(&self) -> bool {
        self.size.is_some()
    }
}
