//! Sort specifications such as `created,-updated`.

use std::fmt;

use serde::Serialize;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    /// Returns the SQL keyword for this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sort key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Sort {
    /// Column or expression to order by.
    pub column: String,
    pub order: Order,
}

impl Sort {
    /// Sorts `column` ascending.
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            order: Order::Asc,
        }
    }

    /// Sorts `column` descending.
    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            order: Order::Desc,
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.order)
    }
}

/// Ordered sort keys. The first entry is the primary key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SortBy(Vec<Sort>);

impl SortBy {
    /// Wraps keys in priority order.
    pub fn new(sorts: Vec<Sort>) -> Self {
        Self(sorts)
    }

    /// Returns each key rendered as `column DIRECTION`.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(Sort::to_string).collect()
    }

    /// Iterates over the keys, primary first.
    pub fn iter(&self) -> std::slice::Iter<'_, Sort> {
        self.0.iter()
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no ordering was requested.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_strings().join(", "))
    }
}

impl FromIterator<Sort> for SortBy {
    fn from_iter<I: IntoIterator<Item = Sort>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for SortBy {
    type Item = Sort;
    type IntoIter = std::vec::IntoIter<Sort>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SortBy {
    type Item = &'a Sort;
    type IntoIter = std::slice::Iter<'a, Sort>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parses a comma-separated sort specification.
///
/// A leading `-` sorts that column descending. Blank entries are skipped.
///
/// # Example
///
/// ```
/// use criteria_rs::sort::{parse_sort, Sort};
///
/// let sort_by = parse_sort("a, -b");
/// assert_eq!(sort_by.iter().cloned().collect::<Vec<_>>(), [Sort::asc("a"), Sort::desc("b")]);
/// assert_eq!(sort_by.to_string(), "a ASC, b DESC");
/// ```
pub fn parse_sort(spec: &str) -> SortBy {
    spec.split(',')
        .map(str::trim)
        .map(|entry| match entry.strip_prefix('-') {
            Some(column) => Sort::desc(column.trim()),
            None => Sort::asc(entry),
        })
        .filter(|sort| !sort.column.is_empty())
        .collect()
}
