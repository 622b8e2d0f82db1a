//! Operator vocabulary shared by conditions and boolean filter nodes.
//!
//! An [`Operator`] is a thin wrapper around its SQL text. The named constants
//! cover everything the filter language emits plus the wider SQL vocabulary,
//! and [`Operator::append`] / [`Operator::prepend`] build multi-word forms such
//! as `NOT IN` or `IS NOT`.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// A SQL operator, identified by its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Operator(Cow<'static, str>);

impl Operator {
    /// No operator. Conditions render it as `=`, filters as `AND`.
    pub const EMPTY: Operator = Operator::from_static("");

    // ==================== Arithmetic ====================
    pub const ADD: Operator = Operator::from_static("+");
    pub const SUB: Operator = Operator::from_static("-");
    pub const MUL: Operator = Operator::from_static("*");
    pub const DIV: Operator = Operator::from_static("/");
    pub const MOD: Operator = Operator::from_static("%");

    // ==================== Bitwise ====================
    pub const BIT_AND: Operator = Operator::from_static("&");
    pub const BIT_OR: Operator = Operator::from_static("|");
    pub const BIT_XOR: Operator = Operator::from_static("^");

    // ==================== Comparison ====================
    pub const EQUAL: Operator = Operator::from_static("=");
    pub const NOT_EQUAL: Operator = Operator::from_static("<>");
    /// C-style inequality, accepted by the filter language alongside `<>`.
    pub const BANG_EQUAL: Operator = Operator::from_static("!=");
    pub const GT: Operator = Operator::from_static(">");
    pub const GTE: Operator = Operator::from_static(">=");
    pub const LT: Operator = Operator::from_static("<");
    pub const LTE: Operator = Operator::from_static("<=");

    // ==================== Compound assignment ====================
    pub const ADD_EQUALS: Operator = Operator::from_static("+=");
    pub const SUB_EQUALS: Operator = Operator::from_static("-=");
    pub const MUL_EQUALS: Operator = Operator::from_static("*=");
    pub const DIV_EQUALS: Operator = Operator::from_static("/=");
    pub const MOD_EQUALS: Operator = Operator::from_static("%=");
    pub const BIT_AND_EQUALS: Operator = Operator::from_static("&=");
    pub const BIT_XOR_EQUALS: Operator = Operator::from_static("^=");
    pub const BIT_OR_EQUALS: Operator = Operator::from_static("|=");

    // ==================== Keywords ====================
    pub const IS: Operator = Operator::from_static("IS");
    pub const IS_NOT: Operator = Operator::from_static("IS NOT");
    pub const ALL: Operator = Operator::from_static("ALL");
    pub const AND: Operator = Operator::from_static("AND");
    pub const ANY: Operator = Operator::from_static("ANY");
    pub const BETWEEN: Operator = Operator::from_static("BETWEEN");
    pub const EXISTS: Operator = Operator::from_static("EXISTS");
    pub const IN: Operator = Operator::from_static("IN");
    pub const NOT_IN: Operator = Operator::from_static("NOT IN");
    pub const LIKE: Operator = Operator::from_static("LIKE");
    pub const NOT_LIKE: Operator = Operator::from_static("NOT LIKE");
    pub const ILIKE: Operator = Operator::from_static("ILIKE");
    pub const NOT_ILIKE: Operator = Operator::from_static("NOT ILIKE");
    pub const SIMILAR: Operator = Operator::from_static("SIMILAR TO");
    pub const NOT: Operator = Operator::from_static("NOT");
    pub const OR: Operator = Operator::from_static("OR");
    pub const SOME: Operator = Operator::from_static("SOME");

    /// Creates an operator from a static string without allocating.
    pub const fn from_static(text: &'static str) -> Self {
        Operator(Cow::Borrowed(text))
    }

    /// Creates an operator from arbitrary text.
    pub fn new(text: impl Into<String>) -> Self {
        Operator(Cow::Owned(text.into()))
    }

    /// Returns the textual form of the operator.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the empty operator.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `other` is this operator or occurs inside its text.
    ///
    /// Used to recognise the `IS` family: both `IS` and `IS NOT` contain `IS`.
    ///
    /// # Example
    ///
    /// ```
    /// use criteria_rs::Operator;
    ///
    /// assert!(Operator::IS_NOT.has(&Operator::IS));
    /// assert!(!Operator::LIKE.has(&Operator::IS));
    /// ```
    pub fn has(&self, other: &Operator) -> bool {
        self == other || self.0.contains(other.as_str())
    }

    /// Returns `"<self> <other>"`.
    ///
    /// # Example
    ///
    /// ```
    /// use criteria_rs::Operator;
    ///
    /// assert_eq!(Operator::IS.append(&Operator::NOT), Operator::IS_NOT);
    /// ```
    pub fn append(&self, other: &Operator) -> Operator {
        Operator::new(format!("{} {}", self, other))
    }

    /// Returns `"<other> <self>"`.
    ///
    /// # Example
    ///
    /// ```
    /// use criteria_rs::Operator;
    ///
    /// assert_eq!(Operator::IN.prepend(&Operator::NOT), Operator::NOT_IN);
    /// ```
    pub fn prepend(&self, other: &Operator) -> Operator {
        Operator::new(format!("{} {}", other, self))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Operator {
    fn from(text: &str) -> Self {
        Operator::new(text)
    }
}

impl From<String> for Operator {
    fn from(text: String) -> Self {
        Operator::new(text)
    }
}

impl AsRef<str> for Operator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_text() {
        assert_eq!(Operator::EQUAL.as_str(), "=");
        assert_eq!(Operator::SIMILAR.to_string(), "SIMILAR TO");
        assert_eq!(Operator::new("~*").as_str(), "~*");
    }

    #[test]
    fn test_empty_operator() {
        assert!(Operator::EMPTY.is_empty());
        assert!(Operator::default().is_empty());
        assert_eq!(Operator::default(), Operator::EMPTY);
        assert!(!Operator::AND.is_empty());
    }

    #[test]
    fn test_owned_and_static_compare_equal() {
        assert_eq!(Operator::from("NOT IN"), Operator::NOT_IN);
        assert_eq!(Operator::new(String::from("<>")), Operator::NOT_EQUAL);
    }

    #[test]
    fn test_has_detects_is_family() {
        assert!(Operator::IS.has(&Operator::IS));
        assert!(Operator::IS_NOT.has(&Operator::IS));
        assert!(Operator::IS_NOT.has(&Operator::NOT));
        assert!(!Operator::EQUAL.has(&Operator::IS));
        assert!(!Operator::IN.has(&Operator::NOT_IN));
    }

    #[test]
    fn test_append_and_prepend() {
        assert_eq!(Operator::IS.append(&Operator::NOT), Operator::IS_NOT);
        assert_eq!(Operator::LIKE.prepend(&Operator::NOT), Operator::NOT_LIKE);
        assert_eq!(Operator::ILIKE.prepend(&Operator::NOT), Operator::NOT_ILIKE);
    }

    #[test]
    fn test_operator_serializes_as_string() {
        let json = serde_json::to_string(&Operator::NOT_IN).unwrap();
        assert_eq!(json, "\"NOT IN\"");
    }
}
