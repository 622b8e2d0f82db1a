//! Renders a [`Filter`] tree as a parameterized WHERE clause.

use super::ast::{Condition, Filter, Node};
use super::value::{Scalar, Value};
use crate::operator::Operator;

impl Filter {
    /// Renders the filter as WHERE-clause text with `?` placeholders.
    ///
    /// Arguments are returned in the order their placeholders appear. A list
    /// value from `IN` is a single argument; expanding it into several
    /// placeholders is up to whatever executes the query.
    ///
    /// # Example
    ///
    /// ```
    /// use criteria_rs::filter::{FilterParser, Scalar, Value};
    ///
    /// let filter = FilterParser::new().parse("a = 1 OR b IS NULL");
    /// let (sql, args) = filter.to_sql();
    /// assert_eq!(sql, "a = (?) OR b IS NULL");
    /// assert_eq!(args, vec![Value::Scalar(Scalar::Int(1))]);
    /// ```
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        let mut args = Vec::new();
        let sql = self.render(&mut args);
        (sql, args)
    }

    fn render(&self, args: &mut Vec<Value>) -> String {
        let clauses: Vec<String> = self
            .conditions
            .iter()
            .filter_map(|node| match node {
                Node::Raw(fragment) => Some(fragment.clone()),
                Node::Condition(condition) => Some(condition.render(args)),
                Node::Filter(filter) if filter.is_empty() => None,
                Node::Filter(filter) => Some(format!("({})", filter.render(args))),
            })
            .collect();

        let operator = if self.operator.is_empty() {
            &Operator::AND
        } else {
            &self.operator
        };
        clauses.join(&format!(" {operator} "))
    }
}

impl Condition {
    fn render(&self, args: &mut Vec<Value>) -> String {
        let operator = if self.operator.is_empty() {
            &Operator::EQUAL
        } else {
            &self.operator
        };

        let is_null = self.value.as_ref().map_or(true, Value::is_null);
        if is_null && operator.has(&Operator::IS) {
            return format!("{} {operator} NULL", self.column);
        }

        args.push(
            self.value
                .clone()
                .unwrap_or(Value::Scalar(Scalar::Null)),
        );
        format!("{} {operator} (?)", self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_renders_nothing() {
        assert_eq!(Filter::default().to_sql(), (String::new(), Vec::new()));
    }

    #[test]
    fn test_single_condition() {
        let filter = Filter::leaf(Condition::new("age", Operator::GTE, 18_i64));
        let (sql, args) = filter.to_sql();
        assert_eq!(sql, "age >= (?)");
        assert_eq!(args, vec![Value::from(18_i64)]);
    }

    #[test]
    fn test_empty_operator_defaults_to_equal() {
        let filter = Filter::leaf(Condition::new("a", Operator::EMPTY, "x"));
        assert_eq!(filter.to_sql().0, "a = (?)");
    }

    #[test]
    fn test_null_tests_take_no_argument() {
        let filter = Filter::or(Condition::is_null("a"), Condition::is_not_null("b"));
        let (sql, args) = filter.to_sql();
        assert_eq!(sql, "a IS NULL OR b IS NOT NULL");
        assert!(args.is_empty());
    }

    #[test]
    fn test_is_with_null_scalar_renders_as_null_test() {
        let filter = Filter::leaf(Condition::new("a", Operator::IS, Scalar::Null));
        assert_eq!(filter.to_sql(), ("a IS NULL".to_string(), Vec::new()));
    }

    #[test]
    fn test_is_with_value_binds_argument() {
        let filter = Filter::leaf(Condition::new("a", Operator::IS, true));
        let (sql, args) = filter.to_sql();
        assert_eq!(sql, "a IS (?)");
        assert_eq!(args, vec![Value::from(true)]);
    }

    #[test]
    fn test_equal_without_value_binds_null() {
        let filter = Filter::leaf(Condition {
            column: "a".to_string(),
            operator: Operator::EQUAL,
            value: None,
        });
        let (sql, args) = filter.to_sql();
        assert_eq!(sql, "a = (?)");
        assert_eq!(args, vec![Value::Scalar(Scalar::Null)]);
    }

    #[test]
    fn test_list_is_one_argument() {
        let items = vec![Scalar::Int(2), Scalar::Int(3)];
        let filter = Filter::leaf(Condition::new("status", Operator::IN, items.clone()));
        let (sql, args) = filter.to_sql();
        assert_eq!(sql, "status IN (?)");
        assert_eq!(args, vec![Value::List(items)]);
    }

    #[test]
    fn test_nested_groups_are_parenthesized_in_order() {
        let inner = Filter::or(
            Condition::new("b", Operator::EQUAL, 2_i64),
            Condition::new("c", Operator::EQUAL, 3_i64),
        );
        let filter = Filter::and(Condition::new("a", Operator::EQUAL, 1_i64), inner);
        let (sql, args) = filter.to_sql();
        assert_eq!(sql, "a = (?) AND (b = (?) OR c = (?))");
        assert_eq!(
            args,
            vec![Value::from(1_i64), Value::from(2_i64), Value::from(3_i64)]
        );
    }

    #[test]
    fn test_empty_nested_group_is_skipped() {
        let filter = Filter::and(Condition::is_null("a"), Filter::default());
        assert_eq!(filter.to_sql().0, "a IS NULL");
    }

    #[test]
    fn test_raw_fragments_are_verbatim() {
        let filter = Filter::or(Node::Raw("a=1".to_string()), Condition::new("b", Operator::LT, 2_i64));
        let (sql, args) = filter.to_sql();
        assert_eq!(sql, "a=1 OR b < (?)");
        assert_eq!(args.len(), 1);
    }
}
