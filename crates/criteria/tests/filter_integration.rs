//! Integration tests for the filter pipeline through the public API.
//!
//! Each stage is driven on its own and then through [`FilterParser`], so a
//! regression shows up at the stage that introduced it.

use criteria_rs::filter::{
    build, cast, normalize, to_postfix, Condition, Filter, FilterError, FilterParser, FilterToken,
    Lexer, Node, Scalar, Value,
};
use criteria_rs::Operator;

// ============================================================================
// Stage-by-stage
// ============================================================================

#[test]
fn test_stages_compose_like_parser() {
    let input = "a = 1 or b in 2, 3";
    let normalized = normalize(input);
    assert_eq!(normalized, "a = 1 OR b IN 2, 3");

    let tokens = Lexer::new(&normalized).tokenize();
    assert_eq!(tokens[3].token, FilterToken::Or);
    assert_eq!(tokens[3].position, 6);

    let postfix = to_postfix(tokens);
    assert!(postfix.errors.is_empty());

    let built = build(postfix.tokens).unwrap();
    assert_eq!(built, FilterParser::new().parse(input));
}

#[test]
fn test_cast_matches_documented_trials() {
    let uuid = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
    assert!(matches!(cast(&format!("'{uuid}'")), Scalar::Uuid(_)));
    assert_eq!(cast("true"), Scalar::Bool(true));
    assert_eq!(cast("42"), Scalar::Int(42));
    assert_eq!(cast("4.2"), Scalar::Float(4.2));
    assert_eq!(cast("plain"), Scalar::from("plain"));
}

// ============================================================================
// Parser
// ============================================================================

#[test]
fn test_single_comparison_renders_one_placeholder() {
    let filter = FilterParser::new().parse("score >= 10");
    let (sql, args) = filter.to_sql();
    assert_eq!(sql, "score >= (?)");
    assert_eq!(args, vec![Value::Scalar(Scalar::Int(10))]);
}

#[test]
fn test_placeholders_match_argument_order() {
    let filter = FilterParser::new()
        .parse("a = 1 AND (b = 'two' OR c IN 3,4) AND d IS NOT NULL AND e LIKE 'x%'");
    let (sql, args) = filter.to_sql();

    assert_eq!(sql.matches("(?)").count(), args.len());
    assert_eq!(
        args,
        vec![
            Value::from(1_i64),
            Value::from("two"),
            Value::List(vec![Scalar::Int(3), Scalar::Int(4)]),
            Value::from("x%"),
        ]
    );
}

#[test]
fn test_try_parse_reports_what_parse_hides() {
    let parser = FilterParser::new();

    for input in ["a = 1 AND", "OR", "a =", "a IN", "(a = 1", "a = 1)"] {
        assert!(parser.parse(input).is_empty(), "{input}");
        assert!(parser.try_parse(input).is_err(), "{input}");
    }

    assert!(matches!(
        parser.try_parse("a = 1 OR (b = 2 AND c = 3"),
        Err(FilterError::UnbalancedParenthesis { position: 9 })
    ));
    assert!(parser.try_parse("(a = 1)").is_ok());
}

#[test]
fn test_hand_built_tree_matches_parsed_tree() {
    let expected = Filter::or(
        Condition::is_null("deleted_at"),
        Filter::and(
            Condition::new("owner", Operator::EQUAL, "me"),
            Node::Raw("x=1".to_string()),
        ),
    );
    let parsed = FilterParser::new().parse("deleted_at IS NULL OR owner = 'me' AND x=1");
    assert_eq!(parsed, expected);
}

#[test]
fn test_filter_json_shape() {
    let filter = FilterParser::new().parse("a = 1 AND b IS NULL");
    let json = serde_json::to_value(&filter).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "operator": "AND",
            "conditions": [
                { "column": "a", "operator": "=", "value": 1 },
                { "column": "b", "operator": "IS", "value": null }
            ]
        })
    );
}
