//! Lexer (tokenizer) for filter expressions.
//!
//! Tokens are recognised in a fixed priority order at each position:
//! symbol operators, keyword operators, parentheses, quoted strings, and
//! finally any run of characters up to whitespace or a parenthesis. Keywords
//! are case-sensitive here; [`normalize`] is what makes user input
//! case-insensitive.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::operator::Operator;

/// Matches quoted spans (left untouched) and whitespace-led keyword regions.
///
/// A quote only opens a span where the lexer could start a token: at the
/// start of input, or after whitespace, a parenthesis, or a symbol operator.
/// An apostrophe inside a word such as `O'Brien` is plain text.
static NORMALIZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(?P<quoted>(?:^|[\s()=<>!])(?:"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'))|\s+(?:AND|OR|IS\s+NOT\s+NULL|IS\s+NULL|NOT\s+I?LIKE|NOT\s+IN|I?LIKE|IN|NULL)\b"#,
    )
    .expect("invalid normalize pattern")
});

/// Symbol operators, two-character forms first.
static SYMBOL_OPERATORS: [(&str, Operator); 7] = [
    ("<>", Operator::NOT_EQUAL),
    ("<=", Operator::LTE),
    (">=", Operator::GTE),
    ("!=", Operator::BANG_EQUAL),
    ("=", Operator::EQUAL),
    ("<", Operator::LT),
    (">", Operator::GT),
];

/// Uppercases keyword operators that are separated from their neighbours by
/// whitespace, leaving column names and quoted values untouched.
///
/// # Example
///
/// ```
/// use criteria_rs::filter::normalize;
///
/// assert_eq!(
///     normalize("name like 'a and b' and age is not null"),
///     "name LIKE 'a and b' AND age IS NOT NULL"
/// );
/// ```
pub fn normalize(input: &str) -> Cow<'_, str> {
    NORMALIZE_PATTERN.replace_all(input, |caps: &Captures<'_>| {
        let matched = &caps[0];
        let end = caps.get(0).map_or(input.len(), |m| m.end());
        if caps.name("quoted").is_some() || !is_boundary(input[end..].chars().next()) {
            matched.to_string()
        } else {
            matched.to_uppercase()
        }
    })
}

/// Returns true if a keyword may end right before `next`.
fn is_boundary(next: Option<char>) -> bool {
    next.map_or(true, |c| {
        c.is_whitespace() || matches!(c, '(' | ')' | '\'' | '"')
    })
}

/// A token with its position in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedToken {
    /// The token.
    pub token: FilterToken,
    /// The byte position where the token starts (0-indexed).
    pub position: usize,
}

/// A token in a filter expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterToken {
    /// The `AND` connective.
    And,

    /// The `OR` connective.
    Or,

    /// A binary comparison: `=`, `<>`, `!=`, `<`, `<=`, `>`, `>=` and the
    /// `LIKE` family.
    Compare(Operator),

    /// `IN` or `NOT IN`.
    In(Operator),

    /// `IS NULL` (carrying [`Operator::IS`]) or `IS NOT NULL`
    /// (carrying [`Operator::IS_NOT`]).
    NullTest(Operator),

    /// Opening parenthesis `(`.
    OpenParen,

    /// Closing parenthesis `)`.
    CloseParen,

    /// A column name or literal, quotes included when present.
    Word(String),
}

impl FilterToken {
    /// Returns the binding strength of an operator token, or `None` for
    /// parentheses and words. All comparisons share one tier.
    pub fn precedence(&self) -> Option<u8> {
        match self {
            FilterToken::Or => Some(1),
            FilterToken::And => Some(2),
            FilterToken::Compare(_) | FilterToken::In(_) | FilterToken::NullTest(_) => Some(3),
            FilterToken::OpenParen | FilterToken::CloseParen | FilterToken::Word(_) => None,
        }
    }
}

impl fmt::Display for FilterToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterToken::And => f.write_str("AND"),
            FilterToken::Or => f.write_str("OR"),
            FilterToken::Compare(op) | FilterToken::In(op) => write!(f, "{op}"),
            FilterToken::NullTest(op) => write!(f, "{op} NULL"),
            FilterToken::OpenParen => f.write_str("("),
            FilterToken::CloseParen => f.write_str(")"),
            FilterToken::Word(text) => f.write_str(text),
        }
    }
}

/// Keyword operators in the order they are tried. Longer forms sharing a
/// first word come before shorter ones.
#[derive(Debug, Clone, Copy)]
enum Keyword {
    IsNotNull,
    IsNull,
    NotIlike,
    NotLike,
    NotIn,
    And,
    Or,
    Ilike,
    Like,
    In,
}

impl Keyword {
    const ALL: [Keyword; 10] = [
        Keyword::IsNotNull,
        Keyword::IsNull,
        Keyword::NotIlike,
        Keyword::NotLike,
        Keyword::NotIn,
        Keyword::And,
        Keyword::Or,
        Keyword::Ilike,
        Keyword::Like,
        Keyword::In,
    ];

    fn words(self) -> &'static [&'static str] {
        match self {
            Keyword::IsNotNull => &["IS", "NOT", "NULL"],
            Keyword::IsNull => &["IS", "NULL"],
            Keyword::NotIlike => &["NOT", "ILIKE"],
            Keyword::NotLike => &["NOT", "LIKE"],
            Keyword::NotIn => &["NOT", "IN"],
            Keyword::And => &["AND"],
            Keyword::Or => &["OR"],
            Keyword::Ilike => &["ILIKE"],
            Keyword::Like => &["LIKE"],
            Keyword::In => &["IN"],
        }
    }

    fn token(self) -> FilterToken {
        match self {
            Keyword::IsNotNull => FilterToken::NullTest(Operator::IS_NOT),
            Keyword::IsNull => FilterToken::NullTest(Operator::IS),
            Keyword::NotIlike => FilterToken::Compare(Operator::NOT_ILIKE),
            Keyword::NotLike => FilterToken::Compare(Operator::NOT_LIKE),
            Keyword::NotIn => FilterToken::In(Operator::NOT_IN),
            Keyword::And => FilterToken::And,
            Keyword::Or => FilterToken::Or,
            Keyword::Ilike => FilterToken::Compare(Operator::ILIKE),
            Keyword::Like => FilterToken::Compare(Operator::LIKE),
            Keyword::In => FilterToken::In(Operator::IN),
        }
    }

    /// Returns the byte length of this keyword at the start of `rest`.
    ///
    /// Words may be separated by any run of whitespace and the keyword must
    /// end at a boundary, so `ORDER` is not `OR` followed by `DER`.
    fn match_at(self, rest: &str) -> Option<usize> {
        let mut offset = 0;
        for (i, word) in self.words().iter().enumerate() {
            if i > 0 {
                let tail = &rest[offset..];
                let gap = tail.len() - tail.trim_start().len();
                if gap == 0 {
                    return None;
                }
                offset += gap;
            }
            if !rest[offset..].starts_with(word) {
                return None;
            }
            offset += word.len();
        }
        is_boundary(rest[offset..].chars().next()).then_some(offset)
    }
}

/// Lexer for tokenizing filter expressions.
pub struct Lexer<'a> {
    input: &'a str,
    /// Current byte position in the input string.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the unconsumed part of the input.
    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Peeks at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes `len` bytes.
    fn advance(&mut self, len: usize) {
        self.position += len;
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.advance(rest.len() - rest.trim_start().len());
    }

    /// Reads a symbol operator such as `>=` or `<>`.
    fn read_symbol_operator(&mut self) -> Option<Operator> {
        let rest = self.rest();
        let (symbol, operator) = SYMBOL_OPERATORS
            .iter()
            .find(|(symbol, _)| rest.starts_with(symbol))?;
        self.advance(symbol.len());
        Some(operator.clone())
    }

    /// Reads a keyword operator such as `AND` or `IS NOT NULL`.
    fn read_keyword(&mut self) -> Option<FilterToken> {
        let rest = self.rest();
        let (keyword, len) = Keyword::ALL
            .iter()
            .find_map(|keyword| keyword.match_at(rest).map(|len| (*keyword, len)))?;
        self.advance(len);
        Some(keyword.token())
    }

    /// Reads a quoted string, quotes and escapes kept verbatim.
    ///
    /// Returns `None` without consuming anything if the quote is never closed.
    fn read_quoted_string(&mut self, quote_char: char) -> Option<String> {
        let rest = self.rest();
        let mut chars = rest.char_indices().skip(1);
        while let Some((i, c)) = chars.next() {
            if c == '\\' {
                chars.next();
            } else if c == quote_char {
                let end = i + c.len_utf8();
                self.advance(end);
                return Some(rest[..end].to_string());
            }
        }
        None
    }

    /// Reads a bare word: everything up to whitespace or a parenthesis.
    fn read_word(&mut self) -> String {
        let rest = self.rest();
        let end = rest
            .find(|c: char| c.is_whitespace() || c == '(' || c == ')')
            .unwrap_or(rest.len());
        self.advance(end);
        rest[..end].to_string()
    }

    /// Returns the next token with its position, or None if at end of input.
    pub fn next_token(&mut self) -> Option<PositionedToken> {
        self.skip_whitespace();

        let c = self.peek()?;
        let position = self.position;

        let token = if let Some(operator) = self.read_symbol_operator() {
            FilterToken::Compare(operator)
        } else if let Some(keyword) = self.read_keyword() {
            keyword
        } else {
            match c {
                '(' => {
                    self.advance(1);
                    FilterToken::OpenParen
                }
                ')' => {
                    self.advance(1);
                    FilterToken::CloseParen
                }
                '"' | '\'' => match self.read_quoted_string(c) {
                    Some(text) => FilterToken::Word(text),
                    None => FilterToken::Word(self.read_word()),
                },
                _ => FilterToken::Word(self.read_word()),
            }
        };

        Some(PositionedToken { token, position })
    }

    /// Collects all tokens with their positions.
    pub fn tokenize(mut self) -> Vec<PositionedToken> {
        let mut tokens = Vec::new();
        while let Some(positioned_token) = self.next_token() {
            tokens.push(positioned_token);
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<FilterToken> {
        Lexer::new(input)
            .tokenize()
            .into_iter()
            .map(|pt| pt.token)
            .collect()
    }

    fn word(text: &str) -> FilterToken {
        FilterToken::Word(text.to_string())
    }

    #[test]
    fn test_tokenize_comparison() {
        assert_eq!(
            tokens("age >= 18"),
            vec![word("age"), FilterToken::Compare(Operator::GTE), word("18")]
        );
    }

    #[test]
    fn test_tokenize_symbol_operators_prefer_longest() {
        let ops: Vec<FilterToken> = ["=", "<>", "!=", "<", "<=", ">", ">="]
            .iter()
            .flat_map(|op| tokens(&format!("a {op} 1")).into_iter().nth(1))
            .collect();
        assert_eq!(
            ops,
            vec![
                FilterToken::Compare(Operator::EQUAL),
                FilterToken::Compare(Operator::NOT_EQUAL),
                FilterToken::Compare(Operator::BANG_EQUAL),
                FilterToken::Compare(Operator::LT),
                FilterToken::Compare(Operator::LTE),
                FilterToken::Compare(Operator::GT),
                FilterToken::Compare(Operator::GTE),
            ]
        );
    }

    #[test]
    fn test_tokenize_operator_at_token_start_splits() {
        assert_eq!(
            tokens("a =1"),
            vec![word("a"), FilterToken::Compare(Operator::EQUAL), word("1")]
        );
    }

    #[test]
    fn test_tokenize_unspaced_comparison_is_one_word() {
        assert_eq!(tokens("a=1"), vec![word("a=1")]);
    }

    #[test]
    fn test_tokenize_connectives() {
        assert_eq!(
            tokens("a = 1 AND b = 2 OR c = 3"),
            vec![
                word("a"),
                FilterToken::Compare(Operator::EQUAL),
                word("1"),
                FilterToken::And,
                word("b"),
                FilterToken::Compare(Operator::EQUAL),
                word("2"),
                FilterToken::Or,
                word("c"),
                FilterToken::Compare(Operator::EQUAL),
                word("3"),
            ]
        );
    }

    #[test]
    fn test_tokenize_keywords_are_case_sensitive() {
        assert_eq!(
            tokens("a and b"),
            vec![word("a"), word("and"), word("b")]
        );
    }

    #[test]
    fn test_tokenize_keyword_requires_boundary() {
        assert_eq!(tokens("ORDER"), vec![word("ORDER")]);
        assert_eq!(tokens("INDEX"), vec![word("INDEX")]);
        assert_eq!(tokens("ANDROID"), vec![word("ANDROID")]);
    }

    #[test]
    fn test_tokenize_null_tests() {
        assert_eq!(
            tokens("a IS NULL"),
            vec![word("a"), FilterToken::NullTest(Operator::IS)]
        );
        assert_eq!(
            tokens("a IS   NOT\tNULL"),
            vec![word("a"), FilterToken::NullTest(Operator::IS_NOT)]
        );
    }

    #[test]
    fn test_tokenize_like_family() {
        assert_eq!(
            tokens("a NOT LIKE b")[1],
            FilterToken::Compare(Operator::NOT_LIKE)
        );
        assert_eq!(tokens("a ILIKE b")[1], FilterToken::Compare(Operator::ILIKE));
        assert_eq!(
            tokens("a NOT ILIKE b")[1],
            FilterToken::Compare(Operator::NOT_ILIKE)
        );
    }

    #[test]
    fn test_tokenize_in_list_with_spaces() {
        assert_eq!(
            tokens("a IN 1, 2, 3"),
            vec![
                word("a"),
                FilterToken::In(Operator::IN),
                word("1,"),
                word("2,"),
                word("3"),
            ]
        );
        assert_eq!(tokens("a NOT IN 1,2")[1], FilterToken::In(Operator::NOT_IN));
    }

    #[test]
    fn test_tokenize_parentheses() {
        assert_eq!(
            tokens("(a = 1)"),
            vec![
                FilterToken::OpenParen,
                word("a"),
                FilterToken::Compare(Operator::EQUAL),
                word("1"),
                FilterToken::CloseParen,
            ]
        );
    }

    #[test]
    fn test_tokenize_quoted_strings_keep_quotes() {
        assert_eq!(
            tokens(r#"title LIKE "My \"title\"""#),
            vec![
                word("title"),
                FilterToken::Compare(Operator::LIKE),
                word(r#""My \"title\"""#),
            ]
        );
        assert_eq!(
            tokens("name = 'a AND b'"),
            vec![
                word("name"),
                FilterToken::Compare(Operator::EQUAL),
                word("'a AND b'"),
            ]
        );
    }

    #[test]
    fn test_tokenize_unterminated_quote_is_bare_word() {
        assert_eq!(
            tokens("name = 'abc def"),
            vec![
                word("name"),
                FilterToken::Compare(Operator::EQUAL),
                word("'abc"),
                word("def"),
            ]
        );
    }

    #[test]
    fn test_tokenize_positions() {
        let positioned = Lexer::new("a  IN 1").tokenize();
        let positions: Vec<usize> = positioned.iter().map(|pt| pt.position).collect();
        assert_eq!(positions, vec![0, 3, 6]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokens("").is_empty());
        assert!(tokens("   \t").is_empty());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(FilterToken::NullTest(Operator::IS_NOT).to_string(), "IS NOT NULL");
        assert_eq!(FilterToken::In(Operator::NOT_IN).to_string(), "NOT IN");
        assert_eq!(word("'x'").to_string(), "'x'");
    }

    #[test]
    fn test_precedence_tiers() {
        assert_eq!(FilterToken::Or.precedence(), Some(1));
        assert_eq!(FilterToken::And.precedence(), Some(2));
        assert_eq!(FilterToken::Compare(Operator::LIKE).precedence(), Some(3));
        assert_eq!(FilterToken::NullTest(Operator::IS).precedence(), Some(3));
        assert_eq!(FilterToken::OpenParen.precedence(), None);
        assert_eq!(word("a").precedence(), None);
    }

    #[test]
    fn test_normalize_uppercases_keywords() {
        assert_eq!(normalize("a = 1 and b = 2 or c = 3"), "a = 1 AND b = 2 OR c = 3");
        assert_eq!(normalize("a is null"), "a IS NULL");
        assert_eq!(normalize("a is  not null"), "a IS  NOT NULL");
        assert_eq!(normalize("a not in 1,2"), "a NOT IN 1,2");
        assert_eq!(normalize("a not ilike 'x'"), "a NOT ILIKE 'x'");
    }

    #[test]
    fn test_normalize_leaves_columns_and_values() {
        assert_eq!(normalize("order_id = 1"), "order_id = 1");
        assert_eq!(normalize("a = 1 and index = 2"), "a = 1 AND index = 2");
        assert_eq!(normalize("a = 'x or y'"), "a = 'x or y'");
        assert_eq!(normalize(r#"a = "in \" and""#), r#"a = "in \" and""#);
        assert_eq!(normalize("a = b or-ish"), "a = b or-ish");
    }

    #[test]
    fn test_normalize_mid_word_apostrophes_are_not_quotes() {
        assert_eq!(
            normalize("a = O'Brien and b = D'Arcy"),
            "a = O'Brien AND b = D'Arcy"
        );
        assert_eq!(normalize("name = it's or x = 1"), "name = it's OR x = 1");
    }

    #[test]
    fn test_normalize_quotes_open_at_token_start() {
        assert_eq!(normalize("'a and b' and c = 1"), "'a and b' AND c = 1");
        assert_eq!(normalize("a ='x or y' or b = 2"), "a ='x or y' OR b = 2");
        assert_eq!(normalize("(\"p and q\") or r = 1"), "(\"p and q\") OR r = 1");
    }

    #[test]
    fn test_normalize_borrows_when_unchanged() {
        assert!(matches!(normalize("a = 1"), Cow::Borrowed(_)));
    }
}
