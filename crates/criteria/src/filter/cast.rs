//! Literal caster: turns operand text into a typed [`Scalar`].

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use uuid::Uuid;

use super::value::Scalar;

/// Naive date-time layouts accepted inside quotes, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Date-only layout accepted inside quotes.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Converts raw operand text into a typed literal.
///
/// Trial order, first match wins:
///
/// 1. empty (after trimming) → empty string
/// 2. wrapped in matching `'` or `"` → UUID, then timestamp, else the
///    unquoted text with escaped quotes unescaped
/// 3. `true` / `false` / `null`, any case
/// 4. base-10 integer
/// 5. finite float
/// 6. the text itself
///
/// Quoted text never falls through to the boolean or numeric trials.
///
/// # Example
///
/// ```
/// use criteria_rs::filter::{cast, Scalar};
///
/// assert_eq!(cast("42"), Scalar::Int(42));
/// assert_eq!(cast("'42'"), Scalar::String("42".to_string()));
/// assert_eq!(cast("TRUE"), Scalar::Bool(true));
/// ```
pub fn cast(raw: &str) -> Scalar {
    let value = raw.trim();
    if value.is_empty() {
        return Scalar::String(String::new());
    }

    if let Some((quote, inner)) = unquote(value) {
        if let Ok(uuid) = Uuid::parse_str(inner) {
            return Scalar::Uuid(uuid);
        }
        if let Some(timestamp) = parse_timestamp(inner) {
            return Scalar::Timestamp(timestamp);
        }
        let escaped = format!("\\{quote}");
        return Scalar::String(inner.replace(&escaped, &quote.to_string()));
    }

    if value.eq_ignore_ascii_case("true") {
        return Scalar::Bool(true);
    }
    if value.eq_ignore_ascii_case("false") {
        return Scalar::Bool(false);
    }
    if value.eq_ignore_ascii_case("null") {
        return Scalar::Null;
    }

    if let Ok(int) = value.parse::<i64>() {
        return Scalar::Int(int);
    }

    // "inf" and "NaN" parse as floats but are not meaningful SQL literals.
    if let Ok(float) = value.parse::<f64>() {
        if float.is_finite() {
            return Scalar::Float(float);
        }
    }

    Scalar::String(value.to_string())
}

/// Splits off a matching pair of surrounding quotes.
fn unquote(value: &str) -> Option<(char, &str)> {
    let mut chars = value.chars();
    let first = chars.next()?;
    let last = chars.next_back()?;
    if (first == '\'' || first == '"') && first == last {
        Some((first, &value[1..value.len() - 1]))
    } else {
        None
    }
}

/// Parses an RFC 3339 timestamp, a naive date-time, or a bare date.
///
/// Naive forms are taken to be UTC.
fn parse_timestamp(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp);
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_cast_empty() {
        assert_eq!(cast(""), Scalar::String(String::new()));
        assert_eq!(cast("   "), Scalar::String(String::new()));
    }

    #[test]
    fn test_cast_quoted_uuid() {
        let scalar = cast("'3fa85f64-5717-4562-b3fc-2c963f66afa6'");
        let expected = Uuid::parse_str("3fa85f64-5717-4562-b3fc-2c963f66afa6").unwrap();
        assert_eq!(scalar, Scalar::Uuid(expected));
    }

    #[test]
    fn test_cast_double_quoted_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(cast(&format!("\"{id}\"")), Scalar::Uuid(id));
    }

    #[test]
    fn test_cast_unquoted_uuid_stays_string() {
        let text = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
        assert_eq!(cast(text), Scalar::String(text.to_string()));
    }

    #[test]
    fn test_cast_quoted_date() {
        let Scalar::Timestamp(ts) = cast("'2023-11-23'") else {
            panic!("expected timestamp");
        };
        assert_eq!((ts.year(), ts.month(), ts.day()), (2023, 11, 23));
        assert_eq!(ts.hour(), 0);
        assert_eq!(ts.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_cast_quoted_datetime_forms() {
        for text in [
            "'2023-11-23 10:30:00'",
            "'2023-11-23T10:30:00'",
            "'2023-11-23 10:30'",
            "\"2023-11-23T10:30:00+00:00\"",
        ] {
            let Scalar::Timestamp(ts) = cast(text) else {
                panic!("expected timestamp for {text}");
            };
            assert_eq!((ts.hour(), ts.minute()), (10, 30), "{text}");
        }
    }

    #[test]
    fn test_cast_rfc3339_keeps_offset() {
        let Scalar::Timestamp(ts) = cast("'2023-11-23T10:30:00+02:00'") else {
            panic!("expected timestamp");
        };
        assert_eq!(ts.offset().local_minus_utc(), 2 * 3600);
    }

    #[test]
    fn test_cast_quoted_string_unescapes_own_quote() {
        assert_eq!(
            cast(r#""My \"title\"""#),
            Scalar::String("My \"title\"".to_string())
        );
        assert_eq!(cast(r"'it\'s'"), Scalar::String("it's".to_string()));
        // Only the enclosing quote character is unescaped.
        assert_eq!(cast(r#"'say \"hi\"'"#), Scalar::String(r#"say \"hi\""#.to_string()));
    }

    #[test]
    fn test_cast_quoted_values_never_coerce() {
        assert_eq!(cast("'true'"), Scalar::String("true".to_string()));
        assert_eq!(cast("\"4.2\""), Scalar::String("4.2".to_string()));
        assert_eq!(cast("'null'"), Scalar::String("null".to_string()));
    }

    #[test]
    fn test_cast_mismatched_quotes_fall_through() {
        assert_eq!(cast("'abc\""), Scalar::String("'abc\"".to_string()));
        assert_eq!(cast("'"), Scalar::String("'".to_string()));
    }

    #[test]
    fn test_cast_booleans_and_null() {
        assert_eq!(cast("true"), Scalar::Bool(true));
        assert_eq!(cast("False"), Scalar::Bool(false));
        assert_eq!(cast("NULL"), Scalar::Null);
        assert_eq!(cast("null"), Scalar::Null);
    }

    #[test]
    fn test_cast_integers() {
        assert_eq!(cast("42"), Scalar::Int(42));
        assert_eq!(cast("-7"), Scalar::Int(-7));
        assert_eq!(cast(" 3 "), Scalar::Int(3));
        assert_eq!(cast("007"), Scalar::Int(7));
    }

    #[test]
    fn test_cast_floats() {
        assert_eq!(cast("4.2"), Scalar::Float(4.2));
        assert_eq!(cast("1e3"), Scalar::Float(1000.0));
        assert_eq!(cast("NaN"), Scalar::String("NaN".to_string()));
        assert_eq!(cast("inf"), Scalar::String("inf".to_string()));
    }

    #[test]
    fn test_cast_integer_overflow_becomes_float() {
        assert_eq!(cast("99999999999999999999"), Scalar::Float(1e20));
    }

    #[test]
    fn test_cast_fallback_string() {
        assert_eq!(cast("plain"), Scalar::String("plain".to_string()));
        assert_eq!(cast("0x1F"), Scalar::String("0x1F".to_string()));
    }
}
