//! Typed literal values carried by conditions and bound as SQL arguments.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use uuid::Uuid;

/// A single typed literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    /// SQL `NULL`.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// A quoted literal that parsed as a date or date-time.
    Timestamp(DateTime<FixedOffset>),
    /// A quoted literal that parsed as a UUID.
    Uuid(Uuid),
    String(String),
}

impl Scalar {
    /// Returns a short name for the literal's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::Timestamp(_) => "timestamp",
            Scalar::Uuid(_) => "uuid",
            Scalar::String(_) => "string",
        }
    }

    /// Returns true for [`Scalar::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("NULL"),
            Scalar::Bool(v) => write!(f, "{v}"),
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Timestamp(v) => write!(f, "'{}'", v.to_rfc3339()),
            Scalar::Uuid(v) => write!(f, "'{v}'"),
            Scalar::String(v) => write!(f, "'{v}'"),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<Uuid> for Scalar {
    fn from(value: Uuid) -> Self {
        Scalar::Uuid(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

/// The right-hand side of a condition: one literal, or a list for `IN`.
///
/// A list is bound as one composite argument; expanding it into the right
/// number of placeholders is left to whatever executes the SQL.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

impl Value {
    /// Returns true if this is a single `NULL` literal.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Scalar(Scalar::Null))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(scalar) => scalar.fmt(f),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt(f)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Value::Scalar(value)
    }
}

macro_rules! value_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

value_from_scalar!(bool, i64, f64, Uuid, &str, String);

impl From<Vec<Scalar>> for Value {
    fn from(items: Vec<Scalar>) -> Self {
        Value::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::Null.to_string(), "NULL");
        assert_eq!(Scalar::Int(42).to_string(), "42");
        assert_eq!(Scalar::from("abc").to_string(), "'abc'");
    }

    #[test]
    fn test_list_display() {
        let value = Value::List(vec![Scalar::Int(1), Scalar::from("two")]);
        assert_eq!(value.to_string(), "[1, 'two']");
    }

    #[test]
    fn test_value_from_scalar_types() {
        assert_eq!(Value::from(7_i64), Value::Scalar(Scalar::Int(7)));
        assert_eq!(Value::from(true), Value::Scalar(Scalar::Bool(true)));
        assert!(Value::from(Scalar::Null).is_null());
        assert!(!Value::List(vec![Scalar::Null]).is_null());
    }

    #[test]
    fn test_value_serializes_untagged() {
        let value = Value::List(vec![Scalar::Int(2), Scalar::Null, Scalar::from("x")]);
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"[2,null,"x"]"#);
    }
}
