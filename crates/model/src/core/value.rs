use crate::core::data_type::SemanticType;
use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A typed scalar, either decoded from a result cell or supplied as a
/// column default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Int(i64),
    Uint(u64),
    Float(f64),
    Decimal(BigDecimal),
    String(String),
    Boolean(bool),
    Uuid(Uuid),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    Null,
}

impl Value {
    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::Int(v) => Some(v.to_string()),
            Value::Uint(v) => Some(v.to_string()),
            Value::Float(v) => Some(v.to_string()),
            Value::Decimal(v) => Some(v.to_string()),
            Value::String(v) => Some(v.clone()),
            Value::Boolean(v) => Some(v.to_string()),
            Value::Uuid(v) => Some(v.to_string()),
            Value::Date(v) => Some(v.to_string()),
            Value::Timestamp(v) => Some(v.format("%Y-%m-%d %H:%M:%S").to_string()),
            Value::Null => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Int(v) => Some(*v != 0),
            Value::Uint(v) => Some(*v != 0),
            Value::Boolean(v) => Some(*v),
            Value::String(v) => match v.to_lowercase().as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn semantic_type(&self) -> Option<SemanticType> {
        match self {
            Value::Int(_) | Value::Uint(_) => Some(SemanticType::Integer),
            Value::Float(_) => Some(SemanticType::Float),
            Value::Decimal(_) => Some(SemanticType::Decimal),
            Value::String(_) => Some(SemanticType::String),
            Value::Boolean(_) => Some(SemanticType::Boolean),
            Value::Uuid(_) => Some(SemanticType::Uuid),
            Value::Date(_) => Some(SemanticType::Date),
            Value::Timestamp(_) => Some(SemanticType::DateTime),
            Value::Null => None,
        }
    }

    /// Numbers and booleans are emitted bare; everything else is a quoted string.
    pub fn is_quoted(&self) -> bool {
        !matches!(
            self,
            Value::Int(_)
                | Value::Uint(_)
                | Value::Float(_)
                | Value::Decimal(_)
                | Value::Boolean(_)
                | Value::Null
        )
    }
}

/// Renders the value as a ClickHouse SQL literal.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Uint(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "'{}'", quote_string(v)),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Uuid(v) => write!(f, "'{v}'"),
            Value::Date(v) => write!(f, "'{v}'"),
            Value::Timestamp(v) => write!(f, "'{}'", v.format("%Y-%m-%d %H:%M:%S")),
            Value::Null => write!(f, "NULL"),
        }
    }
}

/// Escapes a string for use between single quotes.
pub fn quote_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_literal_rendering() {
        assert_eq!(Value::String("abc'def".into()).to_string(), "'abc''def'");
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(
            Value::Decimal(BigDecimal::from_str("-3.5").unwrap()).to_string(),
            "-3.5"
        );
        assert_eq!(
            Value::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()).to_string(),
            "'2024-02-29'"
        );
        assert_eq!(Value::Null.to_string(), "NULL");
    }

    #[test]
    fn test_quoting_by_kind() {
        assert!(Value::String("x".into()).is_quoted());
        assert!(Value::Uuid(Uuid::nil()).is_quoted());
        assert!(!Value::Uint(1).is_quoted());
        assert!(!Value::Boolean(false).is_quoted());
    }

    #[test]
    fn test_as_bool() {
        assert_eq!(Value::Uint(1).as_bool(), Some(true));
        assert_eq!(Value::String("false".into()).as_bool(), Some(false));
        assert_eq!(Value::Float(1.0).as_bool(), None);
    }
}
