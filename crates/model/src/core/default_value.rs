//! Best-effort extraction of column defaults from introspected metadata.
//!
//! ClickHouse reports defaults as expression text. Only forms that are safely
//! literal are echoed back as values; function calls are kept verbatim and
//! anything else is dropped.

use crate::core::{data_type::SemanticType, decode::Decoder, value::Value};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

lazy_static! {
    static ref QUOTED: Regex =
        Regex::new(r#"(?s)^B?'((?:[^']|'')*)'(?:::"?([\w. ]+)"?(?:\[\])?)?$"#).unwrap();
    static ref NUMERIC: Regex = Regex::new(r"^\(?(-?\d+(?:\.\d*)?)\)?(?:::bigint)?$").unwrap();
    static ref FUNCTION_CALL: Regex = Regex::new(r"(?s)\w+\(.*\)").unwrap();
}

/// Result of parsing a raw default clause.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DefaultExtraction {
    None,
    Literal(String),
    Function(String),
}

/// Default attached to a column definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ColumnDefault {
    /// Emitted as a literal, quoted according to its type.
    Value(Value),
    /// Emitted verbatim, e.g. `now()`.
    Function(String),
}

impl DefaultExtraction {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return DefaultExtraction::None;
        }

        let unwrapped = raw
            .strip_prefix('(')
            .and_then(|inner| inner.strip_suffix(')'))
            .unwrap_or(raw);
        if let Some(caps) = QUOTED.captures(unwrapped) {
            let literal = caps.get(1).map_or("", |m| m.as_str());
            let cast = caps.get(2).map(|m| m.as_str());
            // 'now'::date stands for the current date, not the string "now"
            if literal == "now" && cast == Some("date") {
                return DefaultExtraction::None;
            }
            return DefaultExtraction::Literal(literal.replace("''", "'"));
        }

        if raw == "true" || raw == "false" {
            return DefaultExtraction::Literal(raw.to_string());
        }

        if let Some(caps) = NUMERIC.captures(raw) {
            return DefaultExtraction::Literal(caps[1].to_string());
        }

        if FUNCTION_CALL.is_match(raw) {
            return DefaultExtraction::Function(raw.to_string());
        }

        debug!(raw, "unparseable column default treated as absent");
        DefaultExtraction::None
    }

    pub fn is_none(&self) -> bool {
        matches!(self, DefaultExtraction::None)
    }

    /// Converts the extraction into a column default, decoding literals with
    /// the column's semantic type. Numeric columns fall back to a decimal so
    /// the literal stays unquoted; anything else falls back to a string.
    pub fn into_column_default(self, semantic: &SemanticType) -> Option<ColumnDefault> {
        match self {
            DefaultExtraction::None => None,
            DefaultExtraction::Function(expr) => Some(ColumnDefault::Function(expr)),
            DefaultExtraction::Literal(text) => {
                let value = match Decoder::for_semantic(semantic).decode(&text) {
                    Ok(value) => value,
                    // e.g. a negative default on a column read through the Int64 alias
                    Err(_) if semantic.is_numeric() => Decoder::Decimal
                        .decode(&text)
                        .unwrap_or(Value::String(text)),
                    Err(_) => Value::String(text),
                };
                Some(ColumnDefault::Value(value))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;
    use tracing_test::traced_test;

    fn literal(s: &str) -> DefaultExtraction {
        DefaultExtraction::Literal(s.to_string())
    }

    #[test]
    fn test_quoted_literals() {
        assert_eq!(DefaultExtraction::parse("'abc''def'::String"), literal("abc'def"));
        assert_eq!(DefaultExtraction::parse("'plain'"), literal("plain"));
        assert_eq!(
            DefaultExtraction::parse("'2024-01-01'::\"timestamp without time zone\""),
            literal("2024-01-01")
        );
        assert_eq!(DefaultExtraction::parse("('x')"), literal("x"));
    }

    #[test]
    fn test_current_date_sentinel() {
        assert_eq!(DefaultExtraction::parse("'now'::date"), DefaultExtraction::None);
        assert_eq!(DefaultExtraction::parse("'now'::String"), literal("now"));
    }

    #[test]
    fn test_booleans_and_numbers() {
        assert_eq!(DefaultExtraction::parse("true"), literal("true"));
        assert_eq!(DefaultExtraction::parse("false"), literal("false"));
        assert_eq!(DefaultExtraction::parse("(-3.5)"), literal("-3.5"));
        assert_eq!(DefaultExtraction::parse("42::bigint"), literal("42"));
        assert_eq!(DefaultExtraction::parse("-7"), literal("-7"));
    }

    #[test]
    fn test_function_calls() {
        assert_eq!(
            DefaultExtraction::parse("now()"),
            DefaultExtraction::Function("now()".into())
        );
        assert_eq!(
            DefaultExtraction::parse("toDate('2020-01-01')"),
            DefaultExtraction::Function("toDate('2020-01-01')".into())
        );
    }

    #[test]
    #[traced_test]
    fn test_unparseable_defaults_degrade_to_none() {
        assert!(DefaultExtraction::parse("").is_none());
        assert!(DefaultExtraction::parse("some_identifier").is_none());
        assert!(DefaultExtraction::parse("1 + 1").is_none());
        assert!(DefaultExtraction::parse("'a' || 'b'").is_none());
        assert!(DefaultExtraction::parse("'a')").is_none());
        assert!(logs_contain("unparseable column default"));
    }

    #[test]
    fn test_into_column_default() {
        assert_eq!(
            literal("42").into_column_default(&SemanticType::Integer),
            Some(ColumnDefault::Value(Value::Int(42)))
        );
        assert_eq!(
            literal("-3.5").into_column_default(&SemanticType::Integer),
            Some(ColumnDefault::Value(Value::Decimal(BigDecimal::from_str("-3.5").unwrap())))
        );
        assert_eq!(
            literal("-1").into_column_default(&SemanticType::BigInteger),
            Some(ColumnDefault::Value(Value::Decimal(BigDecimal::from(-1))))
        );
        assert_eq!(
            literal("n/a").into_column_default(&SemanticType::Integer),
            Some(ColumnDefault::Value(Value::String("n/a".into())))
        );
        assert_eq!(
            literal("true").into_column_default(&SemanticType::Boolean),
            Some(ColumnDefault::Value(Value::Boolean(true)))
        );
        assert_eq!(
            DefaultExtraction::Function("now()".into()).into_column_default(&SemanticType::DateTime),
            Some(ColumnDefault::Function("now()".into()))
        );
        assert_eq!(DefaultExtraction::None.into_column_default(&SemanticType::String), None);
    }

    #[test]
    fn test_extraction_json_shape() {
        let json = serde_json::to_string(&DefaultExtraction::Function("now()".into())).unwrap();
        assert_eq!(json, r#"{"kind":"function","value":"now()"}"#);
        assert_eq!(
            serde_json::from_str::<DefaultExtraction>(r#"{"kind":"none"}"#).unwrap(),
            DefaultExtraction::None
        );
    }
}
