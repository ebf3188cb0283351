//! Decoders that turn the textual cells returned by ClickHouse into typed values.

use crate::{
    core::{data_type::SemanticType, value::Value},
    error::DecodeError,
};
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoder {
    String,
    Integer,
    UnsignedInteger,
    /// 64-bit decoder shared by `UInt64` and `Int64`.
    ///
    /// It parses unsigned values only, so `Int64` cells that need the sign bit
    /// fail to decode. Existing schemas rely on this alias; see the registry.
    BigInteger,
    Float,
    Decimal,
    Date,
    DateTime,
    Boolean,
    Uuid,
}

impl Decoder {
    /// Decoder used when only the semantic type of a column is known.
    pub fn for_semantic(semantic: &SemanticType) -> Decoder {
        match semantic {
            SemanticType::Integer => Decoder::Integer,
            SemanticType::BigInteger => Decoder::BigInteger,
            SemanticType::Float => Decoder::Float,
            SemanticType::Decimal => Decoder::Decimal,
            SemanticType::DateTime => Decoder::DateTime,
            SemanticType::Date => Decoder::Date,
            SemanticType::Boolean => Decoder::Boolean,
            SemanticType::Uuid => Decoder::Uuid,
            SemanticType::String | SemanticType::Custom(_) => Decoder::String,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Decoder::String => "string",
            Decoder::Integer => "integer",
            Decoder::UnsignedInteger => "unsigned integer",
            Decoder::BigInteger => "big integer",
            Decoder::Float => "float",
            Decoder::Decimal => "decimal",
            Decoder::Date => "date",
            Decoder::DateTime => "datetime",
            Decoder::Boolean => "boolean",
            Decoder::Uuid => "uuid",
        }
    }

    /// Decodes a raw cell. `\N` is ClickHouse's textual NULL.
    pub fn decode(&self, raw: &str) -> Result<Value, DecodeError> {
        if raw == "\\N" {
            return Ok(Value::Null);
        }
        let target = self.name();
        let text = raw.trim();

        match self {
            Decoder::String => Ok(Value::String(raw.to_string())),
            Decoder::Integer => text
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|e| DecodeError::invalid(raw, target, e)),
            Decoder::UnsignedInteger | Decoder::BigInteger => text
                .parse::<u64>()
                .map(Value::Uint)
                .map_err(|e| DecodeError::invalid(raw, target, e)),
            Decoder::Float => text
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|e| DecodeError::invalid(raw, target, e)),
            Decoder::Decimal => BigDecimal::from_str(text)
                .map(Value::Decimal)
                .map_err(|e| DecodeError::invalid(raw, target, e)),
            Decoder::Date => NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map(Value::Date)
                .map_err(|e| DecodeError::invalid(raw, target, e)),
            Decoder::DateTime => NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f")
                .map(|dt| Value::Timestamp(dt.and_utc()))
                .map_err(|e| DecodeError::invalid(raw, target, e)),
            Decoder::Boolean => match text {
                "1" | "true" => Ok(Value::Boolean(true)),
                "0" | "false" => Ok(Value::Boolean(false)),
                _ => Err(DecodeError::invalid(raw, target, "expected 0, 1, true or false")),
            },
            Decoder::Uuid => Uuid::parse_str(text)
                .map(Value::Uuid)
                .map_err(|e| DecodeError::invalid(raw, target, e)),
        }
    }
}
