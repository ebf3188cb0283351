use crate::error::TypeError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt};

pub const NULLABLE_PREFIX: &str = "Nullable(";

/// Database-agnostic classification of a column type.
///
/// The registry maps every variant except `Custom` onto a native ClickHouse
/// type name. `Custom` carries a raw native type string that is emitted as-is
/// (after string-length normalization).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    #[default]
    String,
    Integer,
    BigInteger,
    Float,
    Decimal,
    #[serde(rename = "datetime")]
    DateTime,
    Date,
    Boolean,
    Uuid,
    Custom(String),
}

/// Size and precision hints attached to a column definition.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeOptions {
    pub limit: Option<u32>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
}

lazy_static! {
    static ref BOUNDED_STRING: Regex = Regex::new(r"\bString\(\s*\d+\s*\)").unwrap();
    static ref TYPE_PARAMS: Regex = Regex::new(r"^[^(]*\(([^)]*)\)").unwrap();
}

impl SemanticType {
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            SemanticType::String => Cow::Borrowed("string"),
            SemanticType::Integer => Cow::Borrowed("integer"),
            SemanticType::BigInteger => Cow::Borrowed("big_integer"),
            SemanticType::Float => Cow::Borrowed("float"),
            SemanticType::Decimal => Cow::Borrowed("decimal"),
            SemanticType::DateTime => Cow::Borrowed("datetime"),
            SemanticType::Date => Cow::Borrowed("date"),
            SemanticType::Boolean => Cow::Borrowed("boolean"),
            SemanticType::Uuid => Cow::Borrowed("uuid"),
            SemanticType::Custom(raw) => Cow::Borrowed(raw),
        }
    }

    /// Whether literal defaults of this type are emitted without quotes.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            SemanticType::Integer
                | SemanticType::BigInteger
                | SemanticType::Float
                | SemanticType::Decimal
                | SemanticType::Boolean
        )
    }
}

impl TryFrom<&str> for SemanticType {
    type Error = TypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "string" => Ok(SemanticType::String),
            "integer" => Ok(SemanticType::Integer),
            "big_integer" | "bigint" => Ok(SemanticType::BigInteger),
            "float" => Ok(SemanticType::Float),
            "decimal" => Ok(SemanticType::Decimal),
            "datetime" => Ok(SemanticType::DateTime),
            "date" => Ok(SemanticType::Date),
            "boolean" => Ok(SemanticType::Boolean),
            "uuid" => Ok(SemanticType::Uuid),
            _ => Err(TypeError::UnsupportedType(s.to_string())),
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Wraps a native type in `Nullable(...)`, never nesting the wrapper.
pub fn wrap_nullable(native: &str) -> String {
    let (base, _) = unwrap_nullable(native);
    format!("{NULLABLE_PREFIX}{base})")
}

/// Strips a single `Nullable(...)` wrapper, reporting whether one was present.
pub fn unwrap_nullable(native: &str) -> (&str, bool) {
    let trimmed = native.trim();
    match trimmed
        .strip_prefix(NULLABLE_PREFIX)
        .and_then(|rest| rest.strip_suffix(')'))
    {
        Some(inner) => (inner.trim(), true),
        None => (trimmed, false),
    }
}

/// ClickHouse does not enforce string lengths, so `String(N)` collapses to `String`.
pub fn strip_string_length(native: &str) -> Cow<'_, str> {
    BOUNDED_STRING.replace_all(native, "String")
}

/// Name of the type family with parameters removed: `Decimal(10, 2)` -> `Decimal`.
pub fn base_type_name(native: &str) -> &str {
    let (base, _) = unwrap_nullable(native);
    match base.find('(') {
        Some(idx) => base[..idx].trim(),
        None => base,
    }
}

/// Numeric parameters of a parametric type: `Decimal(10, 2)` -> `[10, 2]`.
pub fn type_params(native: &str) -> Vec<u32> {
    let (base, _) = unwrap_nullable(native);
    TYPE_PARAMS
        .captures(base)
        .and_then(|caps| caps.get(1))
        .map(|m| {
            m.as_str()
                .split(',')
                .filter_map(|p| p.trim().parse::<u32>().ok())
                .collect()
        })
        .unwrap_or_default()
}
