//! Static catalog mapping semantic types to ClickHouse native type names and back.
//!
//! Both directions are built once, on first use, and never mutated afterwards,
//! so the registry can be shared freely across threads.
//!
//! # Lossy aliases
//!
//! The reverse direction collapses several native families onto a smaller set
//! of semantic types. Most notably `Int64` resolves to the same big-integer
//! entry and decoder as `UInt64`: there is no signed 64-bit decoder, and
//! values that need the sign bit cannot be decoded through this mapping.
//! Schemas and callers depend on the alias as it stands, so changing it is a
//! behavior change rather than a fix.

use crate::{
    core::{
        data_type::{
            SemanticType, TypeOptions, base_type_name, strip_string_length, type_params,
            unwrap_nullable,
        },
        decode::Decoder,
    },
    error::TypeError,
};
use lazy_static::lazy_static;
use std::collections::HashMap;
use tracing::{trace, warn};

/// Forward catalog entry: the native name emitted for a semantic type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntry {
    pub native: &'static str,
    pub semantic: SemanticType,
    /// Default size in bytes, where the type has one.
    pub limit: Option<u32>,
}

/// Reverse catalog entry: what a native type family resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeMapping {
    pub semantic: SemanticType,
    pub limit: Option<u32>,
    pub decoder: Decoder,
}

#[derive(Debug)]
pub struct TypeRegistry {
    forward: HashMap<SemanticType, TypeEntry>,
    reverse: HashMap<&'static str, NativeMapping>,
}

lazy_static! {
    static ref REGISTRY: TypeRegistry = TypeRegistry::build();
}

impl TypeRegistry {
    /// The process-wide catalog.
    pub fn global() -> &'static TypeRegistry {
        &REGISTRY
    }

    fn build() -> Self {
        Self {
            forward: build_native_types(),
            reverse: build_native_aliases(),
        }
    }

    pub fn is_valid_type(&self, semantic: &SemanticType) -> bool {
        matches!(semantic, SemanticType::Custom(_)) || self.forward.contains_key(semantic)
    }

    /// Canonical forward entries, ordered by native name.
    pub fn entries(&self) -> Vec<&TypeEntry> {
        let mut entries: Vec<_> = self.forward.values().collect();
        entries.sort_by_key(|e| e.native);
        entries
    }

    /// Every native family name the reverse catalog recognizes.
    pub fn native_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.reverse.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Native type name for a semantic type, without nullability wrapping.
    pub fn native_type_for(
        &self,
        semantic: &SemanticType,
        options: &TypeOptions,
    ) -> Result<String, TypeError> {
        if let SemanticType::Custom(raw) = semantic {
            return Ok(strip_string_length(raw).into_owned());
        }

        let entry = self
            .forward
            .get(semantic)
            .ok_or_else(|| TypeError::UnsupportedType(semantic.to_string()))?;

        let native = match (semantic, options.precision) {
            (SemanticType::Decimal, Some(precision)) => {
                format!("{}({precision}, {})", entry.native, options.scale.unwrap_or(0))
            }
            (SemanticType::String, _) => {
                if let Some(limit) = options.limit {
                    trace!(limit, "dropping string length, ClickHouse does not enforce it");
                }
                entry.native.to_string()
            }
            _ => entry.native.to_string(),
        };

        Ok(native)
    }

    /// Resolves a native type string, wrapped or not, to its semantic type and limit.
    pub fn semantic_type_for(&self, native: &str) -> Result<NativeMapping, TypeError> {
        let mapping = self.lookup(native)?;
        Ok(NativeMapping {
            limit: self.limit_for(native).or(mapping.limit),
            ..mapping.clone()
        })
    }

    pub fn decoder_for(&self, native: &str) -> Result<Decoder, TypeError> {
        self.lookup(native).map(|m| m.decoder)
    }

    /// Size limit of a native type string.
    ///
    /// Nullable integer and string wrappers carry fixed limits; everything else
    /// falls back to the first numeric type parameter.
    pub fn limit_for(&self, native: &str) -> Option<u32> {
        let (base, nullable) = unwrap_nullable(native);
        if nullable {
            match base {
                "String" => return Some(255),
                "UInt8" | "Int8" | "UInt16" | "Int16" => return Some(4),
                "UInt32" | "Int32" | "UInt64" | "Int64" => return Some(8),
                _ => {}
            }
        }
        type_params(base).first().copied()
    }

    pub fn precision_for(&self, native: &str) -> Option<u32> {
        match base_type_name(native) {
            "Decimal" => type_params(native).first().copied(),
            _ => None,
        }
    }

    pub fn scale_for(&self, native: &str) -> Option<u32> {
        match base_type_name(native) {
            "Decimal" => type_params(native).get(1).copied(),
            _ => None,
        }
    }

    fn lookup(&self, native: &str) -> Result<&NativeMapping, TypeError> {
        let base = base_type_name(native);
        let mapping = self
            .reverse
            .get(base)
            .ok_or_else(|| TypeError::UnsupportedType(native.to_string()))?;
        if base == "Int64" {
            warn!(native, "Int64 resolves to the unsigned 64-bit decoder");
        }
        Ok(mapping)
    }
}

fn build_native_types() -> HashMap<SemanticType, TypeEntry> {
    use SemanticType::*;

    let entries = [
        (String, "String", None),
        (Integer, "UInt32", Some(8)),
        (BigInteger, "UInt64", Some(8)),
        (Float, "Float32", Some(4)),
        (Decimal, "Decimal", None),
        (DateTime, "DateTime", None),
        (Date, "Date", None),
        (Boolean, "UInt8", Some(1)),
        (Uuid, "UUID", None),
    ];

    let mut map = HashMap::new();
    for (semantic, native, limit) in entries {
        map.insert(
            semantic.clone(),
            TypeEntry {
                native,
                semantic,
                limit,
            },
        );
    }
    map
}

fn build_native_aliases() -> HashMap<&'static str, NativeMapping> {
    use SemanticType as S;

    let entries = [
        ("String", S::String, None, Decoder::String),
        ("UInt8", S::Boolean, Some(1), Decoder::UnsignedInteger),
        ("Bool", S::Boolean, Some(1), Decoder::Boolean),
        ("UInt16", S::Integer, Some(4), Decoder::UnsignedInteger),
        ("UInt32", S::Integer, Some(8), Decoder::UnsignedInteger),
        ("UInt64", S::BigInteger, Some(8), Decoder::BigInteger),
        ("Int8", S::Integer, Some(4), Decoder::Integer),
        ("Int16", S::Integer, Some(4), Decoder::Integer),
        ("Int32", S::Integer, Some(8), Decoder::Integer),
        // No signed 64-bit decoder: shares the UInt64 entry.
        ("Int64", S::BigInteger, Some(8), Decoder::BigInteger),
        ("Float32", S::Float, Some(4), Decoder::Float),
        ("Float64", S::Float, Some(8), Decoder::Float),
        ("Decimal", S::Decimal, None, Decoder::Decimal),
        ("DateTime", S::DateTime, None, Decoder::DateTime),
        ("Date", S::Date, None, Decoder::Date),
        ("UUID", S::Uuid, None, Decoder::Uuid),
    ];

    let mut map = HashMap::new();
    for (native, semantic, limit, decoder) in entries {
        map.insert(
            native,
            NativeMapping {
                semantic,
                limit,
                decoder,
            },
        );
    }
    map
}
