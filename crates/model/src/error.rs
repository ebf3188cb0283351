use thiserror::Error;

/// Errors raised while mapping between semantic and native column types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeError {
    /// The semantic or native type has no registered mapping.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),
}

/// Errors raised while turning a raw result cell into a typed value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Cannot decode {raw:?} as {target}: {reason}")]
    Invalid {
        raw: String,
        target: &'static str,
        reason: String,
    },
}

impl DecodeError {
    pub fn invalid(raw: &str, target: &'static str, reason: impl ToString) -> Self {
        DecodeError::Invalid {
            raw: raw.to_string(),
            target,
            reason: reason.to_string(),
        }
    }
}
