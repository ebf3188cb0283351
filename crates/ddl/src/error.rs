use model::error::TypeError;
use thiserror::Error;

/// Errors raised while compiling definitions into DDL. Both kinds are fatal:
/// no statement text is returned alongside them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DdlError {
    /// A semantic type has no native mapping.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// The definition or change request is malformed.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<TypeError> for DdlError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::UnsupportedType(name) => DdlError::UnsupportedType(name),
        }
    }
}
