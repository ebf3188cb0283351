//! Defines common, reusable AST nodes for DDL statements.

use serde::{Deserialize, Serialize};

/// A table reference, optionally qualified with its database.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableRef {
    #[serde(default)]
    pub schema: Option<String>,
    pub name: String,
}
