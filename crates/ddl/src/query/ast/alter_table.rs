//! Defines the AST for ALTER TABLE statements.

use crate::{
    error::DdlError,
    query::ast::{common::TableRef, create_table::ColumnDef},
};
use model::core::{
    data_type::{SemanticType, TypeOptions},
    default_value::ColumnDefault,
};
use serde::{Deserialize, Serialize};

/// A complete ALTER TABLE statement, which can carry several operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlterTable {
    pub table: TableRef,
    pub operations: Vec<AlterTableOperation>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlterTableOperation {
    AddColumn(ColumnDef),
    ModifyColumn(ModifyColumn),
}

/// New type, nullability and default of an existing column.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModifyColumn {
    pub name: String,
    pub data_type: SemanticType,
    pub null: bool,
    pub default: Option<ColumnDefault>,
    pub limit: Option<u32>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
}

/// A column change as handed over by the migration layer.
///
/// Exactly one of the two fields must be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColumnChangeRequest {
    pub add_column: Option<ColumnDef>,
    pub modify_column: Option<ModifyColumn>,
}

impl ModifyColumn {
    pub fn type_options(&self) -> TypeOptions {
        TypeOptions {
            limit: self.limit,
            precision: self.precision,
            scale: self.scale,
        }
    }
}

impl TryFrom<ColumnChangeRequest> for AlterTableOperation {
    type Error = DdlError;

    fn try_from(request: ColumnChangeRequest) -> Result<Self, Self::Error> {
        match (request.add_column, request.modify_column) {
            (Some(column), None) => Ok(AlterTableOperation::AddColumn(column)),
            (None, Some(modify)) => Ok(AlterTableOperation::ModifyColumn(modify)),
            (None, None) => Err(DdlError::InvalidRequest(
                "column change carries neither an add nor a modify".to_string(),
            )),
            (Some(_), Some(_)) => Err(DdlError::InvalidRequest(
                "column change carries both an add and a modify".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_request_conversion() {
        let add = ColumnChangeRequest {
            add_column: Some(ColumnDef::new("age", SemanticType::Integer)),
            ..Default::default()
        };
        assert!(matches!(
            AlterTableOperation::try_from(add),
            Ok(AlterTableOperation::AddColumn(_))
        ));

        let modify: ColumnChangeRequest =
            serde_json::from_str(r#"{ "modify_column": { "name": "age", "data_type": "big_integer" } }"#)
                .unwrap();
        let Ok(AlterTableOperation::ModifyColumn(m)) = AlterTableOperation::try_from(modify) else {
            panic!("expected a modify operation");
        };
        assert_eq!(m.data_type, SemanticType::BigInteger);
        assert!(!m.null);
    }

    #[test]
    fn test_malformed_change_requests() {
        assert!(matches!(
            AlterTableOperation::try_from(ColumnChangeRequest::default()),
            Err(DdlError::InvalidRequest(_))
        ));

        let both = ColumnChangeRequest {
            add_column: Some(ColumnDef::new("a", SemanticType::String)),
            modify_column: Some(ModifyColumn::default()),
        };
        assert!(matches!(
            AlterTableOperation::try_from(both),
            Err(DdlError::InvalidRequest(_))
        ));
    }
}
