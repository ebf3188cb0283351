//! Defines the AST for a CREATE TABLE / CREATE VIEW statement.

use crate::{error::DdlError, query::ast::common::TableRef};
use model::core::{
    data_type::{SemanticType, TypeOptions},
    default_value::ColumnDefault,
};
use serde::{Deserialize, Serialize};

/// A table or view definition.
///
/// At most one of `temporary`, `materialized` and `live` may be set, and
/// `materialized`/`live` require `view`. [`CreateTable::kind`] checks this.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CreateTable {
    pub table: TableRef,
    pub columns: Vec<ColumnDef>,
    pub primary_key: Option<Vec<String>>,
    pub temporary: bool,
    pub materialized: bool,
    pub live: bool,
    pub view: bool,
    pub if_not_exists: bool,
    /// Sub-select of a materialized or live view.
    #[serde(rename = "as")]
    pub as_select: Option<String>,
    /// Engine specification, or the body of a view.
    pub options: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: SemanticType,
    /// `None` means nullable.
    pub null: Option<bool>,
    pub default: Option<ColumnDefault>,
    pub limit: Option<u32>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    /// Column to place this one after; only used by ADD COLUMN.
    pub after: Option<String>,
}

/// The token between `CREATE` and `TABLE`/`VIEW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Temporary,
    Materialized,
    Live,
}

/// What kind of object a definition creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Table,
    View,
    MaterializedView,
    LiveView,
}

impl Modifier {
    pub fn keyword(&self) -> &'static str {
        match self {
            Modifier::Temporary => "TEMPORARY",
            Modifier::Materialized => "MATERIALIZED",
            Modifier::Live => "LIVE",
        }
    }
}

impl CreateTable {
    pub fn modifier(&self) -> Result<Option<Modifier>, DdlError> {
        let set: Vec<Modifier> = [
            (self.temporary, Modifier::Temporary),
            (self.materialized, Modifier::Materialized),
            (self.live, Modifier::Live),
        ]
        .into_iter()
        .filter_map(|(on, m)| on.then_some(m))
        .collect();

        match set.as_slice() {
            [] => Ok(None),
            [m] => Ok(Some(*m)),
            _ => Err(DdlError::InvalidRequest(format!(
                "table `{}` sets more than one of temporary, materialized and live",
                self.table.name
            ))),
        }
    }

    pub fn kind(&self) -> Result<TableKind, DdlError> {
        let modifier = self.modifier()?;
        match (self.view, modifier) {
            (true, Some(Modifier::Materialized)) => Ok(TableKind::MaterializedView),
            (true, Some(Modifier::Live)) => Ok(TableKind::LiveView),
            (true, _) => Ok(TableKind::View),
            (false, Some(Modifier::Materialized | Modifier::Live)) => {
                Err(DdlError::InvalidRequest(format!(
                    "table `{}` is materialized or live but not a view",
                    self.table.name
                )))
            }
            (false, _) => Ok(TableKind::Table),
        }
    }
}

impl ColumnDef {
    pub fn new(name: &str, data_type: SemanticType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            ..Default::default()
        }
    }

    pub fn is_nullable(&self) -> bool {
        self.null.unwrap_or(true)
    }

    pub fn type_options(&self) -> TypeOptions {
        TypeOptions {
            limit: self.limit,
            precision: self.precision,
            scale: self.scale,
        }
    }
}
