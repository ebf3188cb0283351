//! Provides a fluent builder for constructing `CreateTable` ASTs.

use crate::{
    query::ast::{
        common::TableRef,
        create_table::{ColumnDef, CreateTable},
    },
    settings::{DEFAULT_UUID_FUNCTION, DdlSettings},
};
use model::core::{data_type::SemanticType, default_value::ColumnDefault};

#[derive(Debug, Clone)]
pub struct CreateTableBuilder {
    ast: CreateTable,
    uuid_function: String,
}

impl CreateTableBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            ast: CreateTable {
                table,
                ..Default::default()
            },
            uuid_function: DEFAULT_UUID_FUNCTION.to_string(),
        }
    }

    /// Picks up configured defaults such as the UUID generator function.
    pub fn settings(mut self, settings: &DdlSettings) -> Self {
        self.uuid_function = settings.uuid_default_function.clone();
        self
    }

    pub fn if_not_exists(mut self) -> Self {
        self.ast.if_not_exists = true;
        self
    }

    pub fn temporary(mut self) -> Self {
        self.ast.temporary = true;
        self
    }

    pub fn view(mut self) -> Self {
        self.ast.view = true;
        self
    }

    pub fn materialized_view(mut self) -> Self {
        self.ast.view = true;
        self.ast.materialized = true;
        self
    }

    pub fn live_view(mut self) -> Self {
        self.ast.view = true;
        self.ast.live = true;
        self
    }

    /// Engine specification for tables, or the body of a view.
    pub fn options(mut self, options: &str) -> Self {
        self.ast.options = Some(options.to_string());
        self
    }

    pub fn as_select(mut self, select: &str) -> Self {
        self.ast.as_select = Some(select.to_string());
        self
    }

    pub fn column(self, name: &str, data_type: SemanticType) -> ColumnBuilder {
        ColumnBuilder::new(self, name, data_type)
    }

    pub fn primary_key(mut self, columns: &[&str]) -> Self {
        self.ast.primary_key = Some(columns.iter().map(|c| c.to_string()).collect());
        self
    }

    /// Declares a UUID primary key column generated by `generateUUIDv4()`,
    /// or the function configured through [`CreateTableBuilder::settings`].
    ///
    /// Override or drop the default through [`ColumnBuilder::default`] and
    /// [`ColumnBuilder::no_default`] before calling `add`.
    pub fn uuid_primary_key(self, name: &str) -> ColumnBuilder {
        let function = self.uuid_function.clone();
        self.primary_key(&[name])
            .column(name, SemanticType::Uuid)
            .not_null()
            .default(ColumnDefault::Function(function))
    }

    pub fn build(self) -> CreateTable {
        self.ast
    }
}

pub struct ColumnBuilder {
    table_builder: CreateTableBuilder,
    column: ColumnDef,
}

impl ColumnBuilder {
    pub fn new(table_builder: CreateTableBuilder, name: &str, data_type: SemanticType) -> Self {
        Self {
            table_builder,
            column: ColumnDef::new(name, data_type), // Columns are nullable by default
        }
    }

    pub fn not_null(mut self) -> Self {
        self.column.null = Some(false);
        self
    }

    pub fn nullable(mut self) -> Self {
        self.column.null = Some(true);
        self
    }

    pub fn default(mut self, default_value: ColumnDefault) -> Self {
        self.column.default = Some(default_value);
        self
    }

    pub fn no_default(mut self) -> Self {
        self.column.default = None;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.column.limit = Some(limit);
        self
    }

    pub fn precision(mut self, precision: u32, scale: u32) -> Self {
        self.column.precision = Some(precision);
        self.column.scale = Some(scale);
        self
    }

    pub fn add(mut self) -> CreateTableBuilder {
        self.table_builder.ast.columns.push(self.column);
        self.table_builder
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        query::ast::create_table::TableKind, query::builder::create_table::CreateTableBuilder,
        settings::DdlSettings, table_ref,
    };
    use model::core::{data_type::SemanticType, default_value::ColumnDefault, value::Value};

    #[test]
    fn test_build_create_table() {
        let ast = CreateTableBuilder::new(table_ref!("users"))
            .if_not_exists()
            .column("id", SemanticType::BigInteger)
            .not_null()
            .add()
            .column("username", SemanticType::String)
            .limit(255)
            .add()
            .column("is_active", SemanticType::Boolean)
            .default(ColumnDefault::Value(Value::Boolean(true)))
            .add()
            .primary_key(&["id"])
            .build();

        assert!(ast.if_not_exists);
        assert_eq!(ast.table.name, "users");
        assert_eq!(ast.columns.len(), 3);
        assert_eq!(ast.columns[0].null, Some(false));
        assert_eq!(ast.columns[1].limit, Some(255));
        assert!(ast.columns[2].is_nullable()); // Should be nullable by default
        assert!(ast.columns[2].default.is_some());
        assert_eq!(ast.primary_key, Some(vec!["id".to_string()]));
    }

    #[test]
    fn test_view_builders_uphold_flags() {
        let mv = CreateTableBuilder::new(table_ref!("mv"))
            .materialized_view()
            .as_select("SELECT 1")
            .build();
        assert_eq!(mv.kind().unwrap(), TableKind::MaterializedView);

        let lv = CreateTableBuilder::new(table_ref!("lv")).live_view().build();
        assert_eq!(lv.kind().unwrap(), TableKind::LiveView);
    }

    #[test]
    fn test_uuid_primary_key() {
        let ast = CreateTableBuilder::new(table_ref!("stuffs"))
            .uuid_primary_key("id")
            .add()
            .build();

        let id = &ast.columns[0];
        assert_eq!(id.data_type, SemanticType::Uuid);
        assert_eq!(id.null, Some(false));
        assert_eq!(
            id.default,
            Some(ColumnDefault::Function("generateUUIDv4()".into()))
        );
        assert_eq!(ast.primary_key, Some(vec!["id".to_string()]));

        let without_default = CreateTableBuilder::new(table_ref!("stuffs"))
            .uuid_primary_key("id")
            .no_default()
            .add()
            .build();
        assert_eq!(without_default.columns[0].default, None);

        let settings = DdlSettings {
            uuid_default_function: "generateUUIDv7()".to_string(),
            ..Default::default()
        };
        let configured = CreateTableBuilder::new(table_ref!("stuffs"))
            .settings(&settings)
            .uuid_primary_key("id")
            .add()
            .build();
        assert_eq!(
            configured.columns[0].default,
            Some(ColumnDefault::Function("generateUUIDv7()".into()))
        );
    }
}
