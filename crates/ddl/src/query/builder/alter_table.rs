//! Provides a fluent builder for constructing `AlterTable` ASTs.

use crate::query::ast::{
    alter_table::{AlterTable, AlterTableOperation, ModifyColumn},
    common::TableRef,
    create_table::ColumnDef,
};
use model::core::{data_type::SemanticType, default_value::ColumnDefault};

#[derive(Debug, Clone)]
pub struct AlterTableBuilder {
    ast: AlterTable,
}

impl AlterTableBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            ast: AlterTable {
                table,
                ..Default::default()
            },
        }
    }

    pub fn add_column(self, name: &str, data_type: SemanticType) -> AddColumnBuilder {
        AddColumnBuilder::new(self, name, data_type)
    }

    pub fn modify_column(self, name: &str, data_type: SemanticType) -> ModifyColumnBuilder {
        ModifyColumnBuilder::new(self, name, data_type)
    }

    pub fn build(self) -> AlterTable {
        self.ast
    }
}

pub struct AddColumnBuilder {
    table_builder: AlterTableBuilder,
    column: ColumnDef,
}

impl AddColumnBuilder {
    pub fn new(table_builder: AlterTableBuilder, name: &str, data_type: SemanticType) -> Self {
        Self {
            table_builder,
            column: ColumnDef::new(name, data_type),
        }
    }

    pub fn not_null(mut self) -> Self {
        self.column.null = Some(false);
        self
    }

    pub fn default(mut self, value: ColumnDefault) -> Self {
        self.column.default = Some(value);
        self
    }

    pub fn after(mut self, column: &str) -> Self {
        self.column.after = Some(column.to_string());
        self
    }

    pub fn add(mut self) -> AlterTableBuilder {
        self.table_builder
            .ast
            .operations
            .push(AlterTableOperation::AddColumn(self.column));
        self.table_builder
    }
}

pub struct ModifyColumnBuilder {
    table_builder: AlterTableBuilder,
    column: ModifyColumn,
}

impl ModifyColumnBuilder {
    pub fn new(table_builder: AlterTableBuilder, name: &str, data_type: SemanticType) -> Self {
        Self {
            table_builder,
            column: ModifyColumn {
                name: name.to_string(),
                data_type,
                ..Default::default()
            },
        }
    }

    pub fn nullable(mut self) -> Self {
        self.column.null = true;
        self
    }

    pub fn default(mut self, value: ColumnDefault) -> Self {
        self.column.default = Some(value);
        self
    }

    pub fn precision(mut self, precision: u32, scale: u32) -> Self {
        self.column.precision = Some(precision);
        self.column.scale = Some(scale);
        self
    }

    pub fn add(mut self) -> AlterTableBuilder {
        self.table_builder
            .ast
            .operations
            .push(AlterTableOperation::ModifyColumn(self.column));
        self.table_builder
    }
}

#[cfg(test)]
mod tests {
    use model::core::data_type::SemanticType;

    use crate::{
        query::{ast::alter_table::AlterTableOperation, builder::alter_table::AlterTableBuilder},
        table_ref,
    };

    #[test]
    fn test_build_alter_table() {
        let ast = AlterTableBuilder::new(table_ref!("posts"))
            .add_column("category_id", SemanticType::Integer)
            .after("id")
            .add()
            .modify_column("price", SemanticType::Decimal)
            .precision(10, 2)
            .nullable()
            .add()
            .build();

        assert_eq!(ast.table.name, "posts");
        assert_eq!(ast.operations.len(), 2);

        let AlterTableOperation::AddColumn(added) = &ast.operations[0] else {
            panic!("expected ADD COLUMN first");
        };
        assert_eq!(added.after.as_deref(), Some("id"));
        assert!(added.is_nullable());

        let AlterTableOperation::ModifyColumn(modified) = &ast.operations[1] else {
            panic!("expected MODIFY COLUMN second");
        };
        assert!(modified.null);
        assert_eq!(modified.precision, Some(10));
    }
}
