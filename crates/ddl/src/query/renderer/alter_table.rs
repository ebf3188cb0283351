use crate::{
    error::DdlError,
    query::{
        ast::{
            alter_table::{AlterTable, AlterTableOperation, ModifyColumn},
            create_table::ColumnDef,
        },
        renderer::{Render, Renderer},
    },
};

impl Render for AlterTable {
    fn render(&self, r: &mut Renderer) -> Result<(), DdlError> {
        if self.operations.is_empty() {
            return Err(DdlError::InvalidRequest(format!(
                "ALTER TABLE `{}` has no operations",
                self.table.name
            )));
        }

        // ClickHouse accepts several comma-separated actions in one statement.
        r.sql.push_str("ALTER TABLE ");
        r.render_table_ref(&self.table);
        r.sql.push(' ');
        for (i, op) in self.operations.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            op.render(r)?;
        }
        Ok(())
    }
}

impl Render for AlterTableOperation {
    fn render(&self, r: &mut Renderer) -> Result<(), DdlError> {
        match self {
            AlterTableOperation::AddColumn(col_def) => render_add_column(col_def, r),
            AlterTableOperation::ModifyColumn(modify) => modify.render(r),
        }
    }
}

pub fn render_add_column(col: &ColumnDef, r: &mut Renderer) -> Result<(), DdlError> {
    r.sql.push_str("ADD COLUMN ");
    col.render(r)?;
    if let Some(after) = &col.after {
        r.sql.push_str(" AFTER ");
        r.push_identifier(after);
    }
    Ok(())
}

impl Render for ModifyColumn {
    fn render(&self, r: &mut Renderer) -> Result<(), DdlError> {
        let native = r
            .dialect
            .render_data_type(&self.data_type, &self.type_options())?;

        r.sql.push_str("MODIFY COLUMN ");
        r.push_identifier(&self.name);
        r.sql.push(' ');
        r.sql.push_str(&r.dialect.render_nullable(&native, self.null));

        if let Some(default) = &self.default {
            r.sql.push_str(" DEFAULT ");
            r.sql
                .push_str(&r.dialect.render_default(default, &self.data_type));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use model::core::{data_type::SemanticType, default_value::ColumnDefault, value::Value};

    use crate::{
        error::DdlError,
        query::{
            ast::{
                alter_table::{AlterTable, AlterTableOperation, ModifyColumn},
                create_table::ColumnDef,
            },
            dialect::ClickHouse,
            renderer::{Render, Renderer},
        },
        settings::DdlSettings,
        table_ref,
    };

    fn render(ast: &impl Render) -> Result<String, DdlError> {
        let settings = DdlSettings::default();
        let mut renderer = Renderer::new(&ClickHouse, &settings);
        ast.render(&mut renderer)?;
        Ok(renderer.finish())
    }

    #[test]
    fn test_render_add_column_after() {
        let op = AlterTableOperation::AddColumn(ColumnDef {
            after: Some("id".to_string()),
            default: Some(ColumnDefault::Value(Value::String("n/a".into()))),
            ..ColumnDef::new("category", SemanticType::String)
        });

        assert_eq!(
            render(&op).unwrap(),
            r#"ADD COLUMN "category" Nullable(String) DEFAULT 'n/a' AFTER "id""#
        );
    }

    #[test]
    fn test_render_modify_column() {
        let nullable = ModifyColumn {
            name: "score".to_string(),
            data_type: SemanticType::Float,
            null: true,
            ..Default::default()
        };
        assert_eq!(
            render(&nullable).unwrap(),
            r#"MODIFY COLUMN "score" Nullable(Float32)"#
        );

        let with_default = ModifyColumn {
            name: "created_at".to_string(),
            data_type: SemanticType::DateTime,
            null: false,
            default: Some(ColumnDefault::Function("now()".into())),
            ..Default::default()
        };
        assert_eq!(
            render(&with_default).unwrap(),
            r#"MODIFY COLUMN "created_at" DateTime DEFAULT now()"#
        );
    }

    #[test]
    fn test_render_alter_table_with_several_operations() {
        let ast = AlterTable {
            table: table_ref!("posts"),
            operations: vec![
                AlterTableOperation::AddColumn(ColumnDef::new("category_id", SemanticType::Integer)),
                AlterTableOperation::ModifyColumn(ModifyColumn {
                    name: "title".to_string(),
                    data_type: SemanticType::String,
                    null: false,
                    ..Default::default()
                }),
            ],
        };

        assert_eq!(
            render(&ast).unwrap(),
            r#"ALTER TABLE "posts" ADD COLUMN "category_id" Nullable(UInt32), MODIFY COLUMN "title" String"#
        );
    }

    #[test]
    fn test_empty_alter_table_is_rejected() {
        let ast = AlterTable {
            table: table_ref!("posts"),
            operations: vec![],
        };
        assert!(matches!(render(&ast), Err(DdlError::InvalidRequest(_))));
    }
}
