use crate::{
    error::DdlError,
    query::{
        ast::create_table::{ColumnDef, CreateTable, TableKind},
        renderer::{Render, Renderer, table_options::TrailingClause},
    },
};

impl Render for CreateTable {
    fn render(&self, r: &mut Renderer) -> Result<(), DdlError> {
        let kind = self.kind()?;

        r.sql.push_str("CREATE");
        if let Some(modifier) = self.modifier()? {
            r.sql.push(' ');
            r.sql.push_str(modifier.keyword());
        }
        r.sql.push_str(if self.view { " VIEW " } else { " TABLE " });
        if self.if_not_exists {
            r.sql.push_str("IF NOT EXISTS ");
        }
        r.render_table_ref(&self.table);

        let primary_key = self.primary_key.as_deref().filter(|pk| !pk.is_empty());
        if kind == TableKind::Table && (!self.columns.is_empty() || primary_key.is_some()) {
            r.sql.push_str(" (");
            for (i, col) in self.columns.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                col.render(r)?;
            }
            if let Some(columns) = primary_key {
                if !self.columns.is_empty() {
                    r.sql.push_str(", ");
                }
                render_primary_key(columns, r);
            }
            r.sql.push(')');
        }

        TrailingClause::resolve(kind, self.options.as_deref(), &r.settings.default_engine)
            .apply(&mut r.sql);

        if let Some(select) = &self.as_select {
            r.sql.push_str(" AS ");
            r.sql.push_str(select);
        }
        Ok(())
    }
}

impl Render for ColumnDef {
    fn render(&self, r: &mut Renderer) -> Result<(), DdlError> {
        let native = r
            .dialect
            .render_data_type(&self.data_type, &self.type_options())?;

        // Name and Type
        r.push_identifier(&self.name);
        r.sql.push(' ');
        r.sql
            .push_str(&r.dialect.render_nullable(&native, self.is_nullable()));

        if let Some(default) = &self.default {
            r.sql.push_str(" DEFAULT ");
            r.sql
                .push_str(&r.dialect.render_default(default, &self.data_type));
        }
        Ok(())
    }
}

fn render_primary_key(columns: &[String], r: &mut Renderer) {
    r.sql.push_str("PRIMARY KEY (");
    let quoted: Vec<String> = columns
        .iter()
        .map(|c| r.dialect.quote_identifier(c))
        .collect();
    r.sql.push_str(&quoted.join(", "));
    r.sql.push(')');
}
