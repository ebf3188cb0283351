//! Defines the core rendering trait and context for converting AST to DDL.

use crate::{
    error::DdlError,
    query::{ast::common::TableRef, dialect::Dialect},
    settings::DdlSettings,
};

pub mod alter_table;
pub mod create_table;
pub mod table_options;

/// A trait for any AST node that can be rendered into DDL text.
pub trait Render {
    fn render(&self, renderer: &mut Renderer) -> Result<(), DdlError>;
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the statement text and provides access to the dialect
/// and settings. On error the partially written text must be discarded.
pub struct Renderer<'a> {
    pub sql: String,
    pub dialect: &'a dyn Dialect,
    pub settings: &'a DdlSettings,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect, settings: &'a DdlSettings) -> Self {
        Self {
            sql: String::new(),
            dialect,
            settings,
        }
    }

    /// Consumes the renderer and returns the final statement text.
    pub fn finish(self) -> String {
        self.sql
    }

    pub fn render_table_ref(&mut self, table: &TableRef) {
        if let Some(schema) = &table.schema {
            self.sql.push_str(&self.dialect.quote_identifier(schema));
            self.sql.push('.');
        }
        self.sql.push_str(&self.dialect.quote_identifier(&table.name));
    }

    pub fn push_identifier(&mut self, ident: &str) {
        let quoted = self.dialect.quote_identifier(ident);
        self.sql.push_str(&quoted);
    }
}
