use crate::{
    error::DdlError,
    query::{
        ast::{
            alter_table::{AlterTable, AlterTableOperation, ColumnChangeRequest, ModifyColumn},
            create_table::{ColumnDef, CreateTable},
        },
        dialect::{ClickHouse, Dialect},
        renderer::{Render, Renderer, alter_table::render_add_column},
    },
    settings::DdlSettings,
};
use tracing::debug;

/// Turns definitions into DDL statement text.
///
/// Compilation is pure: the same definition always yields the same text, and
/// a compiler can be shared across threads.
pub struct DdlCompiler<'a> {
    dialect: &'a dyn Dialect,
    settings: DdlSettings,
}

impl DdlCompiler<'static> {
    pub fn clickhouse(settings: DdlSettings) -> Self {
        Self::new(&ClickHouse, settings)
    }
}

impl Default for DdlCompiler<'static> {
    fn default() -> Self {
        Self::clickhouse(DdlSettings::default())
    }
}

impl<'a> DdlCompiler<'a> {
    pub fn new(dialect: &'a dyn Dialect, settings: DdlSettings) -> Self {
        Self { dialect, settings }
    }

    pub fn settings(&self) -> &DdlSettings {
        &self.settings
    }

    /// `CREATE [TEMPORARY|MATERIALIZED|LIVE] TABLE|VIEW ...`
    pub fn compile_create(&self, definition: &CreateTable) -> Result<String, DdlError> {
        self.render_ast(definition)
    }

    /// `ADD COLUMN <column> [AFTER <column>]`
    pub fn compile_add_column(&self, column: &ColumnDef) -> Result<String, DdlError> {
        self.render_with(|r| render_add_column(column, r))
    }

    /// `MODIFY COLUMN <name> <type> [DEFAULT <expr>]`
    pub fn compile_modify_column(&self, modify: &ModifyColumn) -> Result<String, DdlError> {
        self.render_ast(modify)
    }

    /// Compiles a change request from the migration layer into its column fragment.
    pub fn compile_change(&self, request: ColumnChangeRequest) -> Result<String, DdlError> {
        match AlterTableOperation::try_from(request)? {
            AlterTableOperation::AddColumn(column) => self.compile_add_column(&column),
            AlterTableOperation::ModifyColumn(modify) => self.compile_modify_column(&modify),
        }
    }

    /// `ALTER TABLE <name> <operation>, ...`
    pub fn compile_alter(&self, alter: &AlterTable) -> Result<String, DdlError> {
        self.render_ast(alter)
    }

    fn render_ast(&self, ast: &impl Render) -> Result<String, DdlError> {
        self.render_with(|r| ast.render(r))
    }

    fn render_with<F>(&self, render: F) -> Result<String, DdlError>
    where
        F: FnOnce(&mut Renderer) -> Result<(), DdlError>,
    {
        let mut renderer = Renderer::new(self.dialect, &self.settings);
        render(&mut renderer)?;
        let sql = renderer.finish();
        debug!(dialect = %self.dialect.name(), sql = %sql, "compiled DDL statement");
        Ok(sql)
    }
}
