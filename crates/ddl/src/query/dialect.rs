//! Defines the `Dialect` trait for database-specific DDL syntax.

use model::{
    core::{
        data_type::{SemanticType, TypeOptions, strip_string_length, unwrap_nullable, wrap_nullable},
        default_value::ColumnDefault,
        registry::TypeRegistry,
        value::{Value, quote_string},
    },
    error::TypeError,
};

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    fn quote_identifier(&self, ident: &str) -> String;

    /// Renders a semantic type into a native type string, without nullability.
    fn render_data_type(
        &self,
        data_type: &SemanticType,
        options: &TypeOptions,
    ) -> Result<String, TypeError>;

    /// Applies or removes the dialect's nullability marker on a native type.
    fn render_nullable(&self, native: &str, nullable: bool) -> String;

    /// Renders the expression that follows `DEFAULT`.
    fn render_default(&self, default: &ColumnDefault, data_type: &SemanticType) -> String;

    /// Returns the name of the dialect.
    fn name(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct ClickHouse;

impl Dialect for ClickHouse {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#"\""#))
    }

    fn render_data_type(
        &self,
        data_type: &SemanticType,
        options: &TypeOptions,
    ) -> Result<String, TypeError> {
        TypeRegistry::global().native_type_for(data_type, options)
    }

    fn render_nullable(&self, native: &str, nullable: bool) -> String {
        let native = strip_string_length(native);
        if nullable {
            wrap_nullable(&native)
        } else {
            unwrap_nullable(&native).0.to_string()
        }
    }

    fn render_default(&self, default: &ColumnDefault, data_type: &SemanticType) -> String {
        match default {
            ColumnDefault::Function(expr) => expr.clone(),
            ColumnDefault::Value(Value::Null) => "NULL".to_string(),
            // A bare number given for a string-like column is still a string.
            ColumnDefault::Value(value) if !data_type.is_numeric() && !value.is_quoted() => {
                format!("'{}'", quote_string(&value.as_string().unwrap_or_default()))
            }
            ColumnDefault::Value(value) => value.to_string(),
        }
    }

    fn name(&self) -> String {
        "ClickHouse".into()
    }
}
