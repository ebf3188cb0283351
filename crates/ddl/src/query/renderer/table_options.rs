//! Chooses the clause that follows the body of a CREATE statement.
//!
//! The decision is a dispatch over the kind of object being created and
//! whether free-form options were given. Checks run in this order:
//!
//! 1. live view with options: the options replace the whole statement
//! 2. any view whose options contain a `TO` clause: `TO <target>`
//! 3. plain view with options: the options are appended as the view body
//! 4. materialized view or table with options: `ENGINE = <options>`
//! 5. table without options: `ENGINE = <default engine>`
//! 6. view without options: nothing

use crate::query::ast::create_table::TableKind;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TO_CLAUSE: Regex = Regex::new(r"(?s)(?:^|\s)TO\s+(.+)$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailingClause {
    Engine(String),
    Body(String),
    To(String),
    Replace(String),
    None,
}

impl TrailingClause {
    pub fn resolve(kind: TableKind, options: Option<&str>, default_engine: &str) -> Self {
        let options = options.map(str::trim).filter(|o| !o.is_empty());

        match (kind, options) {
            (TableKind::Table, None) => TrailingClause::Engine(default_engine.to_string()),
            (_, None) => TrailingClause::None,
            (TableKind::Table, Some(opts)) => TrailingClause::Engine(opts.to_string()),
            (TableKind::LiveView, Some(opts)) => TrailingClause::Replace(opts.to_string()),
            (view_kind, Some(opts)) => match (to_target(opts), view_kind) {
                (Some(target), _) => TrailingClause::To(target),
                (None, TableKind::View) => TrailingClause::Body(opts.to_string()),
                (None, _) => TrailingClause::Engine(opts.to_string()),
            },
        }
    }

    /// Applies the clause to the statement written so far.
    pub fn apply(&self, sql: &mut String) {
        match self {
            TrailingClause::Engine(engine) => {
                sql.push_str(" ENGINE = ");
                sql.push_str(engine);
            }
            TrailingClause::Body(body) => {
                sql.push(' ');
                sql.push_str(body);
            }
            TrailingClause::To(target) => {
                sql.push_str(" TO ");
                sql.push_str(target);
            }
            TrailingClause::Replace(statement) => {
                sql.clear();
                sql.push_str(statement);
            }
            TrailingClause::None => {}
        }
    }
}

/// Text following the first `TO` keyword, if any.
fn to_target(options: &str) -> Option<String> {
    TO_CLAUSE
        .captures(options)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|t| !t.is_empty())
}
