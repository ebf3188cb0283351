//! Compiles table and column definitions into ClickHouse DDL text.
//!
//! Nothing here executes statements or talks to a server: definitions go in,
//! statement text comes out.

pub mod compiler;
pub mod error;
pub mod query;
pub mod settings;
