//! Local storage module for todo persistence
//!
//! This module owns the SQLite connection pool and the schema:
//! - Todos
//! - Tags
//! - Todo-tag associations

pub mod db;
pub mod schema;

pub use db::LocalStorage;
pub use schema::{ensure_schema, table_exists};
