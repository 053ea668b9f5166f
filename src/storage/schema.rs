//! Idempotent table creation.

use log::debug;
use sea_orm::{ConnectionTrait, DbBackend, Statement};

use crate::constants::{TABLE_TAGS, TABLE_TODOS, TABLE_TODOS_TAGS};
use crate::error::{Result, StoreError};

// Timestamps default to Unix seconds. No foreign keys on the join table:
// deleting a todo or tag leaves its associations in place.
const TABLES: [(&str, &str); 3] = [
    (
        TABLE_TODOS,
        r"
        CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY,
            title TEXT,
            description TEXT,
            createdAt TIMESTAMP DEFAULT (strftime('%s', 'now')),
            updatedAt TIMESTAMP DEFAULT (strftime('%s', 'now')),
            status INTEGER
        )
        ",
    ),
    (
        TABLE_TAGS,
        r"
        CREATE TABLE IF NOT EXISTS tags (
            id INTEGER PRIMARY KEY,
            name TEXT,
            createdAt TIMESTAMP DEFAULT (strftime('%s', 'now'))
        )
        ",
    ),
    (
        TABLE_TODOS_TAGS,
        r"
        CREATE TABLE IF NOT EXISTS todos_tags (
            id INTEGER PRIMARY KEY,
            todo_id INTEGER,
            tag_id INTEGER
        )
        ",
    ),
];

/// Create the `todos`, `tags` and `todos_tags` tables if they are missing.
///
/// Safe to call on every start; on an initialized store it changes nothing.
pub async fn ensure_schema<C>(conn: &C) -> Result<()>
where
    C: ConnectionTrait,
{
    for (table, ddl) in TABLES {
        conn.execute_unprepared(ddl)
            .await
            .map_err(|source| StoreError::Schema { table, source })?;
        debug!("Ensured table {}", table);
    }
    Ok(())
}

/// Check whether a table with the given name exists.
pub async fn table_exists<C>(conn: &C, name: &str) -> Result<bool>
where
    C: ConnectionTrait,
{
    let row = conn
        .query_one(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            "SELECT COUNT(*) AS count FROM sqlite_master WHERE type = 'table' AND name = ?",
            [name.into()],
        ))
        .await
        .map_err(StoreError::read("inspect schema"))?;

    let count = match row {
        Some(row) => row
            .try_get::<i64>("", "count")
            .map_err(StoreError::read("inspect schema"))?,
        None => 0,
    };
    Ok(count > 0)
}
