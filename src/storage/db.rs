use std::time::Duration;

use log::info;
use sea_orm::sqlx::sqlite::SqlitePoolOptions;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, RuntimeErr, SqlxSqliteConnector};

use crate::config::DatabaseConfig;
use crate::constants::IN_MEMORY_DATABASE_URL;
use crate::error::{Result, StoreError};
use crate::repositories::{AssociationRepository, TagRepository, TodoRepository};
use crate::storage::schema::ensure_schema;

/// Local storage manager: a bounded connection pool with the schema in place.
///
/// Repositories get a clone of the pool handle; each operation checks a
/// connection out and returns it before the call completes.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    pub conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open the pool described by `config` and ensure the schema exists.
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .sqlx_logging(config.sqlx_logging);

        Self::open(options).await
    }

    /// Open a private in-memory database.
    ///
    /// Every SQLite in-memory connection is a separate database, so the pool is
    /// pinned to a single connection that is never reaped or rotated.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None) // avoid idle reaping
            .max_lifetime(None) // avoid lifetime rotation
            .connect(IN_MEMORY_DATABASE_URL)
            .await
            .map_err(|e| StoreError::Connection(DbErr::Conn(RuntimeErr::SqlxError(e))))?;

        let conn = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);
        Self::prepare(conn, IN_MEMORY_DATABASE_URL).await
    }

    async fn open(options: ConnectOptions) -> Result<Self> {
        let url = options.get_url().to_string();
        let conn = Database::connect(options).await.map_err(StoreError::Connection)?;
        Self::prepare(conn, &url).await
    }

    async fn prepare(conn: DatabaseConnection, url: &str) -> Result<Self> {
        conn.ping().await.map_err(StoreError::Connection)?;

        ensure_schema(&conn).await?;
        info!("Opened storage at {}", url);

        Ok(Self { conn })
    }

    pub fn todos(&self) -> TodoRepository {
        TodoRepository::new(self.conn.clone())
    }

    pub fn tags(&self) -> TagRepository {
        TagRepository::new(self.conn.clone())
    }

    pub fn associations(&self) -> AssociationRepository {
        AssociationRepository::new(self.conn.clone())
    }

    /// Close the pool. Repositories created from this storage stop working.
    pub async fn close(self) -> Result<()> {
        self.conn.close().await.map_err(StoreError::Connection)?;
        info!("Closed storage");
        Ok(())
    }
}
