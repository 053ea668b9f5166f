//! Constants used throughout the crate
//!
//! Table names, status labels and configuration defaults live here so the
//! schema, repositories and config agree on them.

// Tables
pub const TABLE_TODOS: &str = "todos";
pub const TABLE_TAGS: &str = "tags";
pub const TABLE_TODOS_TAGS: &str = "todos_tags";

// Status display labels
pub const STATUS_OPEN: &str = "Open";
pub const STATUS_IN_PROGRESS: &str = "In Progress";
pub const STATUS_CLOSED: &str = "Closed";
pub const STATUS_UNKNOWN: &str = "Unknown";

// SQLite expression for the current time in Unix seconds
pub const SQL_NOW: &str = "strftime('%s', 'now')";

// Database defaults
pub const DEFAULT_DATABASE_URL: &str = "sqlite://todo.db?mode=rwc";
pub const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 4;
pub const DEFAULT_MIN_CONNECTIONS: u32 = 1;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

// Configuration and logging
pub const APP_DIR_NAME: &str = "todostore";
pub const LOCAL_CONFIG_FILE: &str = "todostore.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "todostore.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const CONFIG_GENERATED: &str = "Generated default configuration";
