//! todostore - SQLite storage for todos and tags
//!
//! This library persists todos and free-form tags, and links tags to todos
//! through a join table. It exposes plain async operations returning typed
//! values; HTTP routing and serialization are left to callers.
//!
//! # Modules
//!
//! * [`storage`] - Connection pool and idempotent schema creation
//! * [`repositories`] - Todo, tag and association operations
//! * [`entities`] - SeaORM entity models for the three tables
//! * [`config`] - Configuration loading and validation
//! * [`logger`] - `fern` based log setup

/// Configuration module for database and logging settings
pub mod config;

/// Table names, labels and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Typed errors for storage operations
pub mod error;

/// Logging setup
pub mod logger;

/// Values passed to and returned from repositories
pub mod models;

/// Repository layer for database operations
pub mod repositories;

/// Todo lifecycle status codes
pub mod status;

/// Connection pool and schema management
pub mod storage;

/// Timestamp helpers
pub mod utils;

pub use error::{Result, StoreError};
pub use models::{NewTodo, Tag, Todo, TodoChanges};
pub use repositories::{AssociationRepository, TagRepository, TodoRepository};
pub use status::TodoStatus;
pub use storage::LocalStorage;
