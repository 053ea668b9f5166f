//! Repository layer for database operations.
//!
//! Each repository holds a handle to the shared connection pool and exposes
//! plain async operations returning models or [`StoreError`](crate::error::StoreError).
//! A missing row is `Ok(None)`, never an error.

pub mod association;
pub mod tag;
pub mod todo;

pub use association::AssociationRepository;
pub use tag::TagRepository;
pub use todo::TodoRepository;
