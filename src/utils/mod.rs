//! Utility modules shared by the storage layer.
//!
//! - [`datetime`] - Conversion of stored Unix-second timestamps

pub mod datetime;
