//! Timestamp helpers
//!
//! The store writes `createdAt`/`updatedAt` as Unix seconds via SQLite's
//! `strftime('%s', 'now')`. These helpers turn them into `chrono` values.

use chrono::{DateTime, Utc};

/// Standard date format used for config headers
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Convert stored Unix seconds to a UTC datetime
///
/// # Returns
/// * `None` if the value is outside chrono's representable range
pub fn from_unix_seconds(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}
