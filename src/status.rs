//! Todo lifecycle status.
//!
//! Statuses are stored as small integer codes. Any transition between them is
//! allowed; codes outside the known set still round-trip and decode to
//! [`TodoStatus::Unknown`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{STATUS_CLOSED, STATUS_IN_PROGRESS, STATUS_OPEN, STATUS_UNKNOWN};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum TodoStatus {
    #[default]
    Open,
    InProgress,
    Closed,
    /// Stored code outside the known set, kept as-is.
    Unknown(i32),
}

impl TodoStatus {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Open,
            1 => Self::InProgress,
            2 => Self::Closed,
            other => Self::Unknown(other),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Open => 0,
            Self::InProgress => 1,
            Self::Closed => 2,
            Self::Unknown(code) => code,
        }
    }

    /// Human-readable label used by presentation layers.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Open => STATUS_OPEN,
            Self::InProgress => STATUS_IN_PROGRESS,
            Self::Closed => STATUS_CLOSED,
            Self::Unknown(_) => STATUS_UNKNOWN,
        }
    }
}

impl From<i32> for TodoStatus {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl From<TodoStatus> for i32 {
    fn from(status: TodoStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
