//! Values exchanged with repository callers.
//!
//! [`Todo`] is the hydrated view of a `todos` row: on single-item reads it
//! carries a snapshot of the tags linked through `todos_tags`. Bulk reads and
//! bare rows leave `tags` empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{tag, todo};
use crate::error::{Result, StoreError};
use crate::status::TodoStatus;
use crate::utils::datetime;

/// A tag row. Names are not unique across tags.
pub type Tag = tag::Model;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
    #[serde(rename = "updatedAt")]
    pub updated_at: i64,
    pub status: TodoStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl Todo {
    /// Combine a stored row with the tags linked to it.
    pub fn with_tags(model: todo::Model, tags: Vec<Tag>) -> Self {
        let status = model.status();
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
            status,
            tags,
        }
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        datetime::from_unix_seconds(self.created_at)
    }

    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        datetime::from_unix_seconds(self.updated_at)
    }
}

impl From<todo::Model> for Todo {
    fn from(model: todo::Model) -> Self {
        Self::with_tags(model, Vec::new())
    }
}

/// Input for creating a todo. New todos always start [`TodoStatus::Open`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)
    }
}

/// Fields overwritten by an update. `None` keeps the stored value.
///
/// `updatedAt` is always refreshed, even when every field is `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TodoStatus>,
}

impl TodoChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn status(mut self, status: TodoStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn validate(&self) -> Result<()> {
        match &self.title {
            Some(title) => validate_title(title),
            None => Ok(()),
        }
    }
}

impl From<&Todo> for TodoChanges {
    /// Full overwrite with the values currently held by `todo`.
    fn from(todo: &Todo) -> Self {
        Self {
            title: Some(todo.title.clone()),
            description: Some(todo.description.clone()),
            status: Some(todo.status),
        }
    }
}

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(StoreError::Validation("todo title cannot be empty".to_string()));
    }
    Ok(())
}

pub(crate) fn validate_tag_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(StoreError::Validation("tag name cannot be empty".to_string()));
    }
    Ok(())
}
