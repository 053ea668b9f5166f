//! Association repository for linking tags to todos.

use log::info;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::entities::{tag, todo_tag};
use crate::error::{Result, StoreError};
use crate::models::Tag;

/// Repository for the `todos_tags` join table.
pub struct AssociationRepository {
    conn: DatabaseConnection,
}

impl AssociationRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Link a tag to a todo and return the id of the new join row.
    ///
    /// Neither id is checked for existence and duplicate links are accepted.
    pub async fn associate(&self, tag_id: i64, todo_id: i64) -> Result<i64> {
        let link = todo_tag::ActiveModel {
            id: ActiveValue::NotSet,
            todo_id: ActiveValue::Set(todo_id),
            tag_id: ActiveValue::Set(tag_id),
        };

        let inserted = todo_tag::Entity::insert(link)
            .exec(&self.conn)
            .await
            .map_err(StoreError::write("associate tag"))?;

        info!("Associated tag {} with todo {} ({})", tag_id, todo_id, inserted.last_insert_id);
        Ok(inserted.last_insert_id)
    }

    /// Get the tags linked to a todo, in link order.
    ///
    /// Links whose tag no longer exists are skipped; a tag linked twice is
    /// returned twice.
    pub async fn tags_for_todo<C>(conn: &C, todo_id: i64) -> Result<Vec<Tag>>
    where
        C: ConnectionTrait,
    {
        tag::Entity::find()
            .join(JoinType::InnerJoin, tag::Relation::TodoTags.def())
            .filter(todo_tag::Column::TodoId.eq(todo_id))
            .order_by_asc(todo_tag::Column::Id)
            .all(conn)
            .await
            .map_err(StoreError::read("load tags of todo"))
    }
}
