//! Tag repository for database operations.

use log::{debug, info};
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, TransactionTrait};

use crate::entities::tag;
use crate::error::{Result, StoreError};
use crate::models::{validate_tag_name, Tag};

/// Repository for tag-related database operations.
pub struct TagRepository {
    conn: DatabaseConnection,
}

impl TagRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Insert a tag and read it back with its generated id and timestamp.
    pub async fn create(&self, name: &str) -> Result<Tag> {
        validate_tag_name(name)?;

        let txn = self.conn.begin().await.map_err(StoreError::Connection)?;
        let new_tag = tag::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };
        let inserted = tag::Entity::insert(new_tag)
            .exec(&txn)
            .await
            .map_err(StoreError::write("insert tag"))?;
        let id = inserted.last_insert_id;
        info!("Inserted tag {}", id);

        let created = tag::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(StoreError::read("read back tag"))?
            .ok_or_else(|| StoreError::Write {
                context: "read back tag",
                source: DbErr::RecordNotFound(format!("tag {}", id)),
            })?;
        txn.commit().await.map_err(StoreError::write("commit tag"))?;

        Ok(created)
    }

    /// Get a single tag by id. `None` when no row matches.
    pub async fn get(&self, id: i64) -> Result<Option<Tag>> {
        let found = tag::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(StoreError::read("fetch tag"))?;
        if found.is_none() {
            debug!("No tag with id {}", id);
        }
        Ok(found)
    }

    /// Get all tags in storage order.
    pub async fn get_all(&self) -> Result<Vec<Tag>> {
        tag::Entity::find()
            .all(&self.conn)
            .await
            .map_err(StoreError::read("fetch all tags"))
    }

    /// Delete a tag and return the number of removed rows (0 or 1).
    ///
    /// Associations pointing at the tag are left in place.
    pub async fn delete(&self, id: i64) -> Result<u64> {
        let result = tag::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(StoreError::write("delete tag"))?;
        info!("Deleted tag {}: {} row(s) affected", id, result.rows_affected);
        Ok(result.rows_affected)
    }
}
