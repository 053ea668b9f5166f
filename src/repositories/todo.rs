//! Todo repository for database operations.

use log::{debug, info};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    TransactionTrait,
};

use crate::constants::SQL_NOW;
use crate::entities::todo;
use crate::error::{Result, StoreError};
use crate::models::{NewTodo, Todo, TodoChanges};
use crate::repositories::AssociationRepository;
use crate::status::TodoStatus;

/// Repository for todo-related database operations.
///
/// Writes are followed by a read-back in the same transaction, so the
/// returned value always reflects what was committed.
pub struct TodoRepository {
    conn: DatabaseConnection,
}

impl TodoRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Insert an `Open` todo and return it as stored.
    pub async fn create(&self, new_todo: NewTodo) -> Result<Todo> {
        new_todo.validate()?;

        let txn = self.conn.begin().await.map_err(StoreError::Connection)?;
        let row = todo::ActiveModel {
            title: ActiveValue::Set(new_todo.title),
            description: ActiveValue::Set(new_todo.description),
            status: ActiveValue::Set(TodoStatus::Open.code()),
            ..Default::default()
        };
        let inserted = todo::Entity::insert(row)
            .exec(&txn)
            .await
            .map_err(StoreError::write("insert todo"))?;
        let id = inserted.last_insert_id;
        info!("Inserted todo {}", id);

        let created = Self::find_hydrated(&txn, id).await?.ok_or_else(|| StoreError::Write {
            context: "read back todo",
            source: DbErr::RecordNotFound(format!("todo {}", id)),
        })?;
        txn.commit().await.map_err(StoreError::write("commit todo"))?;

        Ok(created)
    }

    /// Get a single todo with its tags. `None` when no row matches.
    pub async fn get(&self, id: i64) -> Result<Option<Todo>> {
        Self::find_hydrated(&self.conn, id).await
    }

    /// Get all todos in storage order. Tags are not loaded.
    pub async fn get_all(&self) -> Result<Vec<Todo>> {
        let rows = todo::Entity::find()
            .all(&self.conn)
            .await
            .map_err(StoreError::read("fetch all todos"))?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    /// Apply `changes`, refresh `updatedAt` and return the stored result.
    ///
    /// Updating a missing id writes nothing and yields `None`.
    pub async fn update(&self, id: i64, changes: TodoChanges) -> Result<Option<Todo>> {
        changes.validate()?;

        let mut query = todo::Entity::update_many()
            .col_expr(todo::Column::UpdatedAt, Expr::cust(SQL_NOW))
            .filter(todo::Column::Id.eq(id));
        if let Some(title) = changes.title {
            query = query.col_expr(todo::Column::Title, Expr::value(title));
        }
        if let Some(description) = changes.description {
            query = query.col_expr(todo::Column::Description, Expr::value(description));
        }
        if let Some(status) = changes.status {
            query = query.col_expr(todo::Column::Status, Expr::value(status.code()));
        }

        let txn = self.conn.begin().await.map_err(StoreError::Connection)?;
        let result = query.exec(&txn).await.map_err(StoreError::write("update todo"))?;
        info!("Updated todo {}: {} row(s) affected", id, result.rows_affected);

        let updated = Self::find_hydrated(&txn, id).await?;
        txn.commit().await.map_err(StoreError::write("commit todo"))?;

        Ok(updated)
    }

    /// Delete a todo and return the number of removed rows (0 or 1).
    ///
    /// Associations pointing at the todo are left in place.
    pub async fn delete(&self, id: i64) -> Result<u64> {
        let result = todo::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(StoreError::write("delete todo"))?;
        info!("Deleted todo {}: {} row(s) affected", id, result.rows_affected);
        Ok(result.rows_affected)
    }

    async fn find_hydrated<C>(conn: &C, id: i64) -> Result<Option<Todo>>
    where
        C: ConnectionTrait,
    {
        let row = todo::Entity::find_by_id(id)
            .one(conn)
            .await
            .map_err(StoreError::read("fetch todo"))?;

        match row {
            Some(model) => {
                let tags = AssociationRepository::tags_for_todo(conn, id).await?;
                if tags.is_empty() {
                    info!("No tags for todo id: {}", id);
                }
                Ok(Some(Todo::with_tags(model, tags)))
            }
            None => {
                debug!("No todo with id {}", id);
                Ok(None)
            }
        }
    }
}
