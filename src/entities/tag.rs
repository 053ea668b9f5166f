use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::datetime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_name = "createdAt")]
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Model {
    pub fn created_at_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        datetime::from_unix_seconds(self.created_at)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::todo_tag::Entity")]
    TodoTags,
}

impl Related<super::todo_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TodoTags.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
