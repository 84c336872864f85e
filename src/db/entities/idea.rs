use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::enums::{IdeaColor, IdeaStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ideas")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub status: IdeaStatus,
    /// JSON array of tag strings. Uniqueness is not enforced.
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,
    pub color: IdeaColor,
    pub image_url: Option<String>,
    /// Pre-enhancement description, kept for one-level undo.
    pub original_description: Option<String>,
    pub group_id: Option<Uuid>,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::idea_group::Entity",
        from = "Column::GroupId",
        to = "super::idea_group::Column::Id",
        // Deleting a group orphans its ideas rather than deleting them.
        on_delete = "SetNull",
        on_update = "Cascade"
    )]
    IdeaGroup,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::idea_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IdeaGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
