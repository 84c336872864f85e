use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::db::entities::idea_group;

// --- Group Service Functions ---

/// Partial update for a group. `description` and `icon` distinguish "absent"
/// from "null" so callers can clear them.
#[derive(Debug, Default, Deserialize)]
pub struct GroupChanges {
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<Option<String>>,
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<Option<String>>,
}

/// Retrieves all groups for a user, newest first.
pub async fn list_groups_by_user_id(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Vec<idea_group::Model>, DbErr> {
    idea_group::Entity::find()
        .filter(idea_group::Column::UserId.eq(user_id))
        .order_by_desc(idea_group::Column::CreatedAt)
        .all(db)
        .await
}

/// Creates a new group for a user.
pub async fn create_group(
    db: &DatabaseConnection,
    user_id: i32,
    name: String,
    description: Option<String>,
    color: String,
    icon: Option<String>,
) -> Result<idea_group::Model, DbErr> {
    let now = Utc::now();
    let active = idea_group::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        name: Set(name),
        description: Set(description),
        color: Set(color),
        icon: Set(icon),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(db).await
}

/// Applies a partial update to a group. Returns `None` when the group does
/// not exist or the user does not own it.
pub async fn update_group(
    db: &DatabaseConnection,
    group_id: Uuid,
    user_id: i32,
    changes: GroupChanges,
) -> Result<Option<idea_group::Model>, DbErr> {
    let existing = idea_group::Entity::find_by_id(group_id)
        .filter(idea_group::Column::UserId.eq(user_id))
        .one(db)
        .await?;
    let Some(model) = existing else {
        return Ok(None);
    };

    let mut active = model.into_active_model();
    if let Some(name) = changes.name {
        active.name = Set(name);
    }
    if let Some(description) = changes.description {
        active.description = Set(description);
    }
    if let Some(color) = changes.color {
        active.color = Set(color);
    }
    if let Some(icon) = changes.icon {
        active.icon = Set(icon);
    }
    active.updated_at = Set(Utc::now());

    active.update(db).await.map(Some)
}

/// Deletes a group. Member ideas are not touched here; the `ON DELETE SET
/// NULL` constraint on `ideas.group_id` leaves them ungrouped.
pub async fn delete_group(
    db: &DatabaseConnection,
    group_id: Uuid,
    user_id: i32,
) -> Result<u64, DbErr> {
    let res = idea_group::Entity::delete_many()
        .filter(idea_group::Column::Id.eq(group_id))
        .filter(idea_group::Column::UserId.eq(user_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
