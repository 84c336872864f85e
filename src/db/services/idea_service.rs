use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::db::entities::idea;
use crate::db::enums::{IdeaColor, IdeaStatus};

// --- Idea Service Functions ---

/// Fields accepted when creating an idea. Ownership and timestamps are
/// assigned server-side.
#[derive(Debug, Deserialize)]
pub struct NewIdea {
    pub title: String,
    pub description: String,
    pub status: IdeaStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    pub color: IdeaColor,
    pub image_url: Option<String>,
    pub group_id: Option<Uuid>,
}

/// Partial update for an idea. `group_id` and `image_url` distinguish
/// "absent" (leave unchanged) from "null" (clear the field).
#[derive(Debug, Default, Deserialize)]
pub struct IdeaChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<IdeaStatus>,
    pub tags: Option<Vec<String>>,
    pub color: Option<IdeaColor>,
    #[serde(default)]
    pub image_url: Option<Option<String>>,
    #[serde(default)]
    pub group_id: Option<Option<Uuid>>,
}

/// Retrieves all ideas for a user, newest first.
pub async fn list_ideas_by_user_id(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Vec<idea::Model>, DbErr> {
    idea::Entity::find()
        .filter(idea::Column::UserId.eq(user_id))
        .order_by_desc(idea::Column::CreatedAt)
        // Id tiebreak keeps the order stable when two ideas share a
        // creation timestamp.
        .order_by_desc(idea::Column::Id)
        .all(db)
        .await
}

/// Retrieves a single idea, returning `None` when it does not exist or is
/// owned by a different user.
pub async fn get_idea_by_id(
    db: &DatabaseConnection,
    idea_id: Uuid,
    user_id: i32,
) -> Result<Option<idea::Model>, DbErr> {
    idea::Entity::find_by_id(idea_id)
        .filter(idea::Column::UserId.eq(user_id))
        .one(db)
        .await
}

/// Creates a new idea for a user.
pub async fn create_idea(
    db: &DatabaseConnection,
    user_id: i32,
    new_idea: NewIdea,
) -> Result<idea::Model, DbErr> {
    let now = Utc::now();
    let active = idea::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        title: Set(new_idea.title),
        description: Set(new_idea.description),
        status: Set(new_idea.status),
        tags: Set(serde_json::json!(new_idea.tags)),
        color: Set(new_idea.color),
        image_url: Set(new_idea.image_url),
        original_description: Set(None),
        group_id: Set(new_idea.group_id),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(db).await
}

/// Applies a partial update to an idea. Returns `None` when the idea does
/// not exist or the user does not own it.
pub async fn update_idea(
    db: &DatabaseConnection,
    idea_id: Uuid,
    user_id: i32,
    changes: IdeaChanges,
) -> Result<Option<idea::Model>, DbErr> {
    let Some(model) = get_idea_by_id(db, idea_id, user_id).await? else {
        return Ok(None);
    };

    let mut active = model.into_active_model();
    if let Some(title) = changes.title {
        active.title = Set(title);
    }
    if let Some(description) = changes.description {
        active.description = Set(description);
    }
    if let Some(status) = changes.status {
        active.status = Set(status);
    }
    if let Some(tags) = changes.tags {
        active.tags = Set(serde_json::json!(tags));
    }
    if let Some(color) = changes.color {
        active.color = Set(color);
    }
    if let Some(image_url) = changes.image_url {
        active.image_url = Set(image_url);
    }
    if let Some(group_id) = changes.group_id {
        active.group_id = Set(group_id);
    }
    active.updated_at = Set(Utc::now());

    active.update(db).await.map(Some)
}

/// Deletes an idea. Returns the number of rows removed (0 when the idea is
/// missing or owned by another user).
pub async fn delete_idea(
    db: &DatabaseConnection,
    idea_id: Uuid,
    user_id: i32,
) -> Result<u64, DbErr> {
    let res = idea::Entity::delete_many()
        .filter(idea::Column::Id.eq(idea_id))
        .filter(idea::Column::UserId.eq(user_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

/// Computes the description fields after an AI enhancement: the enhanced
/// text becomes the description, and the pre-enhancement text is kept in
/// `original_description`. A prior original survives repeated enhancement,
/// so undo always restores the user-authored text.
pub fn enhancement_fields(model: &idea::Model, enhanced: String) -> (String, Option<String>) {
    let original = model
        .original_description
        .clone()
        .or_else(|| Some(model.description.clone()));
    (enhanced, original)
}

/// Computes the description fields for an enhancement undo. Returns `None`
/// when no original is stored.
pub fn undo_fields(model: &idea::Model) -> Option<(String, Option<String>)> {
    model
        .original_description
        .as_ref()
        .map(|original| (original.clone(), None))
}

/// Persists a description/original pair produced by `enhancement_fields` or
/// `undo_fields`.
pub async fn set_description_fields(
    db: &DatabaseConnection,
    model: idea::Model,
    description: String,
    original_description: Option<String>,
) -> Result<idea::Model, DbErr> {
    let mut active = model.into_active_model();
    active.description = Set(description);
    active.original_description = Set(original_description);
    active.updated_at = Set(Utc::now());
    active.update(db).await
}

/// Stores a generated image reference on an idea.
pub async fn set_image_url(
    db: &DatabaseConnection,
    model: idea::Model,
    image_url: String,
) -> Result<idea::Model, DbErr> {
    let mut active = model.into_active_model();
    active.image_url = Set(Some(image_url));
    active.updated_at = Set(Utc::now());
    active.update(db).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_idea(description: &str, original: Option<&str>) -> idea::Model {
        let now = Utc::now();
        idea::Model {
            id: Uuid::new_v4(),
            user_id: 1,
            title: "Recipe App".to_string(),
            description: description.to_string(),
            status: IdeaStatus::Idea,
            tags: serde_json::json!(["AI"]),
            color: IdeaColor::Yellow,
            image_url: None,
            original_description: original.map(|s| s.to_string()),
            group_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_enhancement_preserves_original() {
        let idea = sample_idea("plain text", None);
        let (description, original) = enhancement_fields(&idea, "enhanced text".to_string());
        assert_eq!(description, "enhanced text");
        assert_eq!(original.as_deref(), Some("plain text"));
    }

    #[test]
    fn test_repeated_enhancement_keeps_first_original() {
        let idea = sample_idea("already enhanced", Some("user authored"));
        let (description, original) = enhancement_fields(&idea, "enhanced again".to_string());
        assert_eq!(description, "enhanced again");
        assert_eq!(original.as_deref(), Some("user authored"));
    }

    #[test]
    fn test_undo_after_enhance_round_trips() {
        let original_text = "the original description";
        let idea = sample_idea(original_text, None);

        let (enhanced, stored_original) = enhancement_fields(&idea, "fancier".to_string());
        let mut enhanced_idea = idea.clone();
        enhanced_idea.description = enhanced;
        enhanced_idea.original_description = stored_original;

        let (restored, cleared) = undo_fields(&enhanced_idea).unwrap();
        assert_eq!(restored, original_text);
        assert_eq!(cleared, None);
    }

    #[test]
    fn test_undo_without_original_is_none() {
        let idea = sample_idea("never enhanced", None);
        assert!(undo_fields(&idea).is_none());
    }
}
