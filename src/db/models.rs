use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::entities::{idea, user_setting};
use crate::db::enums::{IdeaColor, IdeaStatus};

/// API-facing view of an idea. Mirrors the `ideas` table but carries tags as
/// a typed list instead of raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idea {
    pub id: Uuid,
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub status: IdeaStatus,
    pub tags: Vec<String>,
    pub color: IdeaColor,
    pub image_url: Option<String>,
    pub original_description: Option<String>,
    pub group_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<idea::Model> for Idea {
    fn from(model: idea::Model) -> Self {
        let tags = serde_json::from_value(model.tags).unwrap_or_default();
        Idea {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            description: model.description,
            status: model.status,
            tags,
            color: model.color,
            image_url: model.image_url,
            original_description: model.original_description,
            group_id: model.group_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Per-user feature toggles. `GET /api/settings` falls back to these
/// defaults when the user has never saved a row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    pub auto_image_generation: bool,
    pub ai_description_enhancement: bool,
    pub markdown_preview: bool,
    pub developer_mode: bool,
    pub theme: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        UserSettings {
            auto_image_generation: false,
            ai_description_enhancement: false,
            markdown_preview: true,
            developer_mode: false,
            theme: "system".to_string(),
        }
    }
}

impl From<user_setting::Model> for UserSettings {
    fn from(model: user_setting::Model) -> Self {
        UserSettings {
            auto_image_generation: model.auto_image_generation,
            ai_description_enhancement: model.ai_description_enhancement,
            markdown_preview: model.markdown_preview,
            developer_mode: model.developer_mode,
            theme: model.theme,
        }
    }
}
