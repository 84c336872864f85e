use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};

use crate::db::entities::{prelude::UserSetting, user_setting};
use crate::db::models::UserSettings;

// --- Settings Service Functions ---

/// Retrieves the settings row for a user, if one has been saved.
pub async fn get_settings(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Option<user_setting::Model>, DbErr> {
    UserSetting::find()
        .filter(user_setting::Column::UserId.eq(user_id))
        .one(db)
        .await
}

/// Creates or updates the per-user settings singleton. A single
/// INSERT .. ON CONFLICT statement, so two concurrent first-time saves
/// cannot race each other into a unique violation.
pub async fn upsert_settings(
    db: &DatabaseConnection,
    user_id: i32,
    settings: UserSettings,
) -> Result<user_setting::Model, DbErr> {
    let active = user_setting::ActiveModel {
        user_id: Set(user_id),
        auto_image_generation: Set(settings.auto_image_generation),
        ai_description_enhancement: Set(settings.ai_description_enhancement),
        markdown_preview: Set(settings.markdown_preview),
        developer_mode: Set(settings.developer_mode),
        theme: Set(settings.theme),
        updated_at: Set(Utc::now()),
    };

    UserSetting::insert(active)
        .on_conflict(
            OnConflict::column(user_setting::Column::UserId)
                .update_columns([
                    user_setting::Column::AutoImageGeneration,
                    user_setting::Column::AiDescriptionEnhancement,
                    user_setting::Column::MarkdownPreview,
                    user_setting::Column::DeveloperMode,
                    user_setting::Column::Theme,
                    user_setting::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(db)
        .await
}
