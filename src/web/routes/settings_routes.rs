use axum::{
    Json, Router,
    extract::{Extension, State},
    routing::get,
};
use std::sync::Arc;

use crate::db::models::UserSettings;
use crate::db::services;
use crate::web::models::AuthenticatedUser;
use crate::web::{AppError, AppState};

// --- Route Handlers ---

/// Returns the user's saved settings, or the defaults when none exist yet.
async fn get_settings_handler(
    Extension(authenticated_user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<UserSettings>, AppError> {
    let settings = services::get_settings(&app_state.db_pool, authenticated_user.id)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .map(UserSettings::from)
        .unwrap_or_default();
    Ok(Json(settings))
}

async fn update_settings_handler(
    Extension(authenticated_user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<UserSettings>,
) -> Result<Json<UserSettings>, AppError> {
    let saved = services::upsert_settings(&app_state.db_pool, authenticated_user.id, payload)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    Ok(Json(UserSettings::from(saved)))
}

// --- Router ---

pub fn create_settings_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(get_settings_handler).put(update_settings_handler))
}
