use axum::{
    Json, Router,
    extract::{Extension, Path, State},
    http::StatusCode,
    routing::{get, put},
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::entities::idea_group;
use crate::db::services;
use crate::db::services::GroupChanges;
use crate::web::models::AuthenticatedUser;
use crate::web::{AppError, AppState};

// --- Request/Response Structs ---

#[derive(Deserialize)]
pub struct CreateGroupRequest {
    name: String,
    description: Option<String>,
    color: String,
    icon: Option<String>,
}

// --- Route Handlers ---

async fn list_groups_handler(
    Extension(authenticated_user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<idea_group::Model>>, AppError> {
    let groups = services::list_groups_by_user_id(&app_state.db_pool, authenticated_user.id)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    Ok(Json(groups))
}

async fn create_group_handler(
    Extension(authenticated_user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<idea_group::Model>), AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Group name must not be empty.".to_string(),
        ));
    }

    let group = services::create_group(
        &app_state.db_pool,
        authenticated_user.id,
        payload.name,
        payload.description,
        payload.color,
        payload.icon,
    )
    .await
    .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    Ok((StatusCode::CREATED, Json(group)))
}

async fn update_group_handler(
    Extension(authenticated_user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
    Path(group_id): Path<Uuid>,
    Json(payload): Json<GroupChanges>,
) -> Result<Json<idea_group::Model>, AppError> {
    if let Some(name) = &payload.name {
        if name.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Group name must not be empty.".to_string(),
            ));
        }
    }

    let updated = services::update_group(&app_state.db_pool, group_id, authenticated_user.id, payload)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    match updated {
        Some(group) => Ok(Json(group)),
        None => Err(AppError::NotFound(
            "Group not found or permission denied".to_string(),
        )),
    }
}

/// Deletes a group. Member ideas stay behind and show up as ungrouped; the
/// database nulls their `group_id`.
async fn delete_group_handler(
    Extension(authenticated_user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
    Path(group_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let rows_affected = services::delete_group(&app_state.db_pool, group_id, authenticated_user.id)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    if rows_affected > 0 {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(
            "Group not found or permission denied".to_string(),
        ))
    }
}

// --- Router ---

pub fn create_groups_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_groups_handler).post(create_group_handler))
        .route(
            "/{group_id}",
            put(update_group_handler).delete(delete_group_handler),
        )
}
