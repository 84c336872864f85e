use axum::{
    Json, Router,
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
};
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::ai::prompt;
use crate::db::models::Idea;
use crate::db::services;
use crate::db::services::{IdeaChanges, NewIdea};
use crate::filter::{StatusFilter, filter_ideas};
use crate::web::models::AuthenticatedUser;
use crate::web::{AppError, AppState};

// --- Request/Response Structs ---

#[derive(Deserialize)]
pub struct ListIdeasQuery {
    /// Case-insensitive substring matched against title or description.
    #[serde(default)]
    q: String,
    /// "all" (default) or one status value.
    status: Option<String>,
    /// Comma-separated tag selection; an idea matches if it carries any.
    tags: Option<String>,
}

#[derive(Default, Deserialize)]
pub struct EnhanceIdeaRequest {
    /// Developer-mode override for the server-configured DeepSeek key.
    #[serde(alias = "apiKey")]
    api_key: Option<String>,
}

#[derive(Default, Deserialize)]
pub struct GenerateIdeaImageRequest {
    /// Developer-mode override for the server-configured Google AI key.
    #[serde(alias = "apiKey")]
    api_key: Option<String>,
}

// --- Route Handlers ---

async fn list_ideas_handler(
    Extension(authenticated_user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<ListIdeasQuery>,
) -> Result<Json<Vec<Idea>>, AppError> {
    let status = match params.status.as_deref() {
        None => StatusFilter::All,
        Some(raw) => StatusFilter::from_str(raw).map_err(AppError::InvalidInput)?,
    };
    let selected_tags: Vec<String> = params
        .tags
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    let ideas: Vec<Idea> = services::list_ideas_by_user_id(&app_state.db_pool, authenticated_user.id)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .into_iter()
        .map(Idea::from)
        .collect();

    let filtered = filter_ideas(&ideas, &params.q, status, &selected_tags)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(filtered))
}

async fn create_idea_handler(
    Extension(authenticated_user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<NewIdea>,
) -> Result<(StatusCode, Json<Idea>), AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::InvalidInput("Title must not be empty.".to_string()));
    }

    let model = services::create_idea(&app_state.db_pool, authenticated_user.id, payload)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    Ok((StatusCode::CREATED, Json(Idea::from(model))))
}

async fn update_idea_handler(
    Extension(authenticated_user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
    Path(idea_id): Path<Uuid>,
    Json(payload): Json<IdeaChanges>,
) -> Result<Json<Idea>, AppError> {
    if let Some(title) = &payload.title {
        if title.trim().is_empty() {
            return Err(AppError::InvalidInput("Title must not be empty.".to_string()));
        }
    }

    let updated = services::update_idea(&app_state.db_pool, idea_id, authenticated_user.id, payload)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    match updated {
        Some(model) => Ok(Json(Idea::from(model))),
        None => Err(AppError::NotFound(
            "Idea not found or permission denied".to_string(),
        )),
    }
}

async fn delete_idea_handler(
    Extension(authenticated_user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
    Path(idea_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let rows_affected = services::delete_idea(&app_state.db_pool, idea_id, authenticated_user.id)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    if rows_affected > 0 {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(
            "Idea not found or permission denied".to_string(),
        ))
    }
}

/// Rewrites the idea description through the enhancement proxy, keeping the
/// pre-enhancement text for one-level undo. Requires the
/// `ai_description_enhancement` setting.
async fn enhance_idea_handler(
    Extension(authenticated_user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
    Path(idea_id): Path<Uuid>,
    Json(payload): Json<EnhanceIdeaRequest>,
) -> Result<Json<Idea>, AppError> {
    let settings = current_settings(&app_state, authenticated_user.id).await?;
    if !settings.ai_description_enhancement {
        return Err(AppError::InvalidInput(
            "AI description enhancement is not enabled in your settings.".to_string(),
        ));
    }

    let idea = services::get_idea_by_id(&app_state.db_pool, idea_id, authenticated_user.id)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Idea not found or permission denied".to_string()))?;

    let enhanced = app_state
        .ai_client
        .enhance_description(&idea.title, &idea.description, payload.api_key.as_deref())
        .await?;

    let (description, original) = services::enhancement_fields(&idea, enhanced);
    let model = services::set_description_fields(&app_state.db_pool, idea, description, original)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    Ok(Json(Idea::from(model)))
}

/// Restores the stored original description, clearing it afterwards.
async fn undo_enhancement_handler(
    Extension(authenticated_user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
    Path(idea_id): Path<Uuid>,
) -> Result<Json<Idea>, AppError> {
    let idea = services::get_idea_by_id(&app_state.db_pool, idea_id, authenticated_user.id)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Idea not found or permission denied".to_string()))?;

    let Some((description, original)) = services::undo_fields(&idea) else {
        return Err(AppError::InvalidInput(
            "No original description is stored for this idea.".to_string(),
        ));
    };

    let model = services::set_description_fields(&app_state.db_pool, idea, description, original)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    Ok(Json(Idea::from(model)))
}

/// Generates an illustration from the idea title and a bounded description
/// prefix, storing the resulting data URL. Requires the
/// `auto_image_generation` setting.
async fn generate_idea_image_handler(
    Extension(authenticated_user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
    Path(idea_id): Path<Uuid>,
    Json(payload): Json<GenerateIdeaImageRequest>,
) -> Result<Json<Idea>, AppError> {
    let settings = current_settings(&app_state, authenticated_user.id).await?;
    if !settings.auto_image_generation {
        return Err(AppError::InvalidInput(
            "Image generation is not enabled in your settings.".to_string(),
        ));
    }

    let idea = services::get_idea_by_id(&app_state.db_pool, idea_id, authenticated_user.id)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Idea not found or permission denied".to_string()))?;

    let image_prompt = prompt::image_prompt(&idea.title, &idea.description);
    let image_url = app_state
        .ai_client
        .generate_image(&image_prompt, payload.api_key.as_deref())
        .await?;

    let model = services::set_image_url(&app_state.db_pool, idea, image_url)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    Ok(Json(Idea::from(model)))
}

async fn current_settings(
    app_state: &AppState,
    user_id: i32,
) -> Result<crate::db::models::UserSettings, AppError> {
    let settings = services::get_settings(&app_state.db_pool, user_id)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .map(crate::db::models::UserSettings::from)
        .unwrap_or_default();
    Ok(settings)
}

// --- Router ---

pub fn create_ideas_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_ideas_handler).post(create_idea_handler))
        .route(
            "/{idea_id}",
            put(update_idea_handler).delete(delete_idea_handler),
        )
        .route("/{idea_id}/enhance", post(enhance_idea_handler))
        .route("/{idea_id}/undo-enhancement", post(undo_enhancement_handler))
        .route("/{idea_id}/generate-image", post(generate_idea_image_handler))
}
