//! Stateless pass-through endpoints to the third-party services. Responses
//! use the normalized `{success, payload|error}` envelope regardless of
//! which side failed.

use axum::{Json, Router, extract::State, http::StatusCode, response::Response, routing::post};
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use crate::ai::AiError;
use crate::web::AppState;

// --- Request Structs ---

#[derive(Deserialize)]
pub struct EnhanceDescriptionRequest {
    title: Option<String>,
    description: Option<String>,
    #[serde(alias = "apiKey")]
    api_key: Option<String>,
}

#[derive(Deserialize)]
pub struct GenerateImageRequest {
    prompt: Option<String>,
    #[serde(alias = "apiKey")]
    api_key: Option<String>,
}

#[derive(Deserialize)]
pub struct CaptureScreenshotRequest {
    url: Option<String>,
}

// --- Envelope Helpers ---

fn success(payload: serde_json::Value) -> Response {
    let mut body = payload;
    body["success"] = json!(true);
    (StatusCode::OK, Json(body)).into_response()
}

fn missing_input(field: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "success": false, "error": format!("{field} is required") })),
    )
        .into_response()
}

fn upstream_failure(err: AiError) -> Response {
    error!(error = %err, "AI proxy call failed");
    let status = match err {
        AiError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::BAD_GATEWAY,
    };
    (
        status,
        Json(json!({ "success": false, "error": err.to_string() })),
    )
        .into_response()
}

// --- Route Handlers ---

async fn enhance_description_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<EnhanceDescriptionRequest>,
) -> Response {
    let Some(title) = payload.title.filter(|t| !t.is_empty()) else {
        return missing_input("title");
    };
    let Some(description) = payload.description.filter(|d| !d.is_empty()) else {
        return missing_input("description");
    };

    match app_state
        .ai_client
        .enhance_description(&title, &description, payload.api_key.as_deref())
        .await
    {
        Ok(enhanced) => success(json!({ "enhancedDescription": enhanced })),
        Err(err) => upstream_failure(err),
    }
}

async fn generate_image_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<GenerateImageRequest>,
) -> Response {
    let Some(prompt) = payload.prompt.filter(|p| !p.is_empty()) else {
        return missing_input("prompt");
    };

    match app_state
        .ai_client
        .generate_image(&prompt, payload.api_key.as_deref())
        .await
    {
        Ok(image_url) => success(json!({ "imageUrl": image_url })),
        Err(err) => upstream_failure(err),
    }
}

async fn capture_screenshot_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<CaptureScreenshotRequest>,
) -> Response {
    let Some(url) = payload.url.filter(|u| !u.is_empty()) else {
        return missing_input("url");
    };

    match app_state.ai_client.capture_screenshot(&url).await {
        Ok(image_url) => success(json!({ "imageUrl": image_url })),
        Err(err) => upstream_failure(err),
    }
}

// --- Router ---

pub fn create_ai_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/enhance-description", post(enhance_description_handler))
        .route("/generate-image", post(generate_image_handler))
        .route("/capture-screenshot", post(capture_screenshot_handler))
}
