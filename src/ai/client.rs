use reqwest::Client;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{info, warn};

use super::AiError;
use super::prompt::{ENHANCEMENT_SYSTEM_PROMPT, enhancement_prompt};
use crate::server::config::ServerConfig;

const DEEPSEEK_URL: &str = "https://api.deepseek.com/chat/completions";
const IMAGEN_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/imagen-3.0-generate-001:generateImage";
const SCREENSHOT_URL: &str = "https://hcti.io/v1/image";

/// Client for the outbound AI/screenshot calls. One request per user action;
/// failures surface to the caller untouched.
pub struct AiClient {
    http: Client,
    config: Arc<ServerConfig>,
}

impl AiClient {
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Rewrites an idea description via the DeepSeek chat API. A
    /// caller-supplied key (developer mode) takes precedence over the
    /// server-configured default.
    pub async fn enhance_description(
        &self,
        title: &str,
        description: &str,
        api_key_override: Option<&str>,
    ) -> Result<String, AiError> {
        let api_key = api_key_override
            .or(self.config.deepseek_api_key.as_deref())
            .ok_or(AiError::NotConfigured("DeepSeek"))?;

        info!(title, "Enhancing idea description");

        let body = json!({
            "model": "deepseek-chat",
            "messages": [
                { "role": "system", "content": ENHANCEMENT_SYSTEM_PROMPT },
                { "role": "user", "content": enhancement_prompt(title, description) }
            ],
            "temperature": 0.7,
            "max_tokens": 2000,
        });

        let response = self
            .http
            .post(DEEPSEEK_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(%status, body = %error_body, "DeepSeek API returned an error");
            return Err(AiError::UpstreamStatus {
                service: "DeepSeek",
                status,
            });
        }

        let data: Value = response.json().await?;
        extract_chat_content(&data).ok_or(AiError::MalformedResponse("DeepSeek"))
    }

    /// Generates an illustration via Google Imagen and returns it as a
    /// base64 jpeg data URL.
    pub async fn generate_image(
        &self,
        prompt: &str,
        api_key_override: Option<&str>,
    ) -> Result<String, AiError> {
        let api_key = api_key_override
            .or(self.config.google_ai_api_key.as_deref())
            .ok_or(AiError::NotConfigured("Google AI"))?;

        info!(prompt, "Generating idea illustration");

        let body = json!({
            "prompt": prompt,
            "safetySettings": [
                { "category": "HARM_CATEGORY_HATE_SPEECH", "threshold": "BLOCK_MEDIUM_AND_ABOVE" },
                { "category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": "BLOCK_MEDIUM_AND_ABOVE" }
            ],
            "generationConfig": { "responseMimeType": "image/jpeg" },
        });

        let response = self
            .http
            .post(IMAGEN_URL)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(%status, body = %error_body, "Google AI API returned an error");
            return Err(AiError::UpstreamStatus {
                service: "Google AI",
                status,
            });
        }

        let data: Value = response.json().await?;
        extract_image_data(&data)
            .map(|b64| format!("data:image/jpeg;base64,{b64}"))
            .ok_or(AiError::MalformedResponse("Google AI"))
    }

    /// Captures a screenshot of a public URL via hcti.io and returns the
    /// hosted image URL.
    pub async fn capture_screenshot(&self, url: &str) -> Result<String, AiError> {
        let (user_id, api_key) = self
            .config
            .screenshot_user_id
            .as_deref()
            .zip(self.config.screenshot_api_key.as_deref())
            .ok_or(AiError::NotConfigured("Screenshot"))?;

        info!(url, "Capturing screenshot");

        let body = json!({
            "url": url,
            "viewport_width": 1280,
            "viewport_height": 720,
            "device_scale": 1,
        });

        let response = self
            .http
            .post(SCREENSHOT_URL)
            .basic_auth(user_id, Some(api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(%status, body = %error_body, "Screenshot API returned an error");
            return Err(AiError::UpstreamStatus {
                service: "Screenshot",
                status,
            });
        }

        let data: Value = response.json().await?;
        extract_screenshot_url(&data).ok_or(AiError::MalformedResponse("Screenshot"))
    }
}

/// Pulls `choices[0].message.content` out of a chat-completions response.
fn extract_chat_content(data: &Value) -> Option<String> {
    data.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(|s| s.to_string())
}

/// Pulls `candidates[0].image.data` out of an Imagen response.
fn extract_image_data(data: &Value) -> Option<String> {
    data.get("candidates")?
        .get(0)?
        .get("image")?
        .get("data")?
        .as_str()
        .map(|s| s.to_string())
}

fn extract_screenshot_url(data: &Value) -> Option<String> {
    data.get("url")?.as_str().map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_chat_content() {
        let data = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "enhanced text" } }
            ]
        });
        assert_eq!(extract_chat_content(&data).as_deref(), Some("enhanced text"));
    }

    #[test]
    fn test_extract_chat_content_missing_choices() {
        assert!(extract_chat_content(&json!({})).is_none());
        assert!(extract_chat_content(&json!({ "choices": [] })).is_none());
        assert!(extract_chat_content(&json!({ "choices": [{ "message": {} }] })).is_none());
    }

    #[test]
    fn test_extract_image_data() {
        let data = json!({
            "candidates": [ { "image": { "data": "aGVsbG8=" } } ]
        });
        assert_eq!(extract_image_data(&data).as_deref(), Some("aGVsbG8="));
    }

    #[test]
    fn test_extract_image_data_missing_candidates() {
        assert!(extract_image_data(&json!({ "candidates": [] })).is_none());
        assert!(extract_image_data(&json!({ "candidates": [{}] })).is_none());
    }

    #[test]
    fn test_extract_screenshot_url() {
        let data = json!({ "url": "https://hcti.io/v1/image/abc" });
        assert_eq!(
            extract_screenshot_url(&data).as_deref(),
            Some("https://hcti.io/v1/image/abc")
        );
        assert!(extract_screenshot_url(&json!({ "ok": true })).is_none());
    }
}
