//! Thin clients for the third-party services the app can call on demand:
//! description enhancement (DeepSeek), image generation (Google Imagen) and
//! website screenshots (hcti.io). Single-shot request/response forwarding,
//! no retries and no caching.

use thiserror::Error;

pub mod client;
pub mod prompt;

pub use client::AiClient;

#[derive(Error, Debug)]
pub enum AiError {
    /// The server has no default API key for this service and the request
    /// did not supply one.
    #[error("{0} API key not configured")]
    NotConfigured(&'static str),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{service} API error: {status}")]
    UpstreamStatus {
        service: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("Unexpected {0} API response shape")]
    MalformedResponse(&'static str),
}
