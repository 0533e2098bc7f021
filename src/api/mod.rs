//! Backend API Bindings
//!
//! Frontend bindings to the HTTP backend, organized by domain.

mod actions;
mod dataset;
mod detect;
mod media;

use gloo_net::http::Response;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::ApiError;

// dataset, detect and media only add methods to `Api`
pub use actions::*;

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Handle to the backend service
#[derive(Debug, Clone, PartialEq)]
pub struct Api {
    base: String,
}

impl Api {
    pub fn new(config: &AppConfig) -> Self {
        Self { base: config.api_base.clone() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

// ========================
// Shared helpers
// ========================

pub(crate) fn path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn build_error(e: gloo_net::Error) -> ApiError {
    ApiError::Build(e.to_string())
}

/// Pull a human message out of an error body (`{"error": "..."}` or text)
fn error_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.trim().is_empty() => "no details".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

async fn checked_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = response.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    if !ok {
        log::warn!("[API] {} {} -> {}", status, response.url(), body);
        return Err(ApiError::Status { status, message: error_message(&body) });
    }
    Ok(body)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = checked_body(response).await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}
