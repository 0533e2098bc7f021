//! Media Endpoints
//!
//! Exchange stored references for playable URLs.

use gloo_net::http::Request;

use super::{network_error, path_segment, read_json, Api};
use crate::error::ApiError;
use crate::models::MediaUrl;
use crate::text::{audio_slug, basename};

impl Api {
    /// Images are served directly by file name
    pub fn image_url(&self, reference: &str) -> String {
        self.url(&format!("/api/images/{}", path_segment(basename(reference))))
    }

    /// Resolve a stored reference into a time-limited playable URL
    pub async fn media_url(&self, reference: &str) -> Result<String, ApiError> {
        let response = Request::get(&self.url(&format!("/api/media-url/{}", path_segment(reference))))
            .send()
            .await
            .map_err(network_error)?;
        let resolved: MediaUrl = read_json(response).await?;
        resolved
            .url
            .ok_or_else(|| ApiError::Decode(format!("no url for '{}'", reference)))
    }

    /// Spoken audio for a category, subcategory or item name.
    /// `Ok(None)` when the backend has no recording.
    pub async fn audio_url(&self, name: &str) -> Result<Option<String>, ApiError> {
        let response = Request::get(&self.url(&format!("/api/audio/{}", path_segment(&audio_slug(name)))))
            .send()
            .await
            .map_err(network_error)?;
        let resolved: MediaUrl = read_json(response).await?;
        Ok(resolved.url.filter(|url| !url.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_image_url_uses_basename() {
        let api = Api::new(&AppConfig::from_json(r#"{"api_base":"http://localhost:5000"}"#).unwrap());
        assert_eq!(
            api.image_url("oss/images/category_food and drinks.png"),
            "http://localhost:5000/api/images/category_food%20and%20drinks.png"
        );
    }
}
