//! Object Detection Endpoint

use gloo_net::http::Request;
use wasm_bindgen::JsValue;

use super::{network_error, read_json, Api};
use crate::error::ApiError;
use crate::models::DetectedObject;

fn js_error(e: JsValue) -> ApiError {
    ApiError::Build(format!("{:?}", e))
}

impl Api {
    /// Upload an image and get back the label of the object it shows
    pub async fn detect_object(&self, image: &web_sys::File) -> Result<String, ApiError> {
        let form = web_sys::FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename("image", image, &image.name()).map_err(js_error)?;

        let response = Request::post(&self.url("/api/detect-object"))
            .body(form)
            .map_err(|e| ApiError::Build(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        let detected: DetectedObject = read_json(response).await?;

        let label = detected.detected_item.trim().to_string();
        if label.is_empty() {
            return Err(ApiError::Decode("empty detection label".to_string()));
        }
        log::info!("[API] Detected '{}'", label);
        Ok(label)
    }
}
