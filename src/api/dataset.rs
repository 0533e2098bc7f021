//! Dataset Endpoints
//!
//! Stored dataset retrieval and text categorization.

use gloo_net::http::Request;
use serde::Serialize;

use super::{build_error, network_error, read_json, Api};
use crate::error::ApiError;
use crate::models::CategorizedDataset;
use crate::text::normalize_item_list;

#[derive(Serialize)]
struct CategorizeArgs<'a> {
    items: &'a str,
}

impl Api {
    /// Everything the backend has stored so far
    pub async fn stored_data(&self) -> Result<CategorizedDataset, ApiError> {
        let response = Request::get(&self.url("/api/stored-data"))
            .send()
            .await
            .map_err(network_error)?;
        let data: CategorizedDataset = read_json(response).await?;
        log::info!("[API] Loaded {} stored items", data.items.len());
        Ok(data)
    }

    /// Categorize comma-separated free text (or a single detected label).
    /// The backend merges new items into its store and returns the result.
    pub async fn categorize(&self, items: &str) -> Result<CategorizedDataset, ApiError> {
        let items = normalize_item_list(items).ok_or_else(|| ApiError::Rejected("No items provided".to_string()))?;
        log::info!("[API] Categorizing: {}", items);

        let response = Request::post(&self.url("/categorize-items"))
            .json(&CategorizeArgs { items: &items })
            .map_err(build_error)?
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }
}
