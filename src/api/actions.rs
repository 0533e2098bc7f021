//! Action Endpoints
//!
//! Adding a new action to an item is persisted remotely in two steps: the
//! backend first generates the action video, then stores the new request
//! list together with the video reference. Local state is only updated from
//! the returned `AddedAction`.

use gloo_net::http::Request;
use serde::Serialize;

use super::{build_error, checked_body, network_error, read_json, Api};
use crate::error::ApiError;
use crate::models::{AddedAction, GeneratedVideo, Item};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateVideoArgs<'a> {
    item_name: &'a str,
    action: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateRequestsArgs<'a> {
    item_name: &'a str,
    requests: &'a [String],
    video_path: Option<&'a str>,
}

/// Validate a proposed action name against the item.
pub fn validate_new_action(item: &Item, action: &str) -> Result<Item, ApiError> {
    let action = action.trim();
    if action.is_empty() {
        return Err(ApiError::Rejected("Action name is empty".to_string()));
    }
    item.with_request(action)
        .ok_or_else(|| ApiError::Rejected(format!("\"{}\" already exists for this item", action)))
}

impl Api {
    pub async fn add_action(&self, item: &Item, action: &str) -> Result<AddedAction, ApiError> {
        let updated = validate_new_action(item, action)?;
        let action = action.trim();
        log::info!("[API] Generating video for {} - {}", item.name, action);

        let response = Request::post(&self.url("/api/generate-action-video"))
            .json(&GenerateVideoArgs { item_name: &item.name, action })
            .map_err(build_error)?
            .send()
            .await
            .map_err(network_error)?;
        let generated: GeneratedVideo = read_json(response).await?;

        let response = Request::post(&self.url("/api/update-item-requests"))
            .json(&UpdateRequestsArgs {
                item_name: &updated.name,
                requests: &updated.requests,
                video_path: generated.video_path.as_deref(),
            })
            .map_err(build_error)?
            .send()
            .await
            .map_err(network_error)?;
        checked_body(response).await?;

        Ok(AddedAction { item: updated, action: action.to_string(), video_ref: generated.video_path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bread() -> Item {
        Item {
            name: "bread".to_string(),
            category: "food".to_string(),
            subcategory: "baked goods".to_string(),
            requests: vec!["toast".to_string()],
        }
    }

    #[test]
    fn test_validate_trims_and_appends() {
        let updated = validate_new_action(&bread(), "  cut half ").unwrap();
        assert_eq!(updated.requests, vec!["toast", "cut half"]);
    }

    #[test]
    fn test_validate_rejects_empty_and_duplicate() {
        assert!(matches!(validate_new_action(&bread(), "   "), Err(ApiError::Rejected(_))));
        assert!(matches!(validate_new_action(&bread(), "toast"), Err(ApiError::Rejected(_))));
    }

    #[test]
    fn test_update_payload_shape() {
        let item = bread();
        let args = UpdateRequestsArgs { item_name: &item.name, requests: &item.requests, video_path: Some("bread_toast.mp4") };
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json, serde_json::json!({"itemName": "bread", "requests": ["toast"], "videoPath": "bread_toast.mp4"}));
    }
}
