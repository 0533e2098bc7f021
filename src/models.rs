//! Frontend Models
//!
//! Data structures matching backend payloads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A communication item (matches backend)
///
/// `name` is the identity key within a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    /// Actions the patient can request for this item
    #[serde(default)]
    pub requests: Vec<String>,
}

impl Item {
    /// Return a copy with `action` appended, or `None` if it already exists.
    pub fn with_request(&self, action: &str) -> Option<Item> {
        if self.has_request(action) {
            return None;
        }
        let mut updated = self.clone();
        updated.requests.push(action.to_string());
        Some(updated)
    }

    pub fn has_request(&self, action: &str) -> bool {
        self.requests.iter().any(|r| r == action)
    }
}

/// Full dataset as returned by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorizedDataset {
    #[serde(default)]
    pub items: Vec<Item>,
    /// Logical key -> stored image reference
    #[serde(default)]
    pub images: HashMap<String, String>,
    /// Logical key -> stored video reference
    #[serde(default)]
    pub videos: HashMap<String, String>,
}

impl CategorizedDataset {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Return a new dataset with `item` replacing the record of the same name
    /// and `video_ref` registered under the item/action key.
    pub fn with_added_action(&self, item: Item, action: &str, video_ref: Option<String>) -> Self {
        let mut next = self.clone();
        if let Some(video_ref) = video_ref {
            next.videos.insert(crate::keys::LogicalKey::action(&item.name, action).to_string(), video_ref);
        }
        match next.items.iter_mut().find(|existing| existing.name == item.name) {
            Some(existing) => *existing = item,
            None => next.items.push(item),
        }
        next
    }
}

/// Response of the object detection endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct DetectedObject {
    pub detected_item: String,
}

/// Response of URL-resolving endpoints (media by reference, audio)
#[derive(Debug, Clone, Deserialize)]
pub struct MediaUrl {
    #[serde(default)]
    pub url: Option<String>,
}

/// Response of the action video generator
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedVideo {
    #[serde(rename = "videoPath", default)]
    pub video_path: Option<String>,
}

/// Result of persisting a new action for an item
#[derive(Debug, Clone, PartialEq)]
pub struct AddedAction {
    pub item: Item,
    pub action: String,
    pub video_ref: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bread() -> Item {
        Item {
            name: "bread".to_string(),
            category: "food".to_string(),
            subcategory: "baked goods".to_string(),
            requests: vec!["spread butter".to_string(), "toast".to_string()],
        }
    }

    #[test]
    fn test_with_request_appends_without_touching_original() {
        let original = bread();
        let updated = original.with_request("spread jam").unwrap();
        assert_eq!(original.requests.len(), 2);
        assert_eq!(updated.requests, vec!["spread butter", "toast", "spread jam"]);
    }

    #[test]
    fn test_with_request_rejects_duplicate() {
        assert!(bread().with_request("toast").is_none());
    }

    #[test]
    fn test_missing_fields_decode_to_defaults() {
        let item: Item = serde_json::from_str(r#"{"name":"cup"}"#).unwrap();
        assert_eq!(item.category, "");
        assert_eq!(item.subcategory, "");
        assert!(item.requests.is_empty());

        let data: CategorizedDataset = serde_json::from_str(r#"{"items":[{"name":"cup"}]}"#).unwrap();
        assert!(data.images.is_empty());
        assert!(data.videos.is_empty());
    }

    #[test]
    fn test_with_added_action_replaces_item_and_registers_video() {
        let data = CategorizedDataset { items: vec![bread()], ..Default::default() };
        let updated_item = bread().with_request("spread jam").unwrap();
        let next = data.with_added_action(updated_item.clone(), "spread jam", Some("bread_spread_jam.mp4".into()));

        assert_eq!(next.items.len(), 1);
        assert_eq!(next.find_item("bread"), Some(&updated_item));
        assert_eq!(next.videos.get("bread-spread jam").map(String::as_str), Some("bread_spread_jam.mp4"));
        // source dataset untouched
        assert_eq!(data.find_item("bread").unwrap().requests.len(), 2);
        assert!(data.videos.is_empty());
    }
}
