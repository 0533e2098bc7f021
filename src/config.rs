//! Application Configuration
//!
//! Read once at startup from `window.__APHASIA_CONFIG__`, a plain object the
//! host page may define before loading the WASM bundle. Missing fields take
//! their defaults.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Global the host page sets
pub const CONFIG_GLOBAL: &str = "__APHASIA_CONFIG__";

pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 4000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Placeholder images shown when a card has no media
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    pub category: String,
    pub subcategory: String,
    pub item: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            category: "/placeholders/category_placeholder.png".to_string(),
            subcategory: "/placeholders/subcategory_placeholder.png".to_string(),
            item: "/placeholders/item_placeholder.png".to_string(),
        }
    }
}

/// Bundled media for the patient preview, keyed by logical key
/// (`category-…`, `subcategory-…-…`, `item-…`, `<item>-<action>`).
/// Audio is keyed by display name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StaticMediaTable {
    pub images: HashMap<String, String>,
    pub videos: HashMap<String, String>,
    pub audio: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend origin, empty for same-origin requests
    pub api_base: String,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
    pub toast_timeout_ms: u32,
    pub placeholders: Placeholders,
    pub static_media: StaticMediaTable,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: "info".to_string(),
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
            placeholders: Placeholders::default(),
            static_media: StaticMediaTable::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<AppConfig>(json)
            .map(AppConfig::normalized)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        serde_wasm_bindgen::from_value::<AppConfig>(value)
            .map(AppConfig::normalized)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Load from the page global, falling back to defaults.
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let value = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value,
            _ => return Self::default(),
        };
        // the host may also hand over the config as a JSON string
        let parsed = match value.as_string() {
            Some(json) => Self::from_json(&json),
            None => Self::from_js(value),
        };
        match parsed {
            Ok(config) => config,
            Err(e) => {
                // logger is not up yet
                web_sys::console::warn_1(&format!("[CONFIG] {}, using defaults", e).into());
                Self::default()
            }
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    fn normalized(mut self) -> Self {
        while self.api_base.ends_with('/') {
            self.api_base.pop();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_level(), log::Level::Info);
        assert_eq!(config.toast_timeout_ms, DEFAULT_TOAST_TIMEOUT_MS);
    }

    #[test]
    fn test_partial_config() {
        let config = AppConfig::from_json(
            r#"{
                "api_base": "http://127.0.0.1:5000/",
                "log_level": "debug",
                "static_media": { "images": { "item-bread": "/assets/bread.png" } }
            }"#,
        )
        .unwrap();

        assert_eq!(config.api_base, "http://127.0.0.1:5000");
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.static_media.images["item-bread"], "/assets/bread.png");
        assert!(config.static_media.audio.is_empty());
        assert_eq!(config.placeholders, Placeholders::default());
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = AppConfig::from_json(r#"{"log_level":"loud"}"#).unwrap();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        assert!(AppConfig::from_json(r#"{"toast_timeout_ms":"soon"}"#).is_err());
    }
}
