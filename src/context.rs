//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::Api;
use crate::audio::AudioPlayer;
use crate::config::AppConfig;
use crate::store::{store_push_toast, AppStore, ToastVariant};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Single shared audio slot
    pub audio: AudioPlayer,
    /// Trigger to reload stored data from backend
    set_reload_trigger: WriteSignal<u32>,
    store: AppStore,
}

impl AppContext {
    pub fn new(config: AppConfig, set_reload_trigger: WriteSignal<u32>, store: AppStore) -> Self {
        Self {
            config: StoredValue::new(config),
            audio: AudioPlayer::new(),
            set_reload_trigger,
            store,
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> Api {
        self.config.with_value(Api::new)
    }

    /// Trigger a reload of stored data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn toast(&self, title: &str, description: &str) {
        let timeout = self.config.with_value(|c| c.toast_timeout_ms);
        store_push_toast(&self.store, title, description, ToastVariant::Default, timeout);
    }

    pub fn toast_error(&self, title: &str, description: &str) {
        let timeout = self.config.with_value(|c| c.toast_timeout_ms);
        store_push_toast(&self.store, title, description, ToastVariant::Destructive, timeout);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
