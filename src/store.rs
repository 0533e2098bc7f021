//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::error::ApiError;
use crate::models::{AddedAction, CategorizedDataset};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// Transient notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cached copy of the backend dataset (possibly stale)
    pub dataset: CategorizedDataset,
    /// Stored data request in flight
    pub loading: bool,
    /// Last stored data failure; transient ones offer a retry
    pub load_error: Option<ApiError>,
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self { loading: true, ..Default::default() }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the cached dataset
pub fn store_set_dataset(store: &AppStore, dataset: CategorizedDataset) {
    store.dataset().set(dataset);
}

/// Fold a persisted action into the cached dataset
pub fn store_apply_added_action(store: &AppStore, added: AddedAction) {
    let next = store
        .dataset()
        .with_untracked(|data| data.with_added_action(added.item, &added.action, added.video_ref));
    store.dataset().set(next);
}

/// Show a toast and schedule its dismissal
pub fn store_push_toast(store: &AppStore, title: &str, description: &str, variant: ToastVariant, timeout_ms: u32) {
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().set(id.wrapping_add(1));
    store.toasts().write().push(Toast {
        id,
        title: title.to_string(),
        description: description.to_string(),
        variant,
    });

    let store = *store;
    spawn_local(async move {
        sleep(Duration::from_millis(timeout_ms as u64)).await;
        store_dismiss_toast(&store, id);
    });
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &AppStore, id: u32) {
    store.toasts().write().retain(|toast| toast.id != id);
}
