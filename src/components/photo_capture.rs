//! Photo Capture Component
//!
//! Take or pick a photo, detect the object in it, and categorize the result.

use std::fmt;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use crate::context::use_app_context;
use crate::store::{store_set_dataset, use_app_store};
use crate::text::title_case;

/// Where the photo flow currently is
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CaptureStage {
    #[default]
    Idle,
    Detecting,
    Categorizing { detected: String },
    Done { detected: String },
    Failed(String),
}

impl CaptureStage {
    pub fn is_busy(&self) -> bool {
        matches!(self, CaptureStage::Detecting | CaptureStage::Categorizing { .. })
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, CaptureStage::Done { .. } | CaptureStage::Failed(_))
    }
}

impl fmt::Display for CaptureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureStage::Idle => Ok(()),
            CaptureStage::Detecting => write!(f, "Detecting object..."),
            CaptureStage::Categorizing { detected } => write!(f, "Found {}. Categorizing...", title_case(detected)),
            CaptureStage::Done { detected } => write!(f, "Added {}", title_case(detected)),
            CaptureStage::Failed(message) => write!(f, "{}", message),
        }
    }
}

#[component]
pub fn PhotoCapture() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let file = StoredValue::new_local(None::<File>);
    let (preview, set_preview) = signal(None::<String>);
    let (stage, set_stage) = signal(CaptureStage::Idle);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let revoke_preview = move || {
        if let Some(url) = preview.get_untracked() {
            let _ = web_sys::Url::revoke_object_url(&url);
        }
        set_preview.set(None);
    };

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        let picked = input.files().and_then(|files| files.get(0));
        revoke_preview();
        set_stage.set(CaptureStage::Idle);
        if let Some(picked) = &picked {
            match web_sys::Url::create_object_url_with_blob(picked) {
                Ok(url) => set_preview.set(Some(url)),
                Err(e) => log::warn!("[PHOTO] Could not preview {}: {:?}", picked.name(), e),
            }
        }
        file.set_value(picked);
    };

    let on_process = move |_| {
        let Some(image) = file.get_value() else {
            return;
        };
        if stage.get_untracked().is_busy() {
            return;
        }
        let api = ctx.api();
        set_stage.set(CaptureStage::Detecting);
        spawn_local(async move {
            let detected = match api.detect_object(&image).await {
                Ok(detected) => detected,
                Err(e) => {
                    log::error!("[PHOTO] Detection failed: {}", e);
                    set_stage.set(CaptureStage::Failed(format!("Could not detect an object: {}", e)));
                    return;
                }
            };
            log::info!("[PHOTO] Detected {}", detected);
            set_stage.set(CaptureStage::Categorizing { detected: detected.clone() });

            match api.categorize(&detected).await {
                Ok(dataset) => {
                    store_set_dataset(&store, dataset);
                    ctx.toast("Item Added", &format!("{} has been categorized", title_case(&detected)));
                    set_stage.set(CaptureStage::Done { detected });
                }
                Err(e) => {
                    log::error!("[PHOTO] Categorization failed: {}", e);
                    set_stage.set(CaptureStage::Failed(format!("Could not categorize {}: {}", detected, e)));
                }
            }
        });
    };

    let on_reset = move |_| {
        revoke_preview();
        file.set_value(None);
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
        set_stage.set(CaptureStage::Idle);
    };

    on_cleanup(move || {
        if let Some(url) = preview.get_untracked() {
            let _ = web_sys::Url::revoke_object_url(&url);
        }
    });

    view! {
        <div class="panel">
            <h2 class="panel-title">"Add Item From Photo"</h2>
            <p class="muted">"Take a photo of an item to add it to your cards."</p>
            <input
                node_ref=input_ref
                type="file"
                accept="image/*"
                capture="environment"
                on:change=on_change
                disabled=move || stage.get().is_busy()
            />
            {move || preview.get().map(|src| view! { <img class="photo-preview" src=src alt="Selected photo" /> })}
            <p class=move || match stage.get() {
                CaptureStage::Failed(_) => "status error",
                _ => "status",
            }>{move || stage.get().to_string()}</p>
            <Show
                when=move || stage.get().is_finished()
                fallback=move || view! {
                    <button
                        class="wide"
                        on:click=on_process
                        disabled=move || stage.get().is_busy() || preview.get().is_none()
                    >
                        {move || if stage.get().is_busy() { "Processing..." } else { "Process Image" }}
                    </button>
                }
            >
                <button class="wide outline" on:click=on_reset>"Try Another"</button>
            </Show>
        </div>
    }
}
