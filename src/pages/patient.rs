//! Patient Page
//!
//! Add items by photo and preview the communication cards.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::{HierarchyBrowser, PhotoCapture};
use crate::context::use_app_context;
use crate::media::MediaSource;

/// Patient tab selection
#[derive(Clone, Copy, PartialEq)]
enum PatientTab {
    AddItem,
    Preview,
}

#[component]
pub fn PatientPage() -> impl IntoView {
    let ctx = use_app_context();
    let static_media = Arc::new(ctx.config().static_media);
    let (tab, set_tab) = signal(PatientTab::Preview);

    let tab_class = move |t: PatientTab| if tab.get() == t { "tab active" } else { "tab" };

    view! {
        <div class="page patient">
            <nav class="tabs">
                <button class=move || tab_class(PatientTab::AddItem) on:click=move |_| set_tab.set(PatientTab::AddItem)>
                    "Add Item"
                </button>
                <button class=move || tab_class(PatientTab::Preview) on:click=move |_| set_tab.set(PatientTab::Preview)>
                    "Preview"
                </button>
            </nav>

            {move || match tab.get() {
                PatientTab::AddItem => view! { <PhotoCapture /> }.into_any(),
                PatientTab::Preview => {
                    let source = MediaSource::Static(static_media.clone());
                    view! { <HierarchyBrowser source=source /> }.into_any()
                }
            }}
        </div>
    }
}
