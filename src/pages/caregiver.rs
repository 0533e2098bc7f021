//! Caregiver Page
//!
//! Create items from text and manage the stored hierarchy.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CategorizedItems, HierarchyBrowser, ItemForm};
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::media::MediaSource;
use crate::store::{store_set_dataset, use_app_store, AppStateStoreFields};

/// What the load failure alert says and whether it offers a retry
#[derive(Debug, Clone, PartialEq, Eq)]
struct LoadNotice {
    message: String,
    retry: bool,
}

impl LoadNotice {
    fn for_error(error: &ApiError) -> Self {
        Self {
            message: format!("Could not load stored data: {}", error),
            retry: error.is_transient(),
        }
    }
}

/// Caregiver tab selection
#[derive(Clone, Copy, PartialEq)]
enum CaregiverTab {
    Create,
    Manage,
}

#[component]
pub fn CaregiverPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (tab, set_tab) = signal(CaregiverTab::Create);
    let (submitting, set_submitting) = signal(false);

    let on_submit = Callback::new(move |raw: String| {
        let api = ctx.api();
        set_submitting.set(true);
        spawn_local(async move {
            match api.categorize(&raw).await {
                Ok(dataset) => {
                    log::info!("[CAREGIVER] Categorized {} items", dataset.items.len());
                    store_set_dataset(&store, dataset);
                    ctx.toast("Items Categorized", "Your items have been categorized and saved.");
                }
                Err(e) => {
                    log::error!("[CAREGIVER] Categorize failed: {}", e);
                    ctx.toast_error("Error", &e.to_string());
                }
            }
            set_submitting.set(false);
        });
    });

    let tab_class = move |t: CaregiverTab| if tab.get() == t { "tab active" } else { "tab" };

    view! {
        <div class="page caregiver">
            <header class="page-header">
                <h1>"Caregiver Dashboard"</h1>
                <p class="muted">"Create and manage items, categories and actions."</p>
            </header>

            <Show when=move || store.loading().get()>
                <div class="loading-row"><span class="spinner"></span>" Loading stored data..."</div>
            </Show>

            {move || store.load_error().get().map(|error| {
                let notice = LoadNotice::for_error(&error);
                view! {
                    <div class="alert error">
                        <p>{notice.message}</p>
                        {notice.retry.then(|| view! {
                            <button class="outline" on:click=move |_| ctx.reload()>"Retry"</button>
                        })}
                    </div>
                }
            })}

            <nav class="tabs">
                <button class=move || tab_class(CaregiverTab::Create) on:click=move |_| set_tab.set(CaregiverTab::Create)>
                    "Create New Items"
                </button>
                <button class=move || tab_class(CaregiverTab::Manage) on:click=move |_| set_tab.set(CaregiverTab::Manage)>
                    "Manage Items"
                </button>
            </nav>

            {move || match tab.get() {
                CaregiverTab::Create => view! {
                    <div class="tab-panel">
                        <ItemForm on_submit=on_submit loading=submitting />
                        <CategorizedItems />
                    </div>
                }.into_any(),
                CaregiverTab::Manage => view! {
                    <div class="tab-panel">
                        <HierarchyBrowser source=MediaSource::Remote(ctx.api()) allow_add_action=true />
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_offered_for_transient_failures() {
        let offline = LoadNotice::for_error(&ApiError::Network("offline".into()));
        assert!(offline.retry);
        assert!(offline.message.starts_with("Could not load stored data"));

        let unavailable = LoadNotice::for_error(&ApiError::Status { status: 503, message: "busy".into() });
        assert!(unavailable.retry);
    }

    #[test]
    fn test_no_retry_for_permanent_failures() {
        let bad_request = LoadNotice::for_error(&ApiError::Status { status: 400, message: "bad".into() });
        assert!(!bad_request.retry);
        assert!(!LoadNotice::for_error(&ApiError::Decode("eof".into())).retry);
    }
}
