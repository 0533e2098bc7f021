//! Aphasia Cards App
//!
//! Root component: provides the store and context, loads the stored dataset,
//! and switches between the patient and caregiver roles.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::ToastStack;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{CaregiverPage, PatientPage};
use crate::store::{store_set_dataset, AppState, AppStateStoreFields, AppStore};

/// Role selection
#[derive(Clone, Copy, PartialEq)]
enum Role {
    Patient,
    Caregiver,
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new(config, set_reload_trigger, store);
    provide_context(ctx);

    let (role, set_role) = signal(Role::Patient);

    // Load stored data on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::info!("[APP] Loading stored data, trigger={}", trigger);
        store.loading().set(true);
        store.load_error().set(None);
        let api = ctx.api();
        spawn_local(async move {
            match api.stored_data().await {
                Ok(dataset) => {
                    log::info!("[APP] Loaded {} items", dataset.items.len());
                    store_set_dataset(&store, dataset);
                }
                Err(e) => {
                    log::error!("[APP] Failed to load stored data: {}", e);
                    store.load_error().set(Some(e));
                }
            }
            store.loading().set(false);
        });
    });

    let role_class = move |r: Role| if role.get() == r { "role active" } else { "role" };
    let switch_role = move |r: Role| {
        ctx.audio.stop();
        set_role.set(r);
    };

    view! {
        <div class="app-layout">
            <nav class="role-bar">
                <button class=move || role_class(Role::Patient) on:click=move |_| switch_role(Role::Patient)>
                    "Patient"
                </button>
                <button class=move || role_class(Role::Caregiver) on:click=move |_| switch_role(Role::Caregiver)>
                    "Caregiver"
                </button>
            </nav>

            <main class="main-content">
                {move || match role.get() {
                    Role::Patient => view! { <PatientPage /> }.into_any(),
                    Role::Caregiver => view! { <CaregiverPage /> }.into_any(),
                }}
            </main>

            <ToastStack />
        </div>
    }
}
