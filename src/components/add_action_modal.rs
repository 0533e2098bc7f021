//! Add Action Modal
//!
//! Asks for a new action name and persists it for the current item.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::validate_new_action;
use crate::context::use_app_context;
use crate::models::Item;
use crate::store::{store_apply_added_action, use_app_store, AppStateStoreFields};

#[component]
pub fn AddActionModal(item: Item, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let item = StoredValue::new(item);
    let (action_name, set_action_name) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let action = action_name.get_untracked().trim().to_string();
        // prefer the cached record in case it changed since the modal opened
        let item = item.with_value(|opened| {
            store.dataset().with_untracked(|d| d.find_item(&opened.name).cloned()).unwrap_or_else(|| opened.clone())
        });

        if let Err(e) = validate_new_action(&item, &action) {
            on_close.run(());
            if !action.is_empty() {
                ctx.toast_error("Action Exists", &e.to_string());
            }
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            match ctx.api().add_action(&item, &action).await {
                Ok(added) => {
                    store_apply_added_action(&store, added);
                    set_submitting.set(false);
                    ctx.toast("Action Added", &format!("Successfully added \"{}\" to {}", action, item.name));
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("[ACTION] Failed to add action: {}", e);
                    set_submitting.set(false);
                    ctx.toast_error("Error", "Failed to add new action. Please try again.");
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>"Add New Action"</h2>
                {move || if submitting.get() {
                    view! {
                        <div class="modal-busy">
                            <span class="spinner"></span>
                            <p>"Generating video..."</p>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <form on:submit=on_submit>
                            <label for="action-name">"Action Name"</label>
                            <input
                                id="action-name"
                                type="text"
                                placeholder="e.g., cut half"
                                required=true
                                prop:value=move || action_name.get()
                                on:input=move |ev| set_action_name.set(event_target_value(&ev))
                            />
                            <div class="modal-buttons">
                                <button type="button" class="outline" on:click=move |_| on_close.run(())>"Cancel"</button>
                                <button type="submit">"Add Action"</button>
                            </div>
                        </form>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
