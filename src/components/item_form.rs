//! Item Form Component
//!
//! Comma-separated item entry with example chips.

use leptos::prelude::*;

const EXAMPLES: &[&str] = &["bread, water, apple", "toothbrush, soap, towel", "notebook, pen, glasses"];

#[component]
pub fn ItemForm(#[prop(into)] on_submit: Callback<String>, #[prop(into)] loading: Signal<bool>) -> impl IntoView {
    let (items, set_items) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(items.get_untracked());
    };

    view! {
        <div class="panel">
            <h2 class="panel-title">"Add New Items"</h2>
            <p class="muted">
                "Enter items to categorize and generate common requests. Previously added items will be preserved."
            </p>
            <form class="item-form" on:submit=submit>
                <label for="items">"Enter items separated by commas"</label>
                <input
                    id="items"
                    type="text"
                    placeholder="bread, water, apple, toothpaste"
                    required=true
                    prop:value=move || items.get()
                    on:input=move |ev| set_items.set(event_target_value(&ev))
                />
                <div class="examples">
                    <p class="muted small">"Examples:"</p>
                    {EXAMPLES.iter().map(|example| {
                        view! {
                            <button type="button" class="chip" on:click=move |_| set_items.set(example.to_string())>
                                {*example}
                            </button>
                        }
                    }).collect_view()}
                </div>
                <button type="submit" class="wide" disabled=move || loading.get()>
                    {move || if loading.get() { "Processing..." } else { "Categorize Items" }}
                </button>
            </form>
        </div>
    }
}
