//! Categorized Items Summary
//!
//! Collapsible category -> subcategory -> item overview of the dataset.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::grouping::group_items;
use crate::keys::LogicalKey;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CategorizedItems() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let api = StoredValue::new(ctx.api());

    let image_for = move |key: LogicalKey| -> Option<String> {
        let reference = store
            .dataset()
            .with(|d| d.images.get(&key.to_string()).filter(|r| !r.is_empty()).cloned())?;
        Some(api.with_value(|api| api.image_url(&reference)))
    };
    let avatar = move |key: LogicalKey| image_for(key).map(|src| view! { <img class="avatar" src=src alt="" /> });

    let sections = move || {
        store.dataset().with(|d| group_items(&d.items)).into_iter().map(|(category, subcategories)| {
            view! {
                <details class="accordion">
                    <summary>
                        {avatar(LogicalKey::category(&category))}
                        <span class="capitalize">{category.clone()}</span>
                    </summary>
                    {subcategories.into_iter().map(|(subcategory, items)| view! {
                        <div class="accordion-section">
                            <h4>
                                {avatar(LogicalKey::subcategory(&category, &subcategory))}
                                <span class="capitalize">{subcategory.clone()}</span>
                            </h4>
                            {items.into_iter().map(|item| view! {
                                <div class="accordion-item">
                                    {avatar(LogicalKey::item(&item.name))}
                                    <span class="capitalize">{item.name.clone()}</span>
                                    <div class="badges">
                                        {item.requests.into_iter().map(|r| view! { <span class="badge">{r}</span> }).collect_view()}
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>
                    }).collect_view()}
                </details>
            }
        }).collect_view()
    };

    view! {
        <Show when=move || !store.dataset().with(|d| d.is_empty())>
            <div class="panel">
                <h2 class="panel-title">"Categorized Items"</h2>
                {sections}
            </div>
        </Show>
    }
}
