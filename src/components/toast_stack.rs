//! Toast Stack Component

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields, ToastVariant};

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast destructive",
                    };
                    view! {
                        <div class=class role="status">
                            <div class="toast-body">
                                <strong>{toast.title}</strong>
                                <p>{toast.description}</p>
                            </div>
                            <button class="toast-close" on:click=move |_| store_dismiss_toast(&store, id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
