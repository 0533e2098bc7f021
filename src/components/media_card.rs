//! Media Card Component
//!
//! One selectable card in the browser grid: media on top, label below.

use leptos::prelude::*;

use crate::components::VideoPlayer;
use crate::media::{MediaKind, MediaState};
use crate::text::title_case;

#[component]
pub fn MediaCard(
    label: String,
    kind: MediaKind,
    #[prop(into)] media: Signal<MediaState>,
    /// Image shown if the resolved image fails to load
    placeholder: Option<String>,
    #[prop(into)] selected: Signal<bool>,
    /// Whether the card drills further down (shows a chevron)
    #[prop(optional)]
    drills_down: bool,
    #[prop(into)] on_select: Callback<()>,
    /// Speak button; `None` hides it
    on_speak: Option<Callback<()>>,
    #[prop(into)] speaking: Signal<bool>,
) -> impl IntoView {
    let (broken, set_broken) = signal(false);
    let fallback_label = label.clone();
    let title = title_case(&label);

    let card_class = move || if selected.get() { "media-card selected" } else { "media-card" };

    let media_view = move || match (media.get(), kind) {
        (MediaState::Loading, _) => view! { <div class="card-media loading"><span class="spinner"></span></div> }.into_any(),
        (MediaState::Ready(url), MediaKind::Video) => view! { <div class="card-media video"><VideoPlayer url=url /></div> }.into_any(),
        (MediaState::Ready(url), MediaKind::Image) => {
            let src = if broken.get() { placeholder.clone().unwrap_or(url) } else { url };
            view! {
                <div class="card-media">
                    <img src=src alt=fallback_label.clone() on:error=move |_| set_broken.set(true) />
                </div>
            }
            .into_any()
        }
        (MediaState::Fallback, MediaKind::Video) => view! {
            <div class="card-media fallback"><p>"Video not available"</p></div>
        }
        .into_any(),
        (MediaState::Fallback, MediaKind::Image) => view! {
            <div class="card-media fallback"><span>{fallback_label.clone()}</span></div>
        }
        .into_any(),
    };

    view! {
        <div class=card_class on:click=move |_| on_select.run(())>
            <div class="card-actions">
                {on_speak.map(|speak| view! {
                    <button
                        class="speak-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            speak.run(());
                        }
                    >
                        {move || if speaking.get() { "❚❚" } else { "▶" }}
                    </button>
                })}
                <Show when=move || selected.get()>
                    <span class="selected-badge">"✓"</span>
                </Show>
            </div>
            {media_view}
            <div class="card-title">
                <span>{title}</span>
                {drills_down.then(|| view! { <span class="chevron">"›"</span> })}
            </div>
        </div>
    }
}
