//! Video Player Component

use leptos::html::Video;
use leptos::prelude::*;

/// Looping, muted action video
#[component]
pub fn VideoPlayer(url: String) -> impl IntoView {
    let video_ref = NodeRef::<Video>::new();

    // muted must be a property, not just an attribute, for autoplay to start
    Effect::new(move |_| {
        if let Some(video) = video_ref.get() {
            video.set_muted(true);
            video.set_loop(true);
            let _ = video.play();
        }
    });

    view! {
        <video class="card-video" node_ref=video_ref autoplay=true playsinline=true>
            <source src=url type="video/mp4" />
            "Your browser does not support the video tag."
        </video>
    }
}
