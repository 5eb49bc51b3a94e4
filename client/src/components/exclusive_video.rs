//! `<video>` that pauses every other media element on the page when it
//! starts playing.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

#[component]
pub fn ExclusiveVideo(#[prop(into)] src: String) -> impl IntoView {
    let video_ref = NodeRef::<leptos::html::Video>::new();

    #[cfg(feature = "csr")]
    {
        // Runs once per mounted node: `video_ref` is only set on mount.
        Effect::new(move || {
            let Some(video) = video_ref.get() else {
                return;
            };
            let Some(host) = crate::util::media::DocumentMediaHost::current() else {
                return;
            };
            let media = video.unchecked_into::<web_sys::HtmlMediaElement>();
            // Stays bound until the element is gone.
            let _ = crate::util::media::pause_others(&host, &media);
        });
    }

    view! {
        <video class="exclusive-video" node_ref=video_ref src=src controls=true preload="metadata"></video>
    }
}
