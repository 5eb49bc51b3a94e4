//! Image grid fed by `/api/images`.
//!
//! ERROR HANDLING
//! ==============
//! A failed listing shows a short notice; the rest of the page keeps
//! rendering.

use leptos::prelude::*;

#[component]
pub fn Gallery() -> impl IntoView {
    let images = RwSignal::new(Vec::<String>::new());
    let failed = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_images().await {
                Some(list) => images.set(list),
                None => failed.set(true),
            }
        });
    }

    view! {
        <section class="gallery">
            <Show when=move || failed.get()>
                <p class="gallery__error">"Images are unavailable."</p>
            </Show>
            <For
                each=move || images.get()
                key=|src: &String| src.clone()
                children=move |src: String| {
                    view! { <img class="gallery__image" src=src loading="lazy" alt=""/> }
                }
            />
        </section>
    }
}
