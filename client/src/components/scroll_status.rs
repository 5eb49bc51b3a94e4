//! Back-to-top control and end-of-page marker driven by viewport metrics.

use leptos::prelude::*;

use crate::state::viewport::ViewportMetrics;

fn scroll_to_top(_: leptos::ev::MouseEvent) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

#[component]
pub fn ScrollStatus() -> impl IntoView {
    let viewport = expect_context::<ReadSignal<ViewportMetrics>>();

    let remaining = move || {
        let distance = viewport.get().distance_to_bottom.max(0.0);
        format!("{distance:.0}px to go")
    };

    view! {
        <div class="scroll-status">
            <Show when=move || viewport.get().scrolled>
                <button class="btn scroll-status__top" on:click=scroll_to_top title="Back to top">
                    "↑"
                </button>
            </Show>
            <Show
                when=move || viewport.get().at_bottom
                fallback=move || view! { <span class="scroll-status__remaining">{remaining}</span> }
            >
                <span class="scroll-status__end">"End of page"</span>
            </Show>
        </div>
    }
}
