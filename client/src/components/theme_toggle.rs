//! Light/dark switch.

use leptos::prelude::*;

use crate::app::ThemeContext;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| theme.request_toggle()
            title="Toggle dark mode"
        >
            {move || if theme.current.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
