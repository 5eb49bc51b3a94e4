//! Landing page: header with theme toggle, image gallery, showcase videos,
//! scroll controls.

use leptos::prelude::*;

use crate::app::ThemeContext;
use crate::components::exclusive_video::ExclusiveVideo;
use crate::components::gallery::Gallery;
use crate::components::scroll_status::ScrollStatus;
use crate::components::theme_toggle::ThemeToggle;

/// Showcase clips under the static root.
const SHOWCASE_VIDEOS: &[&str] = &["/videos/intro.mp4", "/videos/walkthrough.mp4"];

#[component]
pub fn HomePage() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    let palette_style = move || {
        let palette = theme.current.get().palette();
        format!("background: {}; color: {};", palette.background, palette.foreground)
    };

    view! {
        <div class="home" style=palette_style>
            <header class="home__header">
                <span class="home__title">"polyspace"</span>
                <span class="home__spacer"></span>
                <ThemeToggle/>
            </header>
            <Gallery/>
            <section class="home__media">
                {SHOWCASE_VIDEOS
                    .iter()
                    .map(|src| view! { <ExclusiveVideo src=*src/> })
                    .collect_view()}
            </section>
            <ScrollStatus/>
        </div>
    }
}
