//! Root application component with routing and context providers.
//!
//! The stores are plain Rust values and not `Send`, so components never see
//! them directly. `App` mirrors each store into a signal through a
//! subscription and routes theme changes back through an effect.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::AppStores;
use crate::state::theme::Theme;
use crate::util::env;

/// Theme signals provided to components.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub current: ReadSignal<Theme>,
    requested: RwSignal<Option<Theme>>,
}

impl ThemeContext {
    /// Ask the theme store to switch to `theme`.
    pub fn request(&self, theme: Theme) {
        self.requested.set(Some(theme));
    }

    pub fn request_toggle(&self) {
        self.request(self.current.get_untracked().toggled());
    }
}

/// Root application component.
///
/// Builds the stores, provides their signal mirrors, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let stores = AppStores::new(env::current());
    let theme = RwSignal::new(stores.theme.get());
    let viewport = RwSignal::new(stores.viewport.get());

    // Mirrors live as long as the page; they are never unsubscribed.
    let _ = stores.theme.subscribe(move |t| theme.set(t.clone()));
    let _ = stores.viewport.subscribe(move |m| viewport.set(*m));

    #[cfg(feature = "csr")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = crate::util::theme_binding::bind_theme(&stores.theme, root);
        }
    }

    let requested = RwSignal::new(None::<Theme>);
    let theme_store = stores.theme.clone();
    Effect::new(move || {
        if let Some(next) = requested.get() {
            theme_store.set(next);
        }
    });

    provide_context(ThemeContext { current: theme.read_only(), requested });
    provide_context(viewport.read_only());

    view! {
        <Title text="Polyspace"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
