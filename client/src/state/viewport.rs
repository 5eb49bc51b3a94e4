//! Viewport scroll metrics store.
//!
//! Every field of [`ViewportMetrics`] is derived from the geometry read at
//! the moment of a scroll event; nothing is settable from outside.
//!
//! `reset` puts the zeroed metrics back but leaves the scroll listener in
//! place, so the next scroll event recomputes and overwrites them.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use std::rc::Rc;

use super::store::{Store, Subscription};
use crate::util::env::{Environment, Geometry, ListenerHandle};

/// Slack added before comparing against the document height, absorbing
/// sub-pixel rounding.
pub const BOTTOM_TOLERANCE: f64 = 1.0;

/// Derived scroll state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportMetrics {
    pub scroll_top: f64,
    pub scrolled: bool,
    pub at_bottom: bool,
    /// Not clamped; goes negative when the viewport overshoots the document.
    pub distance_to_bottom: f64,
}

impl ViewportMetrics {
    pub fn from_geometry(geometry: Geometry) -> Self {
        let Geometry { scroll_top, viewport_height, document_height } = geometry;
        let visible_bottom = scroll_top + viewport_height;
        Self {
            scroll_top,
            scrolled: scroll_top > 0.0,
            at_bottom: visible_bottom + BOTTOM_TOLERANCE >= document_height,
            distance_to_bottom: document_height - visible_bottom,
        }
    }
}

/// Live scroll metrics for the page.
#[derive(Clone, Debug)]
pub struct ViewportMetricsStore {
    store: Store<ViewportMetrics>,
    listener: Option<Rc<ListenerHandle>>,
}

impl ViewportMetricsStore {
    pub fn new(env: Rc<dyn Environment>) -> Self {
        let store = Store::new(ViewportMetrics::default());
        if !env.has_document() {
            return Self { store, listener: None };
        }

        store.set(ViewportMetrics::from_geometry(env.viewport_geometry()));

        let source = Rc::clone(&env);
        let target = store.clone();
        let listener = env.on_scroll(Box::new(move || {
            let metrics = ViewportMetrics::from_geometry(source.viewport_geometry());
            target.update(|_| metrics);
        }));
        Self { store, listener: Some(Rc::new(listener)) }
    }

    pub fn get(&self) -> ViewportMetrics {
        self.store.get()
    }

    pub fn subscribe(&self, callback: impl Fn(&ViewportMetrics) + 'static) -> Subscription {
        self.store.subscribe(callback)
    }

    /// Zero the metrics. The scroll listener stays attached.
    pub fn reset(&self) {
        self.store.reset();
    }

    /// Whether a scroll listener is feeding this store.
    pub fn is_tracking(&self) -> bool {
        self.listener.as_ref().is_some_and(|handle| handle.is_attached())
    }
}
