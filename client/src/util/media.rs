//! Keep at most one media element playing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pause_others` hooks one element's play event. When it fires, every
//! media element currently in the document except the source is paused.
//! Nothing is remembered between events; each play rescans the document.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use super::env::ListenerHandle;

/// Media elements of a document plus the operations the listener needs.
pub trait MediaHost {
    type Element: Clone + PartialEq + 'static;

    fn media_elements(&self) -> Vec<Self::Element>;

    fn pause(&self, element: &Self::Element);

    fn on_play(&self, element: &Self::Element, callback: Box<dyn Fn()>) -> ListenerHandle;
}

/// Listener attached by [`pause_others`].
#[derive(Debug)]
pub struct MediaExclusivity {
    _listener: ListenerHandle,
}

impl MediaExclusivity {
    /// No-op: the play listener stays bound for the element's lifetime.
    pub fn destroy(self) {}
}

/// Pause every media element of `host` except `source`. Returns how many
/// elements were paused.
pub fn pause_siblings<H: MediaHost>(host: &H, source: &H::Element) -> usize {
    let mut paused = 0;
    for element in host.media_elements() {
        if element != *source {
            host.pause(&element);
            paused += 1;
        }
    }
    paused
}

/// Pause the other media elements whenever `element` starts playing.
pub fn pause_others<H>(host: &H, element: &H::Element) -> MediaExclusivity
where
    H: MediaHost + Clone + 'static,
{
    let scan = host.clone();
    let source = element.clone();
    let listener = host.on_play(
        element,
        Box::new(move || {
            let paused = pause_siblings(&scan, &source);
            log::debug!("media play paused {paused} other element(s)");
        }),
    );
    MediaExclusivity { _listener: listener }
}

#[cfg(feature = "csr")]
pub use browser::DocumentMediaHost;

#[cfg(feature = "csr")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::MediaHost;
    use crate::util::env::{ListenerHandle, attach_listener};

    const MEDIA_SELECTOR: &str = "audio, video";

    /// [`MediaHost`] over the live document.
    #[derive(Clone, Debug)]
    pub struct DocumentMediaHost {
        document: web_sys::Document,
    }

    impl DocumentMediaHost {
        pub fn current() -> Option<Self> {
            let document = web_sys::window()?.document()?;
            Some(Self { document })
        }
    }

    impl MediaHost for DocumentMediaHost {
        type Element = web_sys::HtmlMediaElement;

        fn media_elements(&self) -> Vec<Self::Element> {
            let Ok(nodes) = self.document.query_selector_all(MEDIA_SELECTOR) else {
                return Vec::new();
            };
            (0..nodes.length())
                .filter_map(|i| nodes.item(i))
                .filter_map(|node| node.dyn_into::<web_sys::HtmlMediaElement>().ok())
                .collect()
        }

        fn pause(&self, element: &Self::Element) {
            if let Err(err) = element.pause() {
                log::warn!("pausing media element failed: {err:?}");
            }
        }

        fn on_play(&self, element: &Self::Element, callback: Box<dyn Fn()>) -> ListenerHandle {
            attach_listener(element.as_ref(), "play", Closure::wrap(callback))
        }
    }
}
