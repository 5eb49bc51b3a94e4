//! Hosting environment capability set.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stores never touch `window`, `localStorage` or the DOM directly. They are
//! handed an [`Environment`] that answers the handful of questions they need
//! (persisted value, color-scheme preference, viewport geometry) and
//! delivers scroll events.
//!
//! TRADE-OFFS
//! ==========
//! Server rendering and host-side tests use [`DetachedEnvironment`], which
//! reports no document and answers every query with a safe default. The
//! browser implementation only exists with the `csr` feature.

#[cfg(test)]
#[path = "env_test.rs"]
mod env_test;

use std::rc::Rc;

/// Failure reported by an environment capability.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("{0} is unavailable")]
    Unavailable(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

/// Raw scroll geometry read at the moment of an event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// Handle for an event listener attached through the environment.
///
/// Dropping the handle leaves the listener attached. Only [`remove`] detaches.
///
/// [`remove`]: ListenerHandle::remove
pub struct ListenerHandle {
    remove: Option<Box<dyn FnOnce()>>,
}

impl ListenerHandle {
    /// A handle for a listener that was never attached.
    #[must_use]
    pub fn inert() -> Self {
        Self { remove: None }
    }

    pub fn new(remove: impl FnOnce() + 'static) -> Self {
        Self { remove: Some(Box::new(remove)) }
    }

    /// Whether a live listener backs this handle.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.remove.is_some()
    }

    /// Detach the listener.
    pub fn remove(mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl std::fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerHandle").field("attached", &self.is_attached()).finish()
    }
}

/// Capabilities the presentation stores need from their host.
pub trait Environment {
    /// `true` when a live document/window is attached.
    fn has_document(&self) -> bool;

    /// Read a persisted string value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be reached.
    fn read_persisted(&self, key: &str) -> Result<Option<String>, EnvError>;

    /// Persist a string value (best effort, last writer wins).
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write.
    fn write_persisted(&self, key: &str, value: &str) -> Result<(), EnvError>;

    /// `true` if the host reports a dark color-scheme preference.
    fn prefers_dark_scheme(&self) -> bool;

    fn viewport_geometry(&self) -> Geometry;

    /// Invoke `callback` on every scroll event until the handle is removed.
    fn on_scroll(&self, callback: Box<dyn Fn()>) -> ListenerHandle;
}

/// Environment for contexts without a document (server render, host tests).
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedEnvironment;

impl Environment for DetachedEnvironment {
    fn has_document(&self) -> bool {
        false
    }

    fn read_persisted(&self, _key: &str) -> Result<Option<String>, EnvError> {
        Ok(None)
    }

    fn write_persisted(&self, _key: &str, _value: &str) -> Result<(), EnvError> {
        Ok(())
    }

    fn prefers_dark_scheme(&self) -> bool {
        false
    }

    fn viewport_geometry(&self) -> Geometry {
        Geometry::default()
    }

    fn on_scroll(&self, _callback: Box<dyn Fn()>) -> ListenerHandle {
        ListenerHandle::inert()
    }
}

/// The environment for the current build target.
///
/// Browser builds get the live window when one exists; everything else gets
/// [`DetachedEnvironment`].
pub fn current() -> Rc<dyn Environment> {
    #[cfg(feature = "csr")]
    {
        if let Some(env) = browser::BrowserEnvironment::new() {
            return Rc::new(env);
        }
    }
    Rc::new(DetachedEnvironment)
}

#[cfg(feature = "csr")]
pub use browser::{BrowserEnvironment, attach_listener};

#[cfg(feature = "csr")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    use super::{EnvError, Environment, Geometry, ListenerHandle};

    const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

    impl EnvError {
        pub(crate) fn from_js(value: &JsValue) -> Self {
            Self::Js(format!("{value:?}"))
        }
    }

    /// Attach `closure` to `event` on `target`.
    ///
    /// The closure is leaked into the JS heap so the listener outlives the
    /// handle; [`ListenerHandle::remove`] unregisters it.
    pub fn attach_listener(
        target: &web_sys::EventTarget,
        event: &'static str,
        closure: Closure<dyn Fn()>,
    ) -> ListenerHandle {
        let function: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        if let Err(err) = target.add_event_listener_with_callback(event, &function) {
            log::warn!("failed to attach {event} listener: {err:?}");
            return ListenerHandle::inert();
        }
        closure.forget();

        let target = target.clone();
        ListenerHandle::new(move || {
            let _ = target.remove_event_listener_with_callback(event, &function);
        })
    }

    /// Environment backed by the live browser window.
    #[derive(Clone, Debug)]
    pub struct BrowserEnvironment {
        window: web_sys::Window,
    }

    impl BrowserEnvironment {
        pub fn new() -> Option<Self> {
            web_sys::window().map(|window| Self { window })
        }

        fn storage(&self) -> Result<web_sys::Storage, EnvError> {
            self.window
                .local_storage()
                .map_err(|err| EnvError::from_js(&err))?
                .ok_or(EnvError::Unavailable("localStorage"))
        }
    }

    impl Environment for BrowserEnvironment {
        fn has_document(&self) -> bool {
            self.window.document().is_some()
        }

        fn read_persisted(&self, key: &str) -> Result<Option<String>, EnvError> {
            self.storage()?.get_item(key).map_err(|err| EnvError::from_js(&err))
        }

        fn write_persisted(&self, key: &str, value: &str) -> Result<(), EnvError> {
            self.storage()?.set_item(key, value).map_err(|err| EnvError::from_js(&err))
        }

        fn prefers_dark_scheme(&self) -> bool {
            self.window
                .match_media(DARK_SCHEME_QUERY)
                .ok()
                .flatten()
                .map_or(false, |mq| mq.matches())
        }

        fn viewport_geometry(&self) -> Geometry {
            let document_height = self
                .window
                .document()
                .and_then(|doc| doc.document_element())
                .map_or(0.0, |el| f64::from(el.scroll_height()));
            Geometry {
                scroll_top: self.window.scroll_y().unwrap_or(0.0),
                viewport_height: self
                    .window
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0),
                document_height,
            }
        }

        fn on_scroll(&self, callback: Box<dyn Fn()>) -> ListenerHandle {
            attach_listener(self.window.as_ref(), "scroll", Closure::wrap(callback))
        }
    }
}
