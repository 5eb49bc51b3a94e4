//! Scriptable [`Environment`] for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::env::{EnvError, Environment, Geometry, ListenerHandle};

type ScrollListeners = Rc<RefCell<Vec<(usize, Rc<dyn Fn()>)>>>;

#[derive(Default)]
pub(crate) struct MockEnvironment {
    pub document: bool,
    pub prefers_dark: Cell<bool>,
    pub fail_reads: Cell<bool>,
    pub fail_writes: Cell<bool>,
    pub storage: RefCell<HashMap<String, String>>,
    pub writes: RefCell<Vec<(String, String)>>,
    pub geometry: Cell<Geometry>,
    pub geometry_reads: Cell<usize>,
    listeners: ScrollListeners,
    next_listener: Cell<usize>,
}

impl MockEnvironment {
    /// A mock with a live document attached.
    pub fn browser() -> Rc<Self> {
        Rc::new(Self { document: true, ..Self::default() })
    }

    /// A mock with no document, like a server render.
    pub fn detached() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with_stored(self: Rc<Self>, key: &str, value: &str) -> Rc<Self> {
        self.storage.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn set_geometry(&self, scroll_top: f64, viewport_height: f64, document_height: f64) {
        self.geometry.set(Geometry { scroll_top, viewport_height, document_height });
    }

    pub fn scroll_listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Deliver one scroll event to every attached listener.
    pub fn fire_scroll(&self) {
        let listeners: Vec<Rc<dyn Fn()>> =
            self.listeners.borrow().iter().map(|(_, l)| Rc::clone(l)).collect();
        for listener in listeners {
            listener();
        }
    }

    /// Move the scroll position and deliver a scroll event.
    pub fn scroll_to(&self, scroll_top: f64) {
        let mut geometry = self.geometry.get();
        geometry.scroll_top = scroll_top;
        self.geometry.set(geometry);
        self.fire_scroll();
    }
}

impl Environment for MockEnvironment {
    fn has_document(&self) -> bool {
        self.document
    }

    fn read_persisted(&self, key: &str) -> Result<Option<String>, EnvError> {
        if self.fail_reads.get() {
            return Err(EnvError::Unavailable("storage"));
        }
        Ok(self.storage.borrow().get(key).cloned())
    }

    fn write_persisted(&self, key: &str, value: &str) -> Result<(), EnvError> {
        if self.fail_writes.get() {
            return Err(EnvError::Js("QuotaExceededError".to_owned()));
        }
        self.writes.borrow_mut().push((key.to_owned(), value.to_owned()));
        self.storage.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn prefers_dark_scheme(&self) -> bool {
        self.prefers_dark.get()
    }

    fn viewport_geometry(&self) -> Geometry {
        self.geometry_reads.set(self.geometry_reads.get() + 1);
        self.geometry.get()
    }

    fn on_scroll(&self, callback: Box<dyn Fn()>) -> ListenerHandle {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::from(callback)));

        let listeners = Rc::clone(&self.listeners);
        ListenerHandle::new(move || listeners.borrow_mut().retain(|(lid, _)| *lid != id))
    }
}
