//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Both presentation stores are built on the same [`store::Store`]
//! primitive. [`AppStores`] constructs them once from an injected
//! environment and is handed to whatever needs them, so tests can build a
//! fresh set per case.


pub mod store;
pub mod theme;
pub mod viewport;

use std::rc::Rc;

use crate::util::env::{DetachedEnvironment, Environment};
use theme::PreferenceStore;
use viewport::ViewportMetricsStore;

/// Registry of the application's stores.
#[derive(Clone, Debug)]
pub struct AppStores {
    pub theme: PreferenceStore,
    pub viewport: ViewportMetricsStore,
}

impl AppStores {
    pub fn new(env: Rc<dyn Environment>) -> Self {
        Self {
            theme: PreferenceStore::new(Rc::clone(&env)),
            viewport: ViewportMetricsStore::new(env),
        }
    }

    /// Stores for a context without a document.
    pub fn detached() -> Self {
        Self::new(Rc::new(DetachedEnvironment))
    }
}
