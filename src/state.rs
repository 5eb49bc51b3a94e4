//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! server is otherwise stateless: it only carries the resolved config.

use std::sync::Arc;

use crate::config::Config;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config: Arc::new(config) }
    }
}
