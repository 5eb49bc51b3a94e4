//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from stores and
//! components to improve reuse and testability.

pub mod env;
pub mod media;
#[cfg(test)]
pub(crate) mod mock_env;
pub mod theme_binding;
