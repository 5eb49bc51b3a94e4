//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read store mirrors from Leptos context; none of them hold a
//! store directly.

pub mod exclusive_video;
pub mod gallery;
pub mod scroll_status;
pub mod theme_toggle;
