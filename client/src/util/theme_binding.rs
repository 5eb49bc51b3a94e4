//! Mirror the theme store onto an element attribute.
//!
//! The binding writes `data-theme` on every notification, including the
//! replay at bind time. `destroy` only stops future writes; the attribute is
//! left as it was.

#[cfg(test)]
#[path = "theme_binding_test.rs"]
mod theme_binding_test;

use crate::state::store::Subscription;
use crate::state::theme::PreferenceStore;

pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Anything that can carry a string attribute.
pub trait AttributeTarget {
    fn set_attribute(&self, name: &str, value: &str);
}

#[cfg(feature = "csr")]
impl AttributeTarget for web_sys::Element {
    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(err) = web_sys::Element::set_attribute(self, name, value) {
            log::warn!("setting {name} failed: {err:?}");
        }
    }
}

/// Live attribute binding returned by [`bind_theme`].
#[derive(Debug)]
pub struct ThemeBinding {
    subscription: Subscription,
}

impl ThemeBinding {
    pub fn destroy(self) {
        self.subscription.unsubscribe();
    }
}

pub fn bind_theme<T: AttributeTarget + 'static>(store: &PreferenceStore, target: T) -> ThemeBinding {
    let subscription = store.subscribe(move |theme| target.set_attribute(THEME_ATTRIBUTE, theme.as_str()));
    ThemeBinding { subscription }
}
