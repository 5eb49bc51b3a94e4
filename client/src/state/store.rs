//! Observable store primitive shared by the theme and viewport stores.
//!
//! DESIGN
//! ======
//! A `Store<S>` owns one value and an ordered list of subscribers. Every
//! transition replaces the value, runs the optional post-transition hook,
//! then calls each subscriber registered at that moment, in registration
//! order, exactly once. New subscribers get the current value replayed
//! before `subscribe` returns.
//!
//! A `set` issued from inside a subscriber is queued and delivered after the
//! running round finishes, so notification rounds never interleave.
//!
//! Stores are single-threaded (`Rc`/`RefCell`); cloning a `Store` clones the
//! handle, not the value.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::util::env::EnvError;

type Callback<S> = Rc<dyn Fn(&S)>;
type Hook<S> = Box<dyn Fn(&S) -> Result<(), EnvError>>;

/// What to do when the post-transition hook fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HookPolicy {
    /// Ignore the failure.
    #[default]
    Swallow,
    /// Log the failure at warn level and carry on.
    Warn,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("post-transition hook failed: {0}")]
    Hook(#[from] EnvError),
}

struct Inner<S> {
    initial: S,
    state: RefCell<S>,
    subscribers: RefCell<Vec<(u64, Callback<S>)>>,
    next_id: Cell<u64>,
    hook: Option<(Hook<S>, HookPolicy)>,
    pending: RefCell<VecDeque<S>>,
    notifying: Cell<bool>,
}

/// Single-value observable store.
pub struct Store<S> {
    inner: Rc<Inner<S>>,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<S: Clone + 'static> Store<S> {
    pub fn new(initial: S) -> Self {
        Self::build(initial, None)
    }

    /// Store whose `hook` runs after every transition, before subscribers
    /// are notified. The hook also sees the initial value once.
    pub fn with_hook(
        initial: S,
        hook: impl Fn(&S) -> Result<(), EnvError> + 'static,
        policy: HookPolicy,
    ) -> Self {
        let store = Self::build(initial, Some((Box::new(hook), policy)));
        let initial = store.get();
        let _ = store.run_hook(&initial);
        store
    }

    fn build(initial: S, hook: Option<(Hook<S>, HookPolicy)>) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(initial.clone()),
                initial,
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                hook,
                pending: RefCell::new(VecDeque::new()),
                notifying: Cell::new(false),
            }),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> S {
        self.inner.state.borrow().clone()
    }

    /// Register `callback` and replay the current value to it immediately.
    pub fn subscribe(&self, callback: impl Fn(&S) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let callback: Callback<S> = Rc::new(callback);
        self.inner.subscribers.borrow_mut().push((id, Rc::clone(&callback)));
        callback(&self.get());

        let weak: Weak<Inner<S>> = Rc::downgrade(&self.inner);
        Subscription {
            detach: Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
                }
            }),
        }
    }

    /// Replace the value and notify subscribers. Hook failures follow the
    /// store's [`HookPolicy`].
    pub fn set(&self, next: S) {
        let _ = self.transition(next);
    }

    /// Like [`set`](Self::set), but hands a hook failure back to the caller.
    /// The new value is kept and subscribers are notified either way.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Hook`] if the post-transition hook failed for
    /// any value delivered during this call.
    pub fn try_set(&self, next: S) -> Result<(), StoreError> {
        self.transition(next)
    }

    /// Apply `f` to the newest value and set the result. Inside a
    /// notification round the newest value is the last one queued, so
    /// `set(a)` followed by `update(f)` yields `f(a)`.
    pub fn update(&self, f: impl FnOnce(&S) -> S) {
        let current = self.latest();
        self.set(f(&current));
    }

    /// Restore the value captured at construction. Always notifies, even
    /// when the value is already the initial one.
    pub fn reset(&self) {
        self.set(self.inner.initial.clone());
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    fn latest(&self) -> S {
        if self.inner.notifying.get() {
            if let Some(queued) = self.inner.pending.borrow().back() {
                return queued.clone();
            }
        }
        self.get()
    }

    fn transition(&self, next: S) -> Result<(), StoreError> {
        self.inner.pending.borrow_mut().push_back(next);
        if self.inner.notifying.get() {
            // Delivered by the outer round once it finishes.
            return Ok(());
        }

        self.inner.notifying.set(true);
        let mut failure = None;
        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some(next) = next else {
                break;
            };
            *self.inner.state.borrow_mut() = next.clone();
            if let Err(err) = self.run_hook(&next) {
                failure.get_or_insert(err);
            }
            self.notify(&next);
        }
        self.inner.notifying.set(false);

        match failure {
            Some(err) => Err(StoreError::Hook(err)),
            None => Ok(()),
        }
    }

    fn run_hook(&self, state: &S) -> Result<(), EnvError> {
        let Some((hook, policy)) = &self.inner.hook else {
            return Ok(());
        };
        hook(state).inspect_err(|err| {
            if *policy == HookPolicy::Warn {
                log::warn!("store hook failed: {err}");
            }
        })
    }

    fn notify(&self, state: &S) {
        let subscribers: Vec<Callback<S>> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in subscribers {
            callback(state);
        }
    }
}

impl<S: Clone + std::fmt::Debug> std::fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.inner.state.borrow())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish_non_exhaustive()
    }
}

/// Registration returned by [`Store::subscribe`].
///
/// Dropping it keeps the subscriber registered; call
/// [`unsubscribe`](Self::unsubscribe) to stop notifications.
pub struct Subscription {
    detach: Box<dyn FnOnce()>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        (self.detach)();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
