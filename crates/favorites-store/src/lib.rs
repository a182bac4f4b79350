//! Favorites Store
//!
//! A small reducer-driven store holding an ordered list of favorites.
//! State only changes through [`FavoritesStore::dispatch`], which runs the pure
//! [`reduce`] function and notifies subscribers when the content changed.
//!
//! The store is a cheap cloneable handle. Construct one at startup and pass it
//! to whoever needs it.

use parking_lot::Mutex;
use std::sync::{Arc, Weak};

// ========================
// Actions & State
// ========================

/// A request to change the favorites list
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FavoritesAction {
    /// Append the payload at the end of the list
    Add(String),
    /// Drop every entry equal to the payload
    Remove(String),
}

/// Favorites state. Insertion order is kept and duplicates are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FavoritesState {
    favorites: Vec<String>,
}

impl FavoritesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FavoritesState {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            favorites: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Compute the next state from the current one and an action.
///
/// Total and side-effect free. Payloads are taken as-is; trimming user input
/// is up to the caller.
pub fn reduce(state: &FavoritesState, action: FavoritesAction) -> FavoritesState {
    match action {
        FavoritesAction::Add(item) => {
            let mut favorites = Vec::with_capacity(state.favorites.len() + 1);
            favorites.extend(state.favorites.iter().cloned());
            favorites.push(item);
            FavoritesState { favorites }
        }
        FavoritesAction::Remove(item) => FavoritesState {
            favorites: state
                .favorites
                .iter()
                .filter(|existing| **existing != item)
                .cloned()
                .collect(),
        },
    }
}

// ========================
// Selectors
// ========================

/// Current favorites, in insertion order
pub fn select_favorites(state: &FavoritesState) -> &[String] {
    state.favorites()
}

/// Number of favorites (duplicates counted)
pub fn select_count(state: &FavoritesState) -> usize {
    state.len()
}

// ========================
// Store
// ========================

type Listener = Arc<dyn Fn(&FavoritesState) + Send + Sync>;

#[derive(Default)]
struct Inner {
    state: Arc<FavoritesState>,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

/// Handle to the favorites store
#[derive(Clone, Default)]
pub struct FavoritesStore {
    inner: Arc<Mutex<Inner>>,
}

impl FavoritesStore {
    /// Create a store with an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store starting from `state`
    pub fn with_state(state: FavoritesState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: Arc::new(state),
                ..Default::default()
            })),
        }
    }

    /// Read-only snapshot of the current state
    pub fn get_state(&self) -> Arc<FavoritesState> {
        self.inner.lock().state.clone()
    }

    /// Apply `action` and notify subscribers if the content changed.
    ///
    /// Returns whether the content changed. Listeners run after the internal
    /// lock is released, so they may read the store or dispatch again.
    pub fn dispatch(&self, action: FavoritesAction) -> bool {
        let (next, listeners) = {
            let mut inner = self.inner.lock();
            let next = reduce(&inner.state, action);
            if next == *inner.state {
                tracing::trace!("favorites unchanged, skipping notify");
                return false;
            }
            let next = Arc::new(next);
            inner.state = next.clone();
            let listeners: Vec<Listener> = inner
                .listeners
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect();
            (next, listeners)
        };

        tracing::debug!(count = next.len(), subscribers = listeners.len(), "favorites changed");
        for listener in listeners {
            listener(&next);
        }
        true
    }

    /// Register `listener` to run after every content-changing dispatch.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// unsubscribed or dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&FavoritesState) + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push((id, Arc::new(listener)));

        Subscription {
            id,
            store: Arc::downgrade(&self.inner),
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("FavoritesStore")
            .field("state", &inner.state)
            .field("subscribers", &inner.listeners.len())
            .finish()
    }
}

/// Registration of a store listener; removes the listener when dropped
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    store: Weak<Mutex<Inner>>,
}

impl Subscription {
    /// Remove the listener from the store
    pub fn unsubscribe(self) {
        // Drop does the work.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.lock().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
