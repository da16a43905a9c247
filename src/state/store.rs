//! Shared holder of the current state snapshot.
//!
//! Readers take an `Arc` to the snapshot and release the lock immediately,
//! so selectors never run while holding it.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::mvi::Reducer;

use super::intent::StateIntent;
use super::reducer::StateReducer;
use super::tree::AppState;

#[derive(Clone, Default)]
pub struct StateStore {
    inner: Arc<RwLock<Arc<AppState>>>,
}

impl StateStore {
    pub fn new(state: AppState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(state))),
        }
    }

    /// Current snapshot. Cheap: clones an `Arc`.
    pub fn snapshot(&self) -> Arc<AppState> {
        self.inner.read().clone()
    }

    /// Apply `intent` and publish the resulting snapshot.
    pub fn dispatch(&self, intent: StateIntent) {
        let mut guard = self.inner.write();
        let current = AppState::clone(&guard);
        tracing::trace!(?intent, "Dispatching state intent");
        *guard = Arc::new(StateReducer::reduce(current, intent));
    }

    /// Replace the whole tree, e.g. after loading a snapshot from disk.
    pub fn replace(&self, state: AppState) {
        *self.inner.write() = Arc::new(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshots_are_isolated_from_later_dispatches() {
        let store = StateStore::default();
        let before = store.snapshot();
        store.dispatch(StateIntent::Authenticated(true));
        assert!(!before.auth.is_authenticated);
        assert!(store.snapshot().auth.is_authenticated);
    }

    #[test]
    fn clones_share_the_same_tree() {
        let store = StateStore::default();
        let other = store.clone();
        other.dispatch(StateIntent::Authenticated(true));
        assert!(store.snapshot().auth.is_authenticated);
    }

    #[test]
    fn replace_swaps_tree() {
        let store = StateStore::default();
        let mut state = AppState::default();
        state.lockbox.at_bounds = true;
        store.replace(state);
        assert!(store.snapshot().lockbox.at_bounds);
    }
}
