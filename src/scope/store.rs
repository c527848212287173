use std::sync::{Mutex, MutexGuard, PoisonError};

use super::state::ScopeState;

/// The single shared `ScopeState`.
///
/// Every update runs under one lock acquisition, so a snapshot sees either
/// all of a message-driven update or none of it.
#[derive(Debug, Default)]
pub struct ScopeStore {
    state: Mutex<ScopeState>,
}

impl ScopeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> ScopeState {
        self.lock().clone()
    }

    /// Mutate the state and return the result as a snapshot.
    ///
    /// `apply` must not block; it runs with the lock held.
    pub fn update<F>(&self, apply: F) -> ScopeState
    where
        F: FnOnce(&mut ScopeState),
    {
        let mut state = self.lock();
        apply(&mut state);
        state.clone()
    }

    // A panicking update leaves plain data behind; keep serving it.
    fn lock(&self) -> MutexGuard<'_, ScopeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn snapshot_is_a_copy() {
        let store = ScopeStore::new();
        let mut snapshot = store.snapshot();
        snapshot.target = "changed locally".to_string();

        assert_eq!(store.snapshot().target, "");
    }

    #[test]
    fn update_returns_post_update_state() {
        let store = ScopeStore::new();
        let after = store.update(|state| state.ra = 42.0);

        assert_eq!(after.ra, 42.0);
        assert_eq!(store.snapshot(), after);
    }

    #[test]
    fn readers_never_see_half_an_update() {
        let store = Arc::new(ScopeStore::new());

        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..2000 {
                    let value = i as f64;
                    store.update(|state| {
                        state.ra = value;
                        state.dec = -value;
                        state.image_url = format!("{value}");
                    });
                }
            })
        };

        for _ in 0..2000 {
            let snapshot = store.snapshot();
            assert_eq!(snapshot.dec, -snapshot.ra);
            if !snapshot.image_url.is_empty() {
                assert_eq!(snapshot.image_url, format!("{}", snapshot.ra));
            }
        }

        writer.join().unwrap();
    }

    #[test]
    fn recovers_from_poisoned_lock() {
        let store = Arc::new(ScopeStore::new());
        let poisoner = Arc::clone(&store);
        let _ = thread::spawn(move || {
            poisoner.update(|state| {
                state.target = "before panic".to_string();
                panic!("boom");
            });
        })
        .join();

        assert_eq!(store.snapshot().target, "before panic");
    }
}
