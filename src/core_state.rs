//! Shared application state.
//!
//! `CoreState` owns the reception store and is wrapped in `Arc` at startup
//! so every HTTP handler sees the same instance. Reads take a shared lock;
//! only seeding and quick add take the write lock.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::store::ReceptionStore;

pub struct CoreState {
    store: RwLock<ReceptionStore>,
}

impl CoreState {
    /// Create a new CoreState with an empty store.
    pub fn new() -> Self {
        Self::with_store(ReceptionStore::new())
    }

    pub fn with_store(store: ReceptionStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Acquire a read lock on the store.
    pub fn read_store(&self) -> Result<RwLockReadGuard<'_, ReceptionStore>, CoreError> {
        self.store.read().map_err(|_| CoreError::LockPoisoned)
    }

    /// Acquire a write lock on the store.
    pub fn write_store(&self) -> Result<RwLockWriteGuard<'_, ReceptionStore>, CoreError> {
        self.store.write().map_err(|_| CoreError::LockPoisoned)
    }

    /// Owned copy of the store, for work that should not hold the lock.
    pub fn snapshot(&self) -> Result<ReceptionStore, CoreError> {
        Ok(self.read_store()?.clone())
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
    }

    #[test]
    fn new_state_has_empty_store() {
        let state = CoreState::new();
        assert!(!state.read_store().unwrap().is_seeded());
    }

    #[test]
    fn writes_are_visible_to_readers() {
        let state = CoreState::new();
        state.write_store().unwrap().load_demo_data(today());
        assert_eq!(state.read_store().unwrap().appointments().len(), 4);
    }

    #[test]
    fn snapshot_is_detached() {
        let state = CoreState::new();
        state.write_store().unwrap().load_demo_data(today());

        let snapshot = state.snapshot().unwrap();
        state
            .write_store()
            .unwrap()
            .quick_add_appointment(today().and_hms_opt(9, 0, 0).unwrap());

        assert_eq!(snapshot.appointments().len(), 4);
        assert_eq!(state.read_store().unwrap().appointments().len(), 5);
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let state = Arc::new(CoreState::new());
        let poisoner = Arc::clone(&state);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.write_store().unwrap();
            panic!("poison the store lock");
        })
        .join();

        assert!(matches!(state.read_store(), Err(CoreError::LockPoisoned)));
        assert!(matches!(state.snapshot(), Err(CoreError::LockPoisoned)));
    }
}
