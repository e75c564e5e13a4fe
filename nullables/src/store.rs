//! Nullable identity store: thread-safe in-memory storage for testing.

use portal_store::{IdentityStore, StoreError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// An in-memory identity slot.
///
/// Can be pre-seeded with any content (including malformed records) and
/// switched into a failing mode where every operation returns a backend error.
pub struct NullIdentityStore {
    record: Mutex<Option<String>>,
    failing: AtomicBool,
}

impl NullIdentityStore {
    pub fn new() -> Self {
        Self {
            record: Mutex::new(None),
            failing: AtomicBool::new(false),
        }
    }

    /// A store whose slot already holds `record`.
    pub fn with_record(record: impl Into<String>) -> Self {
        let store = Self::new();
        *store.record.lock().unwrap() = Some(record.into());
        store
    }

    /// Make every subsequent operation fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Current slot content, bypassing failure mode (for assertions).
    pub fn peek(&self) -> Option<String> {
        self.record.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::Backend("null store set to fail".into()))
        } else {
            Ok(())
        }
    }
}

impl Default for NullIdentityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityStore for NullIdentityStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        self.check()?;
        Ok(self.record.lock().unwrap().clone())
    }

    fn save(&self, record: &str) -> Result<(), StoreError> {
        self.check()?;
        *self.record.lock().unwrap() = Some(record.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.check()?;
        *self.record.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_clear() {
        let store = NullIdentityStore::new();
        assert!(store.load().unwrap().is_none());
        store.save("record").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("record"));
        store.clear().unwrap();
        assert!(store.peek().is_none());
    }

    #[test]
    fn failing_mode_rejects_everything() {
        let store = NullIdentityStore::with_record("kept");
        store.set_failing(true);
        assert!(store.load().is_err());
        assert!(store.save("new").is_err());
        assert!(store.clear().is_err());
        assert_eq!(store.peek().as_deref(), Some("kept"));
    }
}
