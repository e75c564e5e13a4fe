//! Single-record identity storage trait.

use crate::StoreError;
use std::sync::Arc;

/// Fixed name of the slot holding the serialized identity.
pub const IDENTITY_KEY: &str = "user";

/// Read/write/clear of the one persisted identity record.
///
/// Records are opaque strings; parsing (and treating malformed content as
/// absent) is the session's job.
pub trait IdentityStore: Send + Sync {
    /// The stored record, or `None` if the slot is empty.
    fn load(&self) -> Result<Option<String>, StoreError>;
    /// Replace the stored record.
    fn save(&self, record: &str) -> Result<(), StoreError>;
    /// Empty the slot. Clearing an empty slot is not an error.
    fn clear(&self) -> Result<(), StoreError>;
}

impl<T: IdentityStore + ?Sized> IdentityStore for Arc<T> {
    fn load(&self) -> Result<Option<String>, StoreError> {
        (**self).load()
    }

    fn save(&self, record: &str) -> Result<(), StoreError> {
        (**self).save(record)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}
