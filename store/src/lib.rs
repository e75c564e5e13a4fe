//! Identity persistence for the ballot portal.
//!
//! The session state keeps exactly one serialized identity record. Every
//! backend (a JSON file on disk, in-memory for testing) implements
//! [`IdentityStore`]; the session depends only on the trait.

pub mod error;
pub mod file;
pub mod identity;

pub use error::StoreError;
pub use file::FileIdentityStore;
pub use identity::{IdentityStore, IDENTITY_KEY};
