//! Session state for the ballot portal.
//!
//! Holds the signed-in [`Identity`](portal_types::Identity) and the
//! authentication flags, persists the identity through an
//! [`IdentityStore`](portal_store::IdentityStore), and decides which portal
//! routes the current identity may open.
//!
//! Credentials are checked against a closed set of two demo accounts; there
//! is no password hashing and no backend.

pub mod credentials;
pub mod error;
pub mod registration;
pub mod route;
pub mod session;

pub use error::{SessionError, ValidationError};
pub use registration::{RegistrationField, RegistrationForm};
pub use route::{Access, CommissionerPage, Route, VoterPage};
pub use session::{SessionSnapshot, SessionState};
