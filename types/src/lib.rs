//! Fundamental types for the ballot portal.
//!
//! This crate defines the records shared by every other crate in the workspace:
//! identities, elections, votes, results, wallet addresses, transaction hashes,
//! timestamps and the loading status of the ballot state.

pub mod address;
pub mod election;
pub mod error;
pub mod hash;
pub mod identity;
pub mod state;
pub mod time;
pub mod vote;

pub use address::WalletAddress;
pub use election::{Candidate, Election};
pub use error::TypeError;
pub use hash::TxHash;
pub use identity::{Identity, Role};
pub use state::LoadingState;
pub use time::Timestamp;
pub use vote::{Results, Vote};
