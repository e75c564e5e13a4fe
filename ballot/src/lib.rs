//! Ballot state for the portal.
//!
//! Wallet connection, the active election, the votes cast in this session and
//! the aggregate results. Everything that would talk to a ledger goes through
//! [`BallotService`]; the bundled [`MockBallotService`] serves fixed example
//! data with simulated latency.
//!
//! Rules enforced when casting:
//! - a wallet must be connected
//! - an election must be loaded and still open
//! - the candidate must be on its ballot
//! - at most one vote per session

pub mod ballot;
pub mod error;
pub mod service;
pub mod tally;

pub use ballot::{BallotSnapshot, BallotState};
pub use error::BallotError;
pub use service::{BallotService, MockBallotService};
pub use tally::{CandidateTally, Tally};
