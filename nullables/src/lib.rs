//! Stand-ins for the portal's injected dependencies.
//!
//! [`NullClock`] never blocks and records each requested latency,
//! [`NullRandom`] replays a fixed script of values, and
//! [`NullIdentityStore`] keeps the identity record in memory and can be told
//! to fail. Tests build the session and ballot states on top of these.

pub mod clock;
pub mod random;
pub mod store;

pub use clock::NullClock;
pub use random::NullRandom;
pub use store::NullIdentityStore;
