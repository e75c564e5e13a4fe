//! Timestamp type used throughout the portal.
//!
//! Timestamps are Unix epoch milliseconds (UTC), the resolution the vote
//! records and election windows are stored at.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A Unix timestamp in milliseconds since epoch (UTC).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub fn from_secs(secs: u64) -> Self {
        Self(secs.saturating_mul(1000))
    }

    /// Get the current system time as a `Timestamp`.
    ///
    /// A system clock set before the epoch reads as [`Timestamp::EPOCH`].
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self(millis)
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    pub fn as_secs(&self) -> u64 {
        self.0 / 1000
    }

    /// Time left until `self`, measured from `now`. Zero once `now` has passed.
    pub fn remaining_from(&self, now: Timestamp) -> Duration {
        Duration::from_millis(self.0.saturating_sub(now.0))
    }

    pub fn saturating_add(&self, duration: Duration) -> Self {
        Self(self.0.saturating_add(duration.as_millis() as u64))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_saturates_at_zero() {
        let end = Timestamp::from_secs(100);
        assert_eq!(end.remaining_from(Timestamp::from_secs(40)), Duration::from_secs(60));
        assert_eq!(end.remaining_from(Timestamp::from_secs(400)), Duration::ZERO);
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&Timestamp::from_millis(1234)).unwrap();
        assert_eq!(json, "1234");
    }
}
