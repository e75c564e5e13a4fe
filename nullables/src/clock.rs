//! Nullable clock: deterministic time for testing.

use portal_types::Timestamp;
use portal_utils::Clock;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to, or when something sleeps on it:
/// a sleep completes immediately and moves virtual time forward by the
/// requested duration. Every requested sleep is recorded.
pub struct NullClock {
    current_ms: AtomicU64,
    sleeps: Mutex<Vec<Duration>>,
}

impl NullClock {
    pub fn new(initial: Timestamp) -> Self {
        Self {
            current_ms: AtomicU64::new(initial.as_millis()),
            sleeps: Mutex::new(Vec::new()),
        }
    }

    /// Advance time by `duration`.
    pub fn advance(&self, duration: Duration) {
        self.current_ms
            .fetch_add(duration.as_millis() as u64, Ordering::SeqCst);
    }

    /// Set the time to a specific value.
    pub fn set(&self, now: Timestamp) {
        self.current_ms.store(now.as_millis(), Ordering::SeqCst);
    }

    /// All sleeps requested so far, in order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }

    /// Sum of all requested sleeps.
    pub fn total_slept(&self) -> Duration {
        self.sleeps.lock().unwrap().iter().sum()
    }
}

impl Default for NullClock {
    fn default() -> Self {
        Self::new(Timestamp::EPOCH)
    }
}

impl Clock for NullClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.current_ms.load(Ordering::SeqCst))
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        self.sleeps.lock().unwrap().push(duration);
        self.advance(duration);
        std::future::ready(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sleep_advances_virtual_time() {
        let clock = NullClock::new(Timestamp::from_secs(10));
        clock.sleep(Duration::from_millis(1500)).await;
        clock.sleep(Duration::from_secs(2)).await;
        assert_eq!(clock.now(), Timestamp::from_millis(13_500));
        assert_eq!(
            clock.sleeps(),
            vec![Duration::from_millis(1500), Duration::from_secs(2)]
        );
        assert_eq!(clock.total_slept(), Duration::from_millis(3500));
    }

    #[test]
    fn set_overrides_time() {
        let clock = NullClock::default();
        clock.set(Timestamp::from_secs(99));
        assert_eq!(clock.now().as_secs(), 99);
    }
}
