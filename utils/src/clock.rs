//! Time source and simulated latency.
//!
//! Every action of the session and ballot states waits on a [`Clock`] rather
//! than sleeping directly, so tests can substitute a clock that never blocks.

use portal_types::Timestamp;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

pub trait Clock: Send + Sync {
    /// The current time.
    fn now(&self) -> Timestamp;

    /// Suspend for `duration`. Never fails and cannot be cancelled early.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        (**self).sleep(duration)
    }
}

/// Wall-clock time with tokio timers.
///
/// `scale` multiplies every requested sleep; `0.0` skips waiting entirely.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    scale: f64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { scale: 1.0 }
    }

    /// A clock whose sleeps are stretched (or shrunk) by `scale`.
    /// Negative and non-finite scales are treated as zero.
    pub fn scaled(scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            0.0
        };
        Self { scale }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn scaled_duration(&self, duration: Duration) -> Duration {
        duration.mul_f64(self.scale)
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        let scaled = self.scaled_duration(duration);
        async move {
            if !scaled.is_zero() {
                tracing::trace!(?scaled, "simulated latency");
                tokio::time::sleep(scaled).await;
            }
        }
    }
}
