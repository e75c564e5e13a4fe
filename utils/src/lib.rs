//! Shared utilities for the ballot portal.

pub mod clock;
pub mod logging;
pub mod random;
pub mod time;

pub use clock::{Clock, SystemClock};
pub use logging::{init_tracing, LogFormat};
pub use random::{RandomSource, ThreadRandom};
pub use time::format_countdown;
