//! Nullable random: deterministic random number generation.

use portal_utils::RandomSource;
use std::sync::Mutex;

/// A deterministic random source for testing.
///
/// Returns pre-configured values in order, cycling when exhausted.
pub struct NullRandom {
    outputs: Vec<u64>,
    index: Mutex<usize>,
}

impl NullRandom {
    /// Create with a sequence of deterministic values.
    ///
    /// # Panics
    /// Panics if `outputs` is empty.
    pub fn new(outputs: Vec<u64>) -> Self {
        assert!(!outputs.is_empty(), "NullRandom needs at least one output");
        Self {
            outputs,
            index: Mutex::new(0),
        }
    }

    /// Create with a single value that will be returned for every call.
    pub fn constant(value: u64) -> Self {
        Self::new(vec![value])
    }

    /// Create from fractions in `[0, 1)`, so that [`RandomSource::next_f64`]
    /// replays them (up to 53-bit precision).
    pub fn from_fractions(fractions: &[f64]) -> Self {
        const SCALE: u64 = 1 << 53;
        Self::new(
            fractions
                .iter()
                .map(|f| {
                    let mantissa = (f.clamp(0.0, 1.0) * SCALE as f64) as u64;
                    mantissa.min(SCALE - 1) << 11
                })
                .collect(),
        )
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        *self.index.lock().unwrap()
    }
}

impl RandomSource for NullRandom {
    fn next_u64(&self) -> u64 {
        let mut idx = self.index.lock().unwrap();
        let value = self.outputs[*idx % self.outputs.len()];
        *idx += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_outputs() {
        let random = NullRandom::new(vec![1, 2]);
        assert_eq!(random.next_u64(), 1);
        assert_eq!(random.next_u64(), 2);
        assert_eq!(random.next_u64(), 1);
        assert_eq!(random.draws(), 3);
    }

    #[test]
    fn fractions_replay_through_next_f64() {
        let random = NullRandom::from_fractions(&[0.25, 0.9]);
        assert_eq!(random.next_f64(), 0.25);
        assert!((random.next_f64() - 0.9).abs() < 1e-12);
        assert!(random.gen_bool(0.8));
        assert!(!random.gen_bool(0.8));
    }
}
