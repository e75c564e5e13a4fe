//! Randomness for synthesized identifiers, addresses and hashes.

use rand::Rng;
use std::sync::Arc;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A source of uniformly distributed `u64` values.
///
/// Everything else (probabilities, base-36 strings) is derived from
/// [`RandomSource::next_u64`], so a scripted source controls all of it.
pub trait RandomSource: Send + Sync {
    fn next_u64(&self) -> u64;

    /// A float in `[0, 1)` built from the top 53 bits of the next value.
    fn next_f64(&self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// `true` with probability `p`.
    fn gen_bool(&self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// `len` lowercase base-36 characters.
    fn base36(&self, len: usize) -> String {
        (0..len)
            .map(|_| BASE36[(self.next_u64() % 36) as usize] as char)
            .collect()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Arc<R> {
    fn next_u64(&self) -> u64 {
        (**self).next_u64()
    }
}

/// Thread-local OS-seeded randomness.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_u64(&self) -> u64 {
        rand::thread_rng().gen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u64);

    impl RandomSource for Fixed {
        fn next_u64(&self) -> u64 {
            self.0
        }
    }

    #[test]
    fn base36_uses_lowercase_alphabet() {
        let s = ThreadRandom.base36(64);
        assert_eq!(s.len(), 64);
        assert!(s.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn base36_maps_value_modulo_36() {
        assert_eq!(Fixed(35).base36(3), "zzz");
        assert_eq!(Fixed(36 + 10).base36(1), "a");
    }

    #[test]
    fn next_f64_bounds() {
        assert_eq!(Fixed(0).next_f64(), 0.0);
        assert!(Fixed(u64::MAX).next_f64() < 1.0);
        assert!(!Fixed(u64::MAX).gen_bool(0.8));
        assert!(Fixed(0).gen_bool(0.8));
    }
}
