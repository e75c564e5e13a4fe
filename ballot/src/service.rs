//! The ballot backend seam.

use portal_types::{Election, Results, TxHash, WalletAddress};
use portal_utils::{Clock, RandomSource};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

use crate::BallotError;

pub const CONNECT_LATENCY: Duration = Duration::from_millis(1500);
pub const ELECTION_LATENCY: Duration = Duration::from_secs(2);
pub const VOTE_LATENCY: Duration = Duration::from_secs(3);
pub const VERIFY_LATENCY: Duration = Duration::from_secs(2);
pub const RESULTS_LATENCY: Duration = Duration::from_secs(2);

/// Probability that the mock service reports a vote as verified.
pub const DEFAULT_VERIFY_SUCCESS_RATE: f64 = 0.8;

/// Everything the ballot state needs from a ledger.
pub trait BallotService: Send + Sync {
    /// Connect a wallet, yielding its address.
    fn connect_wallet(&self) -> impl Future<Output = Result<WalletAddress, BallotError>> + Send;

    /// Fetch the active election.
    fn fetch_election(&self) -> impl Future<Output = Result<Election, BallotError>> + Send;

    /// Submit a vote for `candidate_id` from `voter`, yielding its transaction hash.
    fn submit_vote(
        &self,
        voter: &WalletAddress,
        candidate_id: &str,
    ) -> impl Future<Output = Result<TxHash, BallotError>> + Send;

    /// Check whether a transaction is recorded.
    fn verify_vote(&self, tx_hash: &TxHash) -> impl Future<Output = Result<bool, BallotError>> + Send;

    /// Fetch the authoritative tally.
    fn fetch_results(&self) -> impl Future<Output = Result<Results, BallotError>> + Send;
}

/// Fixed example data with simulated latency and synthesized identifiers.
///
/// Never fails. Verification is a coin flip that ignores the hash.
pub struct MockBallotService<C, R> {
    clock: C,
    random: R,
    verify_success_rate: f64,
}

impl<C: Clock, R: RandomSource> MockBallotService<C, R> {
    pub fn new(clock: C, random: R) -> Self {
        Self {
            clock,
            random,
            verify_success_rate: DEFAULT_VERIFY_SUCCESS_RATE,
        }
    }

    /// Override how often verification succeeds. Clamped to `[0, 1]`.
    pub fn with_verify_success_rate(mut self, rate: f64) -> Self {
        self.verify_success_rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
        self
    }

    pub fn verify_success_rate(&self) -> f64 {
        self.verify_success_rate
    }

    fn synthesize<T>(
        &self,
        len: usize,
        build: impl FnOnce(&str) -> Result<T, portal_types::TypeError>,
    ) -> Result<T, BallotError> {
        build(&self.random.base36(len)).map_err(|e| BallotError::Service(e.to_string()))
    }
}

impl<C: Clock, R: RandomSource> BallotService for MockBallotService<C, R> {
    async fn connect_wallet(&self) -> Result<WalletAddress, BallotError> {
        self.clock.sleep(CONNECT_LATENCY).await;
        self.synthesize(WalletAddress::BODY_LEN, WalletAddress::from_body)
    }

    async fn fetch_election(&self) -> Result<Election, BallotError> {
        self.clock.sleep(ELECTION_LATENCY).await;
        Ok(Election::example())
    }

    async fn submit_vote(
        &self,
        voter: &WalletAddress,
        candidate_id: &str,
    ) -> Result<TxHash, BallotError> {
        self.clock.sleep(VOTE_LATENCY).await;
        let hash = self.synthesize(TxHash::BODY_LEN, TxHash::from_body)?;
        debug!(%voter, candidate = candidate_id, tx = %hash, "vote submitted");
        Ok(hash)
    }

    async fn verify_vote(&self, tx_hash: &TxHash) -> Result<bool, BallotError> {
        self.clock.sleep(VERIFY_LATENCY).await;
        let verified = self.random.gen_bool(self.verify_success_rate);
        debug!(tx = %tx_hash, verified, "verification drawn");
        Ok(verified)
    }

    async fn fetch_results(&self) -> Result<Results, BallotError> {
        self.clock.sleep(RESULTS_LATENCY).await;
        Ok(Results::example())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_nullables::{NullClock, NullRandom};
    use std::sync::Arc;

    #[tokio::test]
    async fn mock_service_uses_fixed_latencies() {
        let clock = Arc::new(NullClock::default());
        let service = MockBallotService::new(clock.clone(), NullRandom::constant(7));

        let address = service.connect_wallet().await.unwrap();
        service.fetch_election().await.unwrap();
        service.submit_vote(&address, "1").await.unwrap();
        service.verify_vote(&TxHash::parse("0xabc").unwrap()).await.unwrap();
        service.fetch_results().await.unwrap();

        assert_eq!(
            clock.sleeps(),
            vec![
                CONNECT_LATENCY,
                ELECTION_LATENCY,
                VOTE_LATENCY,
                VERIFY_LATENCY,
                RESULTS_LATENCY
            ]
        );
    }

    #[tokio::test]
    async fn synthesized_identifiers_have_expected_shape() {
        let service = MockBallotService::new(NullClock::default(), NullRandom::constant(10));
        let address = service.connect_wallet().await.unwrap();
        assert_eq!(address.as_str(), format!("0x{}", "a".repeat(13)));

        let hash = service.submit_vote(&address, "2").await.unwrap();
        assert_eq!(hash.as_str().len(), 2 + TxHash::BODY_LEN);
    }

    #[tokio::test]
    async fn verification_ignores_the_hash() {
        let service = MockBallotService::new(
            NullClock::default(),
            NullRandom::from_fractions(&[0.1, 0.95]),
        );
        let hash = TxHash::parse("0xsame").unwrap();
        assert!(service.verify_vote(&hash).await.unwrap());
        assert!(!service.verify_vote(&hash).await.unwrap());
    }

    #[test]
    fn success_rate_is_clamped() {
        let service = MockBallotService::new(NullClock::default(), NullRandom::constant(0))
            .with_verify_success_rate(1.7);
        assert_eq!(service.verify_success_rate(), 1.0);
    }
}
