//! The ballot state container.

use portal_types::{
    Election, LoadingState, Results, Timestamp, TxHash, Vote, WalletAddress,
};
use portal_utils::Clock;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

use crate::error::BallotError;
use crate::service::BallotService;

const CONNECT_FAILED: &str = "Failed to connect wallet. Please try again.";
const LOAD_FAILED: &str = "Failed to load election data. Please try again.";
const VOTE_FAILED: &str = "Failed to cast vote. Please try again.";
const VERIFY_FAILED: &str = "Failed to verify vote. Please try again.";
const RESULTS_FAILED: &str = "Failed to load election results. Please try again.";

/// A point-in-time copy of every ballot field.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BallotSnapshot {
    pub is_connected: bool,
    pub wallet_address: Option<WalletAddress>,
    pub current_election: Option<Election>,
    pub votes: Vec<Vote>,
    pub results: Results,
    pub loading_state: LoadingState,
    pub error_message: Option<String>,
}

/// Wallet, election, votes and results for one session.
///
/// Each action marks its busy status on entry and `idle` or `error` on exit.
/// Calls are neither queued nor rejected while another is in flight; the
/// status fields simply take the last write.
pub struct BallotState<S, C> {
    service: S,
    clock: C,
    inner: Mutex<BallotSnapshot>,
}

impl<S: BallotService, C: Clock> BallotState<S, C> {
    pub fn new(service: S, clock: C) -> Self {
        Self {
            service,
            clock,
            inner: Mutex::new(BallotSnapshot::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BallotSnapshot> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> BallotSnapshot {
        self.lock().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.lock().is_connected
    }

    pub fn wallet_address(&self) -> Option<WalletAddress> {
        self.lock().wallet_address.clone()
    }

    pub fn current_election(&self) -> Option<Election> {
        self.lock().current_election.clone()
    }

    pub fn votes(&self) -> Vec<Vote> {
        self.lock().votes.clone()
    }

    pub fn results(&self) -> Results {
        self.lock().results.clone()
    }

    pub fn loading_state(&self) -> LoadingState {
        self.lock().loading_state
    }

    pub fn error_message(&self) -> Option<String> {
        self.lock().error_message.clone()
    }

    pub fn has_voted(&self) -> bool {
        !self.lock().votes.is_empty()
    }

    fn enter(&self, state: LoadingState) {
        self.lock().loading_state = state;
    }

    /// Record the outcome of an action. Service failures surface the canned
    /// message; rule violations surface their own description.
    fn finish<T>(
        &self,
        result: Result<T, BallotError>,
        canned: &'static str,
        apply: impl FnOnce(&mut BallotSnapshot, &T),
    ) -> Result<T, BallotError> {
        let mut inner = self.lock();
        match result {
            Ok(value) => {
                apply(&mut inner, &value);
                inner.loading_state = LoadingState::Idle;
                Ok(value)
            }
            Err(e) => {
                inner.loading_state = LoadingState::Error;
                inner.error_message = Some(match &e {
                    BallotError::Service(_) => canned.to_string(),
                    other => other.to_string(),
                });
                Err(e)
            }
        }
    }

    pub async fn try_connect_wallet(&self) -> Result<WalletAddress, BallotError> {
        self.enter(LoadingState::Connecting);
        let result = self.service.connect_wallet().await;
        let result = self.finish(result, CONNECT_FAILED, |inner, address| {
            inner.is_connected = true;
            inner.wallet_address = Some(address.clone());
        });
        if let Ok(address) = &result {
            info!(%address, "wallet connected");
        }
        result
    }

    pub async fn connect_wallet(&self) -> bool {
        report("connect wallet", self.try_connect_wallet().await).is_some()
    }

    pub fn disconnect_wallet(&self) {
        let mut inner = self.lock();
        inner.is_connected = false;
        inner.wallet_address = None;
        inner.loading_state = LoadingState::Idle;
    }

    pub async fn try_load_election(&self) -> Result<Election, BallotError> {
        self.enter(LoadingState::Loading);
        let result = self.service.fetch_election().await;
        self.finish(result, LOAD_FAILED, |inner, election| {
            inner.current_election = Some(election.clone());
        })
    }

    pub async fn load_election(&self) {
        if let Some(election) = report("load election", self.try_load_election().await) {
            info!(election = %election.id, title = %election.title, "election loaded");
        }
    }

    /// Cast this session's vote for `candidate_id`.
    ///
    /// Checked before submitting and again before recording, so two
    /// overlapping calls record at most one vote.
    pub async fn try_cast_vote(&self, candidate_id: &str) -> Result<Vote, BallotError> {
        self.enter(LoadingState::Voting);

        let voter = match self.check_can_vote(candidate_id) {
            Ok(voter) => voter,
            Err(e) => return self.finish(Err(e), VOTE_FAILED, |_, _| {}),
        };

        let submitted = self
            .service
            .submit_vote(&voter, candidate_id)
            .await
            .map(|tx_hash| Vote {
                candidate_id: candidate_id.to_string(),
                voter_address: Some(voter),
                timestamp: self.clock.now(),
                transaction_hash: tx_hash,
            });

        let result = {
            let mut inner = self.lock();
            match submitted {
                Ok(_) if !inner.votes.is_empty() => Err(BallotError::AlreadyVoted),
                Ok(vote) => {
                    inner.votes.push(vote.clone());
                    inner.results.increment(&vote.candidate_id);
                    Ok(vote)
                }
                Err(e) => Err(e),
            }
        };
        let result = self.finish(result, VOTE_FAILED, |_, _| {});
        if let Ok(vote) = &result {
            info!(candidate = %vote.candidate_id, tx = %vote.transaction_hash, "vote cast");
        }
        result
    }

    pub async fn cast_vote(&self, candidate_id: &str) -> bool {
        report("cast vote", self.try_cast_vote(candidate_id).await).is_some()
    }

    fn check_can_vote(&self, candidate_id: &str) -> Result<WalletAddress, BallotError> {
        let inner = self.lock();
        let voter = match (&inner.wallet_address, inner.is_connected) {
            (Some(address), true) => address.clone(),
            _ => return Err(BallotError::WalletNotConnected),
        };
        let election = inner
            .current_election
            .as_ref()
            .ok_or(BallotError::NoElection)?;
        if !election.ongoing {
            return Err(BallotError::ElectionClosed(election.id.clone()));
        }
        if election.candidate(candidate_id).is_none() {
            return Err(BallotError::UnknownCandidate(candidate_id.to_string()));
        }
        if !inner.votes.is_empty() {
            return Err(BallotError::AlreadyVoted);
        }
        Ok(voter)
    }

    /// Ask the service whether `tx_hash` is recorded.
    pub async fn try_verify_vote(&self, tx_hash: &TxHash) -> Result<bool, BallotError> {
        self.enter(LoadingState::Loading);
        let result = self.service.verify_vote(tx_hash).await;
        self.finish(result, VERIFY_FAILED, |_, _| {})
    }

    pub async fn verify_vote(&self, tx_hash: &TxHash) -> bool {
        report("verify vote", self.try_verify_vote(tx_hash).await).unwrap_or(false)
    }

    /// Replace the local tally with the service's, discarding local increments.
    pub async fn try_get_election_results(&self) -> Result<Results, BallotError> {
        self.enter(LoadingState::Loading);
        let result = self.service.fetch_results().await;
        self.finish(result, RESULTS_FAILED, |inner, results| {
            inner.results = results.clone();
        })
    }

    /// [`BallotState::try_get_election_results`]; an empty tally on failure.
    pub async fn get_election_results(&self) -> Results {
        report("load results", self.try_get_election_results().await).unwrap_or_default()
    }

    /// Clock time, for callers rendering countdowns against the loaded election.
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }
}

fn report<T>(action: &str, result: Result<T, BallotError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(error = %e, "{action} failed");
            None
        }
    }
}
