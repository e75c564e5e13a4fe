use std::sync::Arc;
use std::time::Duration;

use portal_ballot::{BallotState, MockBallotService, Tally};
use portal_nullables::{NullClock, NullRandom};
use portal_types::{LoadingState, Results, Timestamp};
use portal_utils::format_countdown;

/// 2025-12-30T00:00:00Z, one day before the example election closes.
const LAST_DAY_MS: u64 = 1_767_052_800_000;

type Ballot = BallotState<MockBallotService<Arc<NullClock>, NullRandom>, Arc<NullClock>>;

fn setup(random: NullRandom) -> (Ballot, Arc<NullClock>) {
    let clock = Arc::new(NullClock::new(Timestamp::from_millis(LAST_DAY_MS)));
    let service = MockBallotService::new(clock.clone(), random);
    (BallotState::new(service, clock.clone()), clock)
}

#[tokio::test]
async fn full_voter_flow() {
    let (ballot, clock) = setup(NullRandom::constant(0));

    assert!(ballot.connect_wallet().await);
    ballot.load_election().await;
    assert!(ballot.cast_vote("3").await);

    let vote = ballot.votes().pop().unwrap();
    assert_eq!(vote.candidate_id, "3");
    assert_eq!(ballot.results().count("3"), 1);
    assert!(ballot.has_voted());

    // connect + load + vote
    assert_eq!(clock.total_slept(), Duration::from_millis(6500));

    assert!(ballot.verify_vote(&vote.transaction_hash).await);
    assert_eq!(ballot.loading_state(), LoadingState::Idle);

    let results = ballot.get_election_results().await;
    assert_eq!(results, Results::example());

    let snapshot = ballot.snapshot();
    assert_eq!(snapshot.votes.len(), 1);
    assert!(snapshot.error_message.is_none());
}

#[tokio::test]
async fn countdown_tracks_clock() {
    let (ballot, clock) = setup(NullRandom::constant(1));
    ballot.load_election().await;
    let election = ballot.current_election().unwrap();

    // Loading the election took two seconds of the last day.
    assert_eq!(
        format_countdown(election.time_remaining(ballot.now())),
        "0d 23h 59m 58s"
    );

    clock.advance(Duration::from_secs(86_400));
    assert_eq!(
        format_countdown(election.time_remaining(ballot.now())),
        "0d 0h 0m 0s"
    );
}

#[tokio::test]
async fn tally_reflects_fetched_results() {
    let (ballot, _) = setup(NullRandom::constant(1));
    ballot.load_election().await;
    let results = ballot.get_election_results().await;

    let tally = Tally::from_results(&results, &ballot.current_election().unwrap());
    assert_eq!(tally.total, 3004);
    assert_eq!(tally.leader().unwrap().candidate_id, "1");
}
