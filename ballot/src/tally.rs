//! Per-candidate breakdown of a results mapping, in ballot order.

use portal_types::{Election, Results};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateTally {
    pub candidate_id: String,
    pub name: String,
    pub party: String,
    pub votes: u64,
    /// Percentage of all votes, one decimal place.
    pub share_percent: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Tally {
    pub total: u64,
    pub rows: Vec<CandidateTally>,
}

impl Tally {
    /// Break `results` down over the candidates of `election`.
    ///
    /// Only ballot candidates get a row, but `total` and every share count all
    /// entries in `results`, including ids that are not on the ballot.
    pub fn from_results(results: &Results, election: &Election) -> Self {
        let total = results.total();

        let rows = election
            .candidates
            .iter()
            .map(|candidate| {
                let votes = results.count(&candidate.id);
                CandidateTally {
                    candidate_id: candidate.id.clone(),
                    name: candidate.name.clone(),
                    party: candidate.party.clone(),
                    votes,
                    share_percent: share(votes, total),
                }
            })
            .collect();

        Self { total, rows }
    }

    /// The candidate with the most votes; earlier ballot position wins ties.
    /// `None` when no ballot candidate has a vote.
    pub fn leader(&self) -> Option<&CandidateTally> {
        self.rows
            .iter()
            .filter(|row| row.votes > 0)
            .fold(None, |best: Option<&CandidateTally>, row| match best {
                Some(b) if b.votes >= row.votes => Some(b),
                _ => Some(row),
            })
    }
}

fn share(votes: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (votes as f64 * 1000.0 / total as f64).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_results_breakdown() {
        let tally = Tally::from_results(&Results::example(), &Election::example());

        assert_eq!(tally.total, 3004);
        let shares: Vec<f64> = tally.rows.iter().map(|r| r.share_percent).collect();
        assert_eq!(shares, [41.2, 32.8, 26.0]);
        assert_eq!(tally.leader().map(|r| r.name.as_str()), Some("Alice Johnson"));
    }

    #[test]
    fn empty_results_have_no_leader() {
        let tally = Tally::from_results(&Results::new(), &Election::example());
        assert_eq!(tally.total, 0);
        assert_eq!(tally.rows.len(), 3);
        assert!(tally.rows.iter().all(|r| r.share_percent == 0.0));
        assert!(tally.leader().is_none());
    }

    #[test]
    fn ties_go_to_earlier_candidate() {
        let results: Results = [("2", 5), ("3", 5), ("1", 1)].into_iter().collect();
        let tally = Tally::from_results(&results, &Election::example());
        assert_eq!(tally.leader().unwrap().candidate_id, "2");
    }

    #[test]
    fn off_ballot_counts_dilute_shares() {
        let results: Results = [("1", 3), ("99", 97)].into_iter().collect();
        let tally = Tally::from_results(&results, &Election::example());
        assert_eq!(tally.total, 100);
        assert_eq!(tally.rows.len(), 3);
        assert_eq!(tally.rows[0].share_percent, 3.0);
        assert_eq!(tally.leader().unwrap().candidate_id, "1");
    }

    #[test]
    fn only_off_ballot_votes_have_no_leader() {
        let results: Results = [("99", 5)].into_iter().collect();
        let tally = Tally::from_results(&results, &Election::example());
        assert_eq!(tally.total, 5);
        assert!(tally.leader().is_none());
    }
}
