use proptest::prelude::*;

use portal_ballot::Tally;
use portal_types::{Election, Results};

proptest! {
    /// The total is the sum of ballot counts, and shares add up to roughly 100.
    #[test]
    fn shares_cover_the_total(a in 0u64..10_000, b in 0u64..10_000, c in 0u64..10_000) {
        let results: Results = [("1", a), ("2", b), ("3", c)].into_iter().collect();
        let tally = Tally::from_results(&results, &Election::example());

        prop_assert_eq!(tally.total, a + b + c);
        let sum: f64 = tally.rows.iter().map(|r| r.share_percent).sum();
        if tally.total == 0 {
            prop_assert_eq!(sum, 0.0);
        } else {
            prop_assert!((sum - 100.0).abs() <= 0.15 + 1e-9, "shares summed to {}", sum);
        }
    }

    /// The leader's count is never below any other candidate's.
    #[test]
    fn leader_has_max_votes(a in 0u64..50, b in 0u64..50, c in 0u64..50) {
        let results: Results = [("1", a), ("2", b), ("3", c)].into_iter().collect();
        let tally = Tally::from_results(&results, &Election::example());

        match tally.leader() {
            None => prop_assert_eq!(a + b + c, 0),
            Some(leader) => {
                prop_assert!(tally.rows.iter().all(|r| r.votes <= leader.votes));
            }
        }
    }
}
