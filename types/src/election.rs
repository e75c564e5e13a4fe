//! Elections and the candidates on their ballot.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::Timestamp;

/// A nominee on an election ballot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub party: String,
    pub image_url: String,
}

/// A voting contest. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Election {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub candidates: Vec<Candidate>,
    pub ongoing: bool,
}

/// 2025-01-01T00:00:00Z
const EXAMPLE_START_MS: u64 = 1_735_689_600_000;
/// 2025-12-31T00:00:00Z
const EXAMPLE_END_MS: u64 = 1_767_139_200_000;

impl Election {
    /// The fixed election record served by the simulated ballot service.
    pub fn example() -> Self {
        Self {
            id: "1".into(),
            title: "Presidential Election 2025".into(),
            description: "Vote for the next president of the country".into(),
            start_date: Timestamp::from_millis(EXAMPLE_START_MS),
            end_date: Timestamp::from_millis(EXAMPLE_END_MS),
            ongoing: true,
            candidates: vec![
                Candidate::new(
                    "1",
                    "Alice Johnson",
                    "Progressive Party",
                    "https://images.pexels.com/photos/5393594/pexels-photo-5393594.jpeg?auto=compress&cs=tinysrgb&w=300",
                ),
                Candidate::new(
                    "2",
                    "Bob Smith",
                    "Conservative Party",
                    "https://images.pexels.com/photos/5792641/pexels-photo-5792641.jpeg?auto=compress&cs=tinysrgb&w=300",
                ),
                Candidate::new(
                    "3",
                    "Charlie Davis",
                    "Independent",
                    "https://images.pexels.com/photos/5212653/pexels-photo-5212653.jpeg?auto=compress&cs=tinysrgb&w=300",
                ),
            ],
        }
    }

    pub fn candidate(&self, candidate_id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == candidate_id)
    }

    /// Time left until the election closes, zero once `end_date` has passed.
    pub fn time_remaining(&self, now: Timestamp) -> Duration {
        self.end_date.remaining_from(now)
    }
}

impl Candidate {
    pub fn new(id: &str, name: &str, party: &str, image_url: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            party: party.to_string(),
            image_url: image_url.to_string(),
        }
    }
}
