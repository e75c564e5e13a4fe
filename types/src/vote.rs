//! Cast votes and aggregate results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{Timestamp, TxHash, WalletAddress};

/// One cast-ballot record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub candidate_id: String,
    /// `None` when the vote was recorded without a connected wallet.
    pub voter_address: Option<WalletAddress>,
    pub timestamp: Timestamp,
    pub transaction_hash: TxHash,
}

/// Vote counts keyed by candidate id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Results(BTreeMap<String, u64>);

impl Results {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed tally served by the simulated ballot service.
    pub fn example() -> Self {
        [("1", 1238), ("2", 984), ("3", 782)].into_iter().collect()
    }

    /// Count for a candidate; absent candidates count as zero.
    pub fn count(&self, candidate_id: &str) -> u64 {
        self.0.get(candidate_id).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, candidate_id: &str) -> u64 {
        let count = self.0.entry(candidate_id.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(id, count)| (id.as_str(), *count))
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for Results {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
