//! Loading status of the ballot state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the ballot state is currently doing.
///
/// Overwritten on every action entry and exit; never queued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingState {
    #[default]
    Idle,
    Connecting,
    Loading,
    Voting,
    Error,
}

impl LoadingState {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Connecting | Self::Loading | Self::Voting)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Connecting => "connecting",
            Self::Loading => "loading",
            Self::Voting => "voting",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LoadingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
