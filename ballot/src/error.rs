use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BallotError {
    #[error("wallet is not connected")]
    WalletNotConnected,

    #[error("no election loaded")]
    NoElection,

    #[error("election {0} is not accepting votes")]
    ElectionClosed(String),

    #[error("candidate {0} is not on the ballot")]
    UnknownCandidate(String),

    #[error("a vote was already cast in this session")]
    AlreadyVoted,

    #[error("ballot service error: {0}")]
    Service(String),
}
