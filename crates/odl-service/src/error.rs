use odl_challenge::ChallengeError;
use odl_ledger::LedgerError;
use odl_types::PublisherId;

/// Errors surfaced by the record/challenge interface.
///
/// Everything is returned to the caller synchronously; nothing is retried
/// internally. Retry policy, if any, belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("publisher {0} is not whitelisted to record checkpoint data")]
    Unauthorized(PublisherId),

    #[error("record refused: {0}")]
    InvalidRecord(String),

    #[error("invalid hex input: {0}")]
    Decode(String),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Challenge(#[from] ChallengeError),
}
