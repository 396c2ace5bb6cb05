use odl_crypto::ProofError;
use odl_ledger::LedgerError;
use odl_replay::ReplayError;
use odl_types::AccountKey;

/// Errors that prevent a challenge from being resolved.
///
/// Every variant means "challenge not provable", never "fraud confirmed":
/// a challenge that cannot be verified cleanly is rejected, conservatively.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChallengeError {
    #[error("invalid slot range: start={start}, end={end}")]
    InvalidRange { start: u64, end: u64 },

    #[error("slot range spans {span} slots, exceeding the limit of {max}")]
    RangeTooLarge { span: u64, max: u64 },

    #[error("no account with key {key} in replay output")]
    AccountNotFound { key: AccountKey },

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Proof(#[from] ProofError),

    #[error(transparent)]
    Replay(#[from] ReplayError),
}
