use odl_types::PublisherId;

/// Errors produced by slot ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("slot {slot} has already been recorded by {sender}")]
    SlotAlreadyRecorded { slot: u64, sender: PublisherId },

    #[error("no record exists for slot {slot}")]
    SlotNotFound { slot: u64 },

    #[error("store error: {0}")]
    Store(String),
}
