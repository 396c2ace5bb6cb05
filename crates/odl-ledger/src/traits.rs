use odl_types::{Digest, PublisherId};

use crate::error::LedgerError;

/// Write boundary for slot ledger append operations.
///
/// All implementations must satisfy these invariants:
/// - A slot is write-once: a second record attempt for the same slot fails
///   with `SlotAlreadyRecorded` and leaves the first record unchanged.
/// - The batch, root, and sender are recorded atomically as one unit;
///   partial writes are never observable.
/// - Concurrent writers to different slots are independent.
pub trait SlotWriter: Send + Sync {
    fn record_slot(
        &self,
        slot: u64,
        sender: PublisherId,
        transactions: Vec<Vec<u8>>,
        state_root: Digest,
    ) -> Result<(), LedgerError>;
}

/// Read boundary for slot ledger queries.
pub trait SlotReader: Send + Sync {
    /// The committed state root for a slot. Fails with `SlotNotFound` if the
    /// slot was never recorded.
    fn state_root(&self, slot: u64) -> Result<Digest, LedgerError>;

    /// The transaction batch for a slot.
    ///
    /// A never-recorded slot yields an empty batch rather than an error:
    /// range reads treat unused intervening slots as contributing zero
    /// transactions.
    fn transaction_batch(&self, slot: u64) -> Result<Vec<Vec<u8>>, LedgerError>;

    /// The publisher who recorded a slot, if any.
    fn sender(&self, slot: u64) -> Result<Option<PublisherId>, LedgerError>;

    /// Whether a record exists for the slot.
    fn contains(&self, slot: u64) -> Result<bool, LedgerError>;

    /// Number of recorded slots.
    fn slot_count(&self) -> Result<u64, LedgerError>;
}
