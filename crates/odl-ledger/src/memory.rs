use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;
use odl_types::{Digest, PublisherId};

use crate::error::LedgerError;
use crate::record::SlotRecord;
use crate::traits::{SlotReader, SlotWriter};

/// In-memory slot ledger for tests, local replay, and embedding.
///
/// Write-once semantics are enforced on insertion rather than by locking a
/// slot: the second writer for a slot observes `SlotAlreadyRecorded`, it
/// never blocks.
#[derive(Default)]
pub struct InMemorySlotLedger {
    inner: RwLock<HashMap<u64, SlotRecord>>,
}

impl InMemorySlotLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotWriter for InMemorySlotLedger {
    fn record_slot(
        &self,
        slot: u64,
        sender: PublisherId,
        transactions: Vec<Vec<u8>>,
        state_root: Digest,
    ) -> Result<(), LedgerError> {
        let mut slots = self
            .inner
            .write()
            .map_err(|_| LedgerError::Store("ledger write lock poisoned".into()))?;

        if let Some(existing) = slots.get(&slot) {
            return Err(LedgerError::SlotAlreadyRecorded {
                slot,
                sender: existing.sender.clone(),
            });
        }

        debug!(slot, sender = %sender, transactions = transactions.len(), "slot recorded");
        slots.insert(
            slot,
            SlotRecord {
                slot,
                sender,
                transactions,
                state_root,
            },
        );

        Ok(())
    }
}

impl SlotReader for InMemorySlotLedger {
    fn state_root(&self, slot: u64) -> Result<Digest, LedgerError> {
        let slots = self
            .inner
            .read()
            .map_err(|_| LedgerError::Store("ledger read lock poisoned".into()))?;

        slots
            .get(&slot)
            .map(|record| record.state_root)
            .ok_or(LedgerError::SlotNotFound { slot })
    }

    fn transaction_batch(&self, slot: u64) -> Result<Vec<Vec<u8>>, LedgerError> {
        let slots = self
            .inner
            .read()
            .map_err(|_| LedgerError::Store("ledger read lock poisoned".into()))?;

        Ok(slots
            .get(&slot)
            .map(|record| record.transactions.clone())
            .unwrap_or_default())
    }

    fn sender(&self, slot: u64) -> Result<Option<PublisherId>, LedgerError> {
        let slots = self
            .inner
            .read()
            .map_err(|_| LedgerError::Store("ledger read lock poisoned".into()))?;

        Ok(slots.get(&slot).map(|record| record.sender.clone()))
    }

    fn contains(&self, slot: u64) -> Result<bool, LedgerError> {
        let slots = self
            .inner
            .read()
            .map_err(|_| LedgerError::Store("ledger read lock poisoned".into()))?;

        Ok(slots.contains_key(&slot))
    }

    fn slot_count(&self) -> Result<u64, LedgerError> {
        let slots = self
            .inner
            .read()
            .map_err(|_| LedgerError::Store("ledger read lock poisoned".into()))?;

        Ok(slots.len() as u64)
    }
}
