//! Append-only slot ledger for the Optimistic Dispute Ledger (ODL).
//!
//! This crate holds the checkpoint data the dispute protocol argues about:
//! - `SlotRecord`: one slot's transaction batch, state root, and publisher
//! - `SlotWriter` / `SlotReader` trait boundaries
//! - `InMemorySlotLedger` implementation for tests and embedding
//!
//! Slots are write-once: a recorded batch, root, and sender are never
//! overwritten, which is what makes a recorded root worth disputing.

pub mod error;
pub mod memory;
pub mod record;
pub mod traits;

pub use error::LedgerError;
pub use memory::InMemorySlotLedger;
pub use record::SlotRecord;
pub use traits::{SlotReader, SlotWriter};
