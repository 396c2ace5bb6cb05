use serde::{Deserialize, Serialize};
use odl_types::{Digest, PublisherId};

/// One slot's recorded checkpoint data.
///
/// The three payload fields are recorded together as a single logical unit:
/// either all of them exist for a slot or none do. Once recorded, a
/// `SlotRecord` is immutable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    /// The checkpoint interval this record covers.
    pub slot: u64,
    /// The whitelisted publisher who recorded it.
    pub sender: PublisherId,
    /// Ordered raw transaction payloads for the slot.
    pub transactions: Vec<Vec<u8>>,
    /// Commitment to the full account state at the end of the slot.
    pub state_root: Digest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serde_roundtrip() {
        let record = SlotRecord {
            slot: 7,
            sender: PublisherId::ephemeral(),
            transactions: vec![vec![1, 2], vec![3]],
            state_root: Digest::from_bytes(b"root"),
        };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: SlotRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }
}
