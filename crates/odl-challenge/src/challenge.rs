use serde::{Deserialize, Serialize};
use odl_crypto::MerkleProof;
use odl_replay::ExecutionEnvironment;
use odl_types::{Account, AccountKey};

/// A fraud challenge: the assertion that the state root recorded for
/// `end_slot` does not match honest replay of the recorded transactions.
///
/// Challenges are ephemeral request entities. They exist for the duration of
/// one resolution call and are never persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FraudChallenge {
    /// First slot of the disputed range (inclusive).
    pub start_slot: u64,
    /// Last slot of the disputed range (inclusive); the proof references
    /// this slot's committed root.
    pub end_slot: u64,
    /// The account whose recorded state is disputed.
    pub disputed_key: AccountKey,
    /// The challenger's claimed inclusion proof for the disputed account's
    /// commitment under `end_slot`'s root.
    pub proof: MerkleProof,
    /// The challenger's assertion of the account states entering replay.
    pub account_states: Vec<Account>,
    /// Execution-environment context forwarded to the replay engine.
    pub environment: ExecutionEnvironment,
}

#[cfg(test)]
mod tests {
    use odl_crypto::MerkleTree;
    use odl_types::Digest;

    use super::*;

    #[test]
    fn challenge_serde_roundtrip() {
        let tree = MerkleTree::from_leaves(vec![
            Digest::from_bytes(b"a"),
            Digest::from_bytes(b"b"),
        ]);
        let challenge = FraudChallenge {
            start_slot: 3,
            end_slot: 5,
            disputed_key: AccountKey::new([1u8; 32]),
            proof: tree.proof(0).unwrap(),
            account_states: vec![Account::with_balance(AccountKey::new([1u8; 32]), 9)],
            environment: ExecutionEnvironment::empty(),
        };
        let json = serde_json::to_string(&challenge).unwrap();
        let parsed: FraudChallenge = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.start_slot, 3);
        assert_eq!(parsed.end_slot, 5);
        assert_eq!(parsed.proof, challenge.proof);
    }
}
