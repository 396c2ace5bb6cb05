use serde::{Deserialize, Serialize};
use odl_types::Digest;

use crate::hasher::ContentHasher;

/// Side of a sibling in a Merkle proof path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Binary Merkle tree over leaf digests.
///
/// Constructed from the commitments of a state snapshot. Supports generating
/// inclusion proofs whose sibling paths the challenge resolver later reuses
/// with a recomputed leaf.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    /// The root hash of the tree.
    root: Digest,
    /// Original leaf digests.
    leaves: Vec<Digest>,
    /// All tree nodes (leaves + internal), stored level by level.
    /// Level 0 = leaves, last element = root.
    levels: Vec<Vec<Digest>>,
}

impl MerkleTree {
    /// Build a Merkle tree from leaf digests.
    ///
    /// An empty list produces a null root. A single leaf is its own root.
    pub fn from_leaves(leaves: Vec<Digest>) -> Self {
        if leaves.is_empty() {
            return Self {
                root: Digest::null(),
                leaves: vec![],
                levels: vec![],
            };
        }

        let mut levels: Vec<Vec<Digest>> = vec![leaves.clone()];
        let mut current = leaves.clone();

        while current.len() > 1 {
            let mut next = Vec::with_capacity((current.len() + 1) / 2);
            for pair in current.chunks(2) {
                let hash = if pair.len() == 2 {
                    hash_pair(&pair[0], &pair[1])
                } else {
                    // Odd node: hash with itself
                    hash_pair(&pair[0], &pair[0])
                };
                next.push(hash);
            }
            levels.push(next.clone());
            current = next;
        }

        let root = current[0];
        Self {
            root,
            leaves,
            levels,
        }
    }

    /// The root hash of the tree.
    pub fn root(&self) -> Digest {
        self.root
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Generate an inclusion proof for the leaf at `index`.
    pub fn proof(&self, index: usize) -> Option<MerkleProof> {
        if index >= self.leaves.len() || self.levels.is_empty() {
            return None;
        }

        let mut path = Vec::new();
        let mut idx = index;

        for level in &self.levels[..self.levels.len() - 1] {
            let sibling_idx = if idx % 2 == 0 { idx + 1 } else { idx - 1 };
            let sibling = if sibling_idx < level.len() {
                level[sibling_idx]
            } else {
                // Odd level: duplicate the last element
                level[idx]
            };
            let side = if idx % 2 == 0 {
                Side::Right
            } else {
                Side::Left
            };
            path.push((sibling, side));
            idx /= 2;
        }

        Some(MerkleProof {
            commitment: self.leaves[index],
            path,
        })
    }
}

/// Merkle inclusion proof: a claimed leaf commitment plus the sibling path
/// needed to reduce it to a root.
///
/// The expected root is never carried inside the proof: verification always
/// runs against the root the caller read from the ledger, so a forged proof
/// cannot smuggle in its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    /// The claimed leaf commitment.
    pub commitment: Digest,
    /// Path of (sibling_hash, sibling_side) pairs from leaf to root.
    pub path: Vec<(Digest, Side)>,
}

impl MerkleProof {
    /// Verify the proof against an externally supplied root.
    ///
    /// Reduces the commitment through the full sibling path and compares the
    /// result to `root`. The whole path is always walked, whatever the input;
    /// the work done does not depend on where a mismatch would arise.
    pub fn verify(&self, root: &Digest) -> Result<(), ProofError> {
        let mut current = self.commitment;
        for (sibling, side) in &self.path {
            current = match side {
                Side::Left => hash_pair(sibling, &current),
                Side::Right => hash_pair(&current, sibling),
            };
        }
        if current == *root {
            Ok(())
        } else {
            Err(ProofError::RootMismatch {
                expected: *root,
                computed: current,
            })
        }
    }

    /// A proof with the same sibling path but a substituted leaf commitment.
    ///
    /// This is what lets one proof format serve both directions of a fraud
    /// challenge: verify the challenger's claimed leaf, then re-verify the
    /// independently recomputed leaf through the identical path topology.
    pub fn with_commitment(&self, commitment: Digest) -> Self {
        Self {
            commitment,
            path: self.path.clone(),
        }
    }
}

/// Errors from Merkle proof verification.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProofError {
    #[error("proof does not reduce to the recorded root (expected {expected:?}, computed {computed:?})")]
    RootMismatch { expected: Digest, computed: Digest },
}

fn hash_pair(left: &Digest, right: &Digest) -> Digest {
    ContentHasher::MERKLE_NODE.hash_pair(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(seed: u8) -> Digest {
        Digest::from_bytes(&[seed])
    }

    #[test]
    fn empty_tree_has_null_root() {
        let tree = MerkleTree::from_leaves(vec![]);
        assert!(tree.root().is_null());
        assert_eq!(tree.leaf_count(), 0);
    }

    #[test]
    fn single_leaf_is_root() {
        let l = leaf(1);
        let tree = MerkleTree::from_leaves(vec![l]);
        assert_eq!(tree.root(), l);
    }

    #[test]
    fn two_leaves_produce_parent() {
        let tree = MerkleTree::from_leaves(vec![leaf(1), leaf(2)]);
        assert_ne!(tree.root(), leaf(1));
        assert_ne!(tree.root(), leaf(2));
    }

    #[test]
    fn proof_verifies_for_all_leaves() {
        let leaves: Vec<Digest> = (0..7).map(leaf).collect();
        let tree = MerkleTree::from_leaves(leaves.clone());

        for i in 0..leaves.len() {
            let proof = tree.proof(i).expect("proof should exist");
            assert_eq!(proof.commitment, leaves[i]);
            assert!(
                proof.verify(&tree.root()).is_ok(),
                "proof for leaf {i} should verify"
            );
        }
    }

    #[test]
    fn proof_out_of_bounds_returns_none() {
        let tree = MerkleTree::from_leaves(vec![leaf(1), leaf(2)]);
        assert!(tree.proof(5).is_none());
    }

    #[test]
    fn tampered_commitment_fails_verification() {
        let tree = MerkleTree::from_leaves(vec![leaf(1), leaf(2), leaf(3), leaf(4)]);
        let proof = tree.proof(0).unwrap().with_commitment(leaf(99));
        assert!(matches!(
            proof.verify(&tree.root()),
            Err(ProofError::RootMismatch { .. })
        ));
    }

    #[test]
    fn verification_is_against_the_supplied_root() {
        let tree = MerkleTree::from_leaves(vec![leaf(1), leaf(2)]);
        let other = MerkleTree::from_leaves(vec![leaf(3), leaf(4)]);
        let proof = tree.proof(0).unwrap();
        assert!(proof.verify(&tree.root()).is_ok());
        assert!(proof.verify(&other.root()).is_err());
    }

    #[test]
    fn with_commitment_preserves_path() {
        let tree = MerkleTree::from_leaves(vec![leaf(1), leaf(2), leaf(3), leaf(4)]);
        let proof = tree.proof(2).unwrap();
        let substituted = proof.with_commitment(leaf(42));
        assert_eq!(substituted.path, proof.path);
        assert_eq!(substituted.commitment, leaf(42));
        // Substituting the true leaf back restores a verifying proof.
        let restored = substituted.with_commitment(leaf(3));
        assert!(restored.verify(&tree.root()).is_ok());
    }

    #[test]
    fn different_trees_different_roots() {
        let tree1 = MerkleTree::from_leaves(vec![leaf(1), leaf(2)]);
        let tree2 = MerkleTree::from_leaves(vec![leaf(3), leaf(4)]);
        assert_ne!(tree1.root(), tree2.root());
    }

    #[test]
    fn deterministic_root() {
        let leaves: Vec<Digest> = (0..10).map(leaf).collect();
        let tree1 = MerkleTree::from_leaves(leaves.clone());
        let tree2 = MerkleTree::from_leaves(leaves);
        assert_eq!(tree1.root(), tree2.root());
    }

    #[test]
    fn power_of_two_leaves() {
        let leaves: Vec<Digest> = (0..8).map(leaf).collect();
        let tree = MerkleTree::from_leaves(leaves.clone());
        for i in 0..8 {
            let proof = tree.proof(i).unwrap();
            assert!(proof.verify(&tree.root()).is_ok());
            assert_eq!(proof.path.len(), 3); // log2(8) = 3
        }
    }

    #[test]
    fn proof_serde_roundtrip() {
        let tree = MerkleTree::from_leaves(vec![leaf(1), leaf(2), leaf(3), leaf(4)]);
        let proof = tree.proof(2).unwrap();
        let json = serde_json::to_string(&proof).unwrap();
        let parsed: MerkleProof = serde_json::from_str(&json).unwrap();
        assert_eq!(proof, parsed);
        assert!(parsed.verify(&tree.root()).is_ok());
    }
}
