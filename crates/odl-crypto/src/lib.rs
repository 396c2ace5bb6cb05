//! Cryptographic primitives for the Optimistic Dispute Ledger.
//!
//! Provides domain-separated BLAKE3 hashing, canonical account commitments,
//! binary Merkle trees with inclusion proofs verified against an external
//! root, and Ed25519 publisher signing.
//!
//! All crypto operations wrap established libraries — no custom cryptography.

pub mod account;
pub mod hasher;
pub mod merkle;
pub mod signer;

pub use account::account_commitment;
pub use hasher::ContentHasher;
pub use merkle::{MerkleProof, MerkleTree, ProofError, Side};
pub use signer::{Signature, SignatureError, SigningKey, VerifyingKey};
