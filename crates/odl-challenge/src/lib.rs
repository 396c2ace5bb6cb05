//! Fraud challenge resolution for the Optimistic Dispute Ledger.
//!
//! This crate is the heart of ODL. Given a disputed slot range, it
//! determines whether the recorded state root was produced correctly from
//! the recorded transaction data:
//! - read the committed root for the end slot
//! - verify the challenger's Merkle proof against it
//! - deterministically replay the range's transactions
//! - recommit the disputed account and re-verify through the same proof path
//!
//! Resolution is read-only: accepting or rejecting a challenge never
//! mutates the ledger.

pub mod challenge;
pub mod error;
pub mod resolver;

pub use challenge::FraudChallenge;
pub use error::ChallengeError;
pub use resolver::{ChallengeOutcome, ChallengeResolver, ResolverConfig};
