//! Foundation types for the Optimistic Dispute Ledger (ODL).
//!
//! This crate provides the identity and commitment types used throughout the
//! ODL system. Every other ODL crate depends on `odl-types`.
//!
//! # Key Types
//!
//! - [`Digest`] — 32-byte BLAKE3 commitment value (state roots, Merkle nodes)
//! - [`AccountKey`] — public-key identifier of the secondary execution environment
//! - [`Account`] — claimed or replayed account state
//! - [`PublisherId`] — identity of a whitelisted checkpoint publisher

pub mod account;
pub mod digest;
pub mod error;
pub mod publisher;

pub use account::{Account, AccountKey};
pub use digest::Digest;
pub use error::TypeError;
pub use publisher::{PublisherId, PublisherMaterial};
