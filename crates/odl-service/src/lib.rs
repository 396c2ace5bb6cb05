//! High-level record/challenge interface for the Optimistic Dispute Ledger.
//!
//! `DisputeService` wires the admission gate, the slot ledger, and the
//! challenge resolver into the two operations the outside world consumes:
//! - record one slot's transaction data and state root (whitelisted
//!   publishers, hex-encoded payloads)
//! - submit a fraud challenge against a recorded root
//!
//! plus the read-only ledger accessors other modules are given.

pub mod error;
pub mod service;

pub use error::ServiceError;
pub use service::{ChallengeRequest, DisputeService, RecordRequest, ServiceConfig};
