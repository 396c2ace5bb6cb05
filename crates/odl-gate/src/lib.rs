//! Record admission gate for the Optimistic Dispute Ledger.
//!
//! Every record proposal must pass through the gate before it can be written
//! to the slot ledger. The gate runs a configurable pipeline of stages
//! (validation, whitelist, signature) and produces a final admit/refuse
//! decision with a per-stage audit trail.
//!
//! # Quick Start
//!
//! ```rust
//! use odl_gate::{AdmissionGate, GateConfig, GateContext, RecordProposal, StaticWhitelist};
//! use odl_types::{Digest, PublisherId};
//!
//! let publisher = PublisherId::ephemeral();
//! let whitelist = StaticWhitelist::from_iter([publisher.clone()]);
//! let gate = AdmissionGate::with_default_stages(GateConfig::default());
//!
//! let proposal = RecordProposal::unattested(
//!     publisher,
//!     7,
//!     vec![vec![0xde, 0xad]],
//!     Digest::from_bytes(b"state root"),
//! );
//! let mut context = GateContext::new(&whitelist);
//! let result = gate.evaluate(&proposal, &mut context).unwrap();
//! assert!(result.is_admitted());
//! ```

pub mod config;
pub mod error;
pub mod gate;
pub mod stage;
pub mod stages;
pub mod whitelist;

// Re-exports for convenience.
pub use config::GateConfig;
pub use error::GateError;
pub use gate::{AdmissionDecision, AdmissionGate, GateResult};
pub use stage::{
    AdmissionStage, GateContext, RecordAttestation, RecordProposal, StageDecision, StageResult,
};
pub use stages::signature::SignatureStage;
pub use stages::validation::ValidationStage;
pub use stages::whitelist::WhitelistStage;
pub use whitelist::{PublisherWhitelist, StaticWhitelist};
