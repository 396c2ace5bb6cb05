use std::time::Duration;

use serde::{Deserialize, Serialize};
use odl_crypto::{Signature, VerifyingKey};
use odl_types::{Digest, PublisherId};

use crate::error::GateError;
use crate::whitelist::PublisherWhitelist;

// ---------------------------------------------------------------------------
// RecordProposal
// ---------------------------------------------------------------------------

/// A proposal to record one slot's checkpoint data, evaluated by the gate
/// pipeline before it may touch the ledger.
#[derive(Clone, Debug)]
pub struct RecordProposal {
    /// The publisher asking to record.
    pub sender: PublisherId,
    /// The slot being recorded.
    pub slot: u64,
    /// Decoded raw transaction payloads.
    pub transactions: Vec<Vec<u8>>,
    /// Claimed end-of-slot state root.
    pub state_root: Digest,
    /// Optional detached signature over the proposal's signing payload.
    pub attestation: Option<RecordAttestation>,
}

/// Detached Ed25519 attestation: the publisher's verifying key plus a
/// signature over [`RecordProposal::signing_payload`].
#[derive(Clone, Debug)]
pub struct RecordAttestation {
    pub verifying_key: VerifyingKey,
    pub signature: Signature,
}

impl RecordProposal {
    /// Create a proposal without an attestation.
    pub fn unattested(
        sender: PublisherId,
        slot: u64,
        transactions: Vec<Vec<u8>>,
        state_root: Digest,
    ) -> Self {
        Self {
            sender,
            slot,
            transactions,
            state_root,
            attestation: None,
        }
    }

    /// Canonical bytes an attestation signs: slot, root, then each
    /// transaction length-prefixed, in batch order.
    pub fn signing_payload(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&self.slot.to_le_bytes());
        buf.extend_from_slice(self.state_root.as_bytes());
        for tx in &self.transactions {
            buf.extend_from_slice(&(tx.len() as u64).to_le_bytes());
            buf.extend_from_slice(tx);
        }
        buf
    }
}

// ---------------------------------------------------------------------------
// StageDecision
// ---------------------------------------------------------------------------

/// The outcome of a single gate stage evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageDecision {
    /// The stage passed; proceed to the next stage.
    Pass,
    /// The stage failed; the proposal should be refused.
    Fail { reason: String },
}

impl StageDecision {
    /// Returns `true` if the decision is `Pass`.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns `true` if the decision is `Fail`.
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }
}

// ---------------------------------------------------------------------------
// StageResult
// ---------------------------------------------------------------------------

/// Recorded result from a completed stage evaluation.
#[derive(Clone, Debug)]
pub struct StageResult {
    /// Name of the stage that produced this result.
    pub stage_name: String,
    /// Whether the stage passed.
    pub passed: bool,
    /// Optional reason (populated on failure).
    pub reason: Option<String>,
    /// Wall-clock time the stage took to evaluate.
    pub elapsed: Duration,
}

// ---------------------------------------------------------------------------
// GateContext
// ---------------------------------------------------------------------------

/// Contextual information available to every gate stage.
///
/// The whitelist handle is injected by the caller; the gate never owns
/// whitelist state.
pub struct GateContext<'a> {
    /// The externally managed publisher whitelist.
    pub whitelist: &'a dyn PublisherWhitelist,
    /// Results from stages that have already run in this evaluation.
    pub previous_stages: Vec<StageResult>,
}

impl<'a> GateContext<'a> {
    /// Create a context over an injected whitelist handle.
    pub fn new(whitelist: &'a dyn PublisherWhitelist) -> Self {
        Self {
            whitelist,
            previous_stages: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// AdmissionStage trait
// ---------------------------------------------------------------------------

/// A single evaluation stage in the admission pipeline.
///
/// Stages are evaluated in order. Each stage receives the proposal and the
/// shared context, and returns a pass/fail decision.
///
/// The trait is object-safe and `Send + Sync` so stages can be stored in
/// a `Vec<Box<dyn AdmissionStage>>`.
pub trait AdmissionStage: Send + Sync {
    /// Human-readable name of this stage (e.g., "validation", "whitelist").
    fn name(&self) -> &str;

    /// Evaluate the proposal and return a decision.
    fn evaluate(
        &self,
        proposal: &RecordProposal,
        context: &GateContext,
    ) -> Result<StageDecision, GateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signing_payload_is_order_sensitive() {
        let sender = PublisherId::ephemeral();
        let root = Digest::from_bytes(b"root");
        let a = RecordProposal::unattested(sender.clone(), 1, vec![vec![1], vec![2]], root);
        let b = RecordProposal::unattested(sender, 1, vec![vec![2], vec![1]], root);
        assert_ne!(a.signing_payload(), b.signing_payload());
    }

    #[test]
    fn signing_payload_length_prefix_prevents_boundary_shift() {
        let sender = PublisherId::ephemeral();
        let root = Digest::from_bytes(b"root");
        let a = RecordProposal::unattested(sender.clone(), 1, vec![vec![1, 2]], root);
        let b = RecordProposal::unattested(sender, 1, vec![vec![1], vec![2]], root);
        assert_ne!(a.signing_payload(), b.signing_payload());
    }
}
