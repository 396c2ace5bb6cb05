use tracing::info;
use odl_challenge::{ChallengeOutcome, ChallengeResolver, FraudChallenge, ResolverConfig};
use odl_crypto::MerkleProof;
use odl_gate::{
    AdmissionDecision, AdmissionGate, GateConfig, GateContext, PublisherWhitelist,
    RecordAttestation, RecordProposal,
};
use odl_ledger::{LedgerError, SlotReader, SlotWriter};
use odl_replay::{ExecutionEnvironment, Executor};
use odl_types::{Account, AccountKey, Digest, PublisherId};

use crate::error::ServiceError;

/// Configuration for the dispute service.
#[derive(Clone, Debug, Default)]
pub struct ServiceConfig {
    pub gate: GateConfig,
    pub resolver: ResolverConfig,
}

/// A request to record one slot's checkpoint data.
///
/// Transactions and the state root arrive hex-encoded, as the host ledger
/// delivers them. Decoding failures abort the whole record; no partial
/// write is ever observable.
#[derive(Clone, Debug)]
pub struct RecordRequest {
    pub sender: PublisherId,
    pub slot: u64,
    pub transactions: Vec<String>,
    pub state_root: String,
    pub attestation: Option<RecordAttestation>,
}

/// A request to dispute a recorded state root.
#[derive(Clone, Debug)]
pub struct ChallengeRequest {
    pub start_slot: u64,
    pub end_slot: u64,
    pub disputed_key: AccountKey,
    pub proof: MerkleProof,
    pub account_states: Vec<Account>,
    pub environment: ExecutionEnvironment,
}

/// The dispute layer's outward-facing API.
///
/// Collaborators are injected once at construction and shared by reference
/// into every operation: the slot ledger, the publisher whitelist, and the
/// replay engine each live exactly as long as the service handle.
pub struct DisputeService<L, W, X> {
    ledger: L,
    whitelist: W,
    executor: X,
    gate: AdmissionGate,
    config: ServiceConfig,
}

impl<L, W, X> DisputeService<L, W, X>
where
    L: SlotReader + SlotWriter,
    W: PublisherWhitelist,
    X: Executor,
{
    /// Create a service over injected collaborators.
    pub fn new(ledger: L, whitelist: W, executor: X, config: ServiceConfig) -> Self {
        let gate = AdmissionGate::with_default_stages(config.gate.clone());
        Self {
            ledger,
            whitelist,
            executor,
            gate,
            config,
        }
    }

    /// Record one slot's transaction data and state root.
    ///
    /// Hex payloads are decoded up front, the proposal runs the admission
    /// gate, and only then is the ledger written. Each step fails the whole
    /// request: the ledger is never touched by a refused or malformed
    /// record.
    pub fn record_transaction_data(&self, request: RecordRequest) -> Result<(), ServiceError> {
        let mut transactions = Vec::with_capacity(request.transactions.len());
        for tx in &request.transactions {
            let decoded = hex::decode(tx).map_err(|e| ServiceError::Decode(e.to_string()))?;
            transactions.push(decoded);
        }
        let state_root = Digest::from_hex(&request.state_root)
            .map_err(|e| ServiceError::Decode(e.to_string()))?;

        let proposal = RecordProposal {
            sender: request.sender.clone(),
            slot: request.slot,
            transactions,
            state_root,
            attestation: request.attestation,
        };

        let mut context = GateContext::new(&self.whitelist);
        let result = self
            .gate
            .evaluate(&proposal, &mut context)
            .map_err(|e| ServiceError::InvalidRecord(e.to_string()))?;

        if let AdmissionDecision::Refused { reason } = &result.decision {
            return Err(match result.refusing_stage() {
                Some("whitelist") => ServiceError::Unauthorized(request.sender),
                _ => ServiceError::InvalidRecord(reason.clone()),
            });
        }

        self.ledger.record_slot(
            proposal.slot,
            proposal.sender,
            proposal.transactions,
            proposal.state_root,
        )?;

        info!(
            slot = request.slot,
            sender = %request.sender,
            transactions = request.transactions.len(),
            "checkpoint recorded"
        );

        Ok(())
    }

    /// Submit a fraud challenge against a recorded state root.
    pub fn submit_fraud_challenge(
        &self,
        request: ChallengeRequest,
    ) -> Result<ChallengeOutcome, ServiceError> {
        let challenge = FraudChallenge {
            start_slot: request.start_slot,
            end_slot: request.end_slot,
            disputed_key: request.disputed_key,
            proof: request.proof,
            account_states: request.account_states,
            environment: request.environment,
        };

        let resolver = ChallengeResolver::with_config(
            &self.ledger,
            &self.executor,
            self.config.resolver.clone(),
        );
        let outcome = resolver.resolve(&challenge)?;

        info!(
            start_slot = request.start_slot,
            end_slot = request.end_slot,
            disputed_key = %request.disputed_key,
            ?outcome,
            "fraud challenge resolved"
        );

        Ok(outcome)
    }

    // ---- Read accessors exposed to other modules ----

    /// The committed state root for a slot.
    pub fn state_root(&self, slot: u64) -> Result<Digest, LedgerError> {
        self.ledger.state_root(slot)
    }

    /// The publisher who recorded a slot, if any.
    pub fn sender(&self, slot: u64) -> Result<Option<PublisherId>, LedgerError> {
        self.ledger.sender(slot)
    }

    /// The transaction batch for a slot; empty if the slot was never
    /// recorded.
    pub fn transaction_batch(&self, slot: u64) -> Result<Vec<Vec<u8>>, LedgerError> {
        self.ledger.transaction_batch(slot)
    }
}
