use serde::{Deserialize, Serialize};

/// Configuration for the admission gate pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GateConfig {
    /// Whether every record proposal must carry a publisher attestation.
    pub require_signatures: bool,
    /// Maximum number of transactions accepted in one slot record.
    pub max_transactions_per_record: usize,
    /// When `true`, the gate runs in permissive mode: all built-in stages
    /// pass without checks. Intended for single-operator local deployments
    /// where the ledger and its publisher are the same party.
    pub permissive: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            require_signatures: false,
            max_transactions_per_record: 10_000,
            permissive: false,
        }
    }
}

impl GateConfig {
    /// A maximally permissive configuration for local single-operator use.
    pub fn permissive() -> Self {
        Self {
            permissive: true,
            ..Default::default()
        }
    }
}
