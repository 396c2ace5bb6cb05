use crate::error::GateError;
use crate::stage::{AdmissionStage, GateContext, RecordProposal, StageDecision};

/// Structural validation stage.
///
/// Checks that the proposal is well-formed before any authorization work:
/// a non-null state root, a bounded transaction batch, and no empty
/// transaction entries. An empty batch is legal; a checkpoint interval can
/// contain no transactions.
pub struct ValidationStage {
    max_transactions: usize,
}

impl ValidationStage {
    pub fn new(max_transactions: usize) -> Self {
        Self { max_transactions }
    }
}

impl AdmissionStage for ValidationStage {
    fn name(&self) -> &str {
        "validation"
    }

    fn evaluate(
        &self,
        proposal: &RecordProposal,
        _context: &GateContext,
    ) -> Result<StageDecision, GateError> {
        if proposal.state_root.is_null() {
            return Ok(StageDecision::Fail {
                reason: "state root must not be null".into(),
            });
        }

        if proposal.transactions.len() > self.max_transactions {
            return Ok(StageDecision::Fail {
                reason: format!(
                    "batch of {} transactions exceeds the limit of {}",
                    proposal.transactions.len(),
                    self.max_transactions
                ),
            });
        }

        for (i, tx) in proposal.transactions.iter().enumerate() {
            if tx.is_empty() {
                return Ok(StageDecision::Fail {
                    reason: format!("transaction at index {i} is empty"),
                });
            }
        }

        Ok(StageDecision::Pass)
    }
}
