use crate::error::GateError;
use crate::stage::{AdmissionStage, GateContext, RecordProposal, StageDecision};

/// Publisher authorization stage.
///
/// Checks the proposal's sender against the injected whitelist. The lookup
/// is pure; whitelist membership is managed outside the gate.
pub struct WhitelistStage;

impl AdmissionStage for WhitelistStage {
    fn name(&self) -> &str {
        "whitelist"
    }

    fn evaluate(
        &self,
        proposal: &RecordProposal,
        context: &GateContext,
    ) -> Result<StageDecision, GateError> {
        if !context.whitelist.is_whitelisted(&proposal.sender) {
            return Ok(StageDecision::Fail {
                reason: format!(
                    "publisher {} is not whitelisted to record checkpoint data",
                    proposal.sender
                ),
            });
        }

        Ok(StageDecision::Pass)
    }
}
