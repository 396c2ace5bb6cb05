use crate::error::GateError;
use crate::stage::{AdmissionStage, GateContext, RecordProposal, StageDecision};

/// Publisher attestation stage.
///
/// When an attestation is present, the verifying key must derive to the
/// proposal's sender and the signature must cover the proposal's signing
/// payload. Absence of an attestation only fails when the gate is
/// configured to require one.
pub struct SignatureStage {
    require_signatures: bool,
}

impl SignatureStage {
    pub fn new(require_signatures: bool) -> Self {
        Self { require_signatures }
    }
}

impl AdmissionStage for SignatureStage {
    fn name(&self) -> &str {
        "signature"
    }

    fn evaluate(
        &self,
        proposal: &RecordProposal,
        _context: &GateContext,
    ) -> Result<StageDecision, GateError> {
        let Some(attestation) = &proposal.attestation else {
            if self.require_signatures {
                return Ok(StageDecision::Fail {
                    reason: "record attestation is required but missing".into(),
                });
            }
            return Ok(StageDecision::Pass);
        };

        if attestation.verifying_key.to_publisher_id() != proposal.sender {
            return Ok(StageDecision::Fail {
                reason: "attestation key does not belong to the claimed sender".into(),
            });
        }

        if attestation
            .verifying_key
            .verify(&proposal.signing_payload(), &attestation.signature)
            .is_err()
        {
            return Ok(StageDecision::Fail {
                reason: "attestation signature does not cover the record payload".into(),
            });
        }

        Ok(StageDecision::Pass)
    }
}
