use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::GateConfig;
use crate::error::GateError;
use crate::stage::{AdmissionStage, GateContext, RecordProposal, StageDecision, StageResult};
use crate::stages::signature::SignatureStage;
use crate::stages::validation::ValidationStage;
use crate::stages::whitelist::WhitelistStage;

// ---------------------------------------------------------------------------
// GateResult
// ---------------------------------------------------------------------------

/// The final decision for a record proposal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdmissionDecision {
    /// The proposal may be written to the ledger.
    Admitted,
    /// The proposal must not touch the ledger.
    Refused { reason: String },
}

impl AdmissionDecision {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted)
    }
}

/// The outcome of running a proposal through the full gate pipeline.
#[derive(Clone, Debug)]
pub struct GateResult {
    /// The final decision: admitted or refused.
    pub decision: AdmissionDecision,
    /// Per-stage results in evaluation order.
    pub stage_results: Vec<StageResult>,
    /// Total wall-clock time for the pipeline evaluation.
    pub elapsed: Duration,
}

impl GateResult {
    /// Returns `true` if the proposal was admitted.
    pub fn is_admitted(&self) -> bool {
        self.decision.is_admitted()
    }

    /// Name of the stage that refused the proposal, if any.
    pub fn refusing_stage(&self) -> Option<&str> {
        self.stage_results
            .iter()
            .find(|result| !result.passed)
            .map(|result| result.stage_name.as_str())
    }
}

// ---------------------------------------------------------------------------
// AdmissionGate
// ---------------------------------------------------------------------------

/// The admission gate: a pipeline of stages that every record proposal must
/// pass before being written to the slot ledger.
///
/// The gate is the ONLY path to the ledger write boundary -- no bypass.
pub struct AdmissionGate {
    stages: Vec<Box<dyn AdmissionStage>>,
    config: GateConfig,
}

impl AdmissionGate {
    /// Create a new gate with the given configuration.
    ///
    /// Starts with an empty pipeline. Use [`Self::add_stage`] to add stages,
    /// or [`Self::with_default_stages`] for the standard pipeline.
    pub fn new(config: GateConfig) -> Self {
        Self {
            stages: Vec::new(),
            config,
        }
    }

    /// Create a gate with the default stage pipeline:
    /// Validation -> Whitelist -> Signature
    pub fn with_default_stages(config: GateConfig) -> Self {
        let mut gate = Self::new(config.clone());
        gate.add_stage(Box::new(ValidationStage::new(
            config.max_transactions_per_record,
        )));
        gate.add_stage(Box::new(WhitelistStage));
        gate.add_stage(Box::new(SignatureStage::new(config.require_signatures)));
        gate
    }

    /// Append a stage to the end of the pipeline.
    pub fn add_stage(&mut self, stage: Box<dyn AdmissionStage>) {
        self.stages.push(stage);
    }

    /// The current configuration.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Number of stages in the pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Evaluate a proposal through the full pipeline.
    ///
    /// The pipeline is **fail-fast**: the first stage that fails stops
    /// evaluation and produces a `Refused` decision. If all stages pass
    /// the decision is `Admitted`.
    pub fn evaluate(
        &self,
        proposal: &RecordProposal,
        context: &mut GateContext,
    ) -> Result<GateResult, GateError> {
        let pipeline_start = Instant::now();

        // In permissive mode, skip all stage evaluations and admit.
        if self.config.permissive {
            return Ok(GateResult {
                decision: AdmissionDecision::Admitted,
                stage_results: Vec::new(),
                elapsed: pipeline_start.elapsed(),
            });
        }

        let mut stage_results = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            let stage_start = Instant::now();
            let decision = stage.evaluate(proposal, context)?;
            let elapsed = stage_start.elapsed();

            let (passed, reason) = match &decision {
                StageDecision::Pass => (true, None),
                StageDecision::Fail { reason } => (false, Some(reason.clone())),
            };

            let result = StageResult {
                stage_name: stage.name().to_string(),
                passed,
                reason,
                elapsed,
            };

            stage_results.push(result.clone());
            context.previous_stages.push(result);

            // Fail-fast: stop on first failure.
            if let StageDecision::Fail { reason } = decision {
                debug!(
                    slot = proposal.slot,
                    sender = %proposal.sender,
                    stage = stage.name(),
                    %reason,
                    "record proposal refused"
                );
                return Ok(GateResult {
                    decision: AdmissionDecision::Refused { reason },
                    stage_results,
                    elapsed: pipeline_start.elapsed(),
                });
            }
        }

        Ok(GateResult {
            decision: AdmissionDecision::Admitted,
            stage_results,
            elapsed: pipeline_start.elapsed(),
        })
    }
}
