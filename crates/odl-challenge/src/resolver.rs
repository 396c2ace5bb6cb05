use tracing::debug;
use odl_crypto::account_commitment;
use odl_ledger::SlotReader;
use odl_replay::Executor;

use crate::challenge::FraudChallenge;
use crate::error::ChallengeError;

/// The resolver's verdict on a challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeOutcome {
    /// Fraud confirmed: the recorded state root does not match honest replay
    /// of the recorded transactions.
    Accepted,
    /// No fraud found: the recorded root is consistent with independently
    /// replayed state.
    Rejected,
}

/// Resolver policy knobs.
#[derive(Clone, Debug)]
pub struct ResolverConfig {
    /// Maximum number of slots a single challenge may span. Replay cost
    /// grows with the span, so oversized ranges are refused before any
    /// ledger read or engine work.
    pub max_slot_span: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_slot_span: 1024,
        }
    }
}

/// Resolves fraud challenges against a slot ledger.
///
/// The resolver borrows its collaborators: a read-only view of the ledger
/// and a deterministic replay engine. Resolution performs no blocking I/O
/// and mutates nothing; the outcome is a pure function of ledger contents
/// and engine determinism.
pub struct ChallengeResolver<'a> {
    ledger: &'a dyn SlotReader,
    executor: &'a dyn Executor,
    config: ResolverConfig,
}

impl<'a> ChallengeResolver<'a> {
    pub fn new(ledger: &'a dyn SlotReader, executor: &'a dyn Executor) -> Self {
        Self::with_config(ledger, executor, ResolverConfig::default())
    }

    pub fn with_config(
        ledger: &'a dyn SlotReader,
        executor: &'a dyn Executor,
        config: ResolverConfig,
    ) -> Self {
        Self {
            ledger,
            executor,
            config,
        }
    }

    /// Resolve a fraud challenge to an accept/reject verdict.
    ///
    /// The claimed proof is first verified against the root recorded for the
    /// end slot; the range's transactions are then replayed against the
    /// challenger's claimed pre-state, the disputed account's resulting
    /// state is recommitted, and the commitment is re-verified through the
    /// *same* sibling path. A recheck that still reduces to the recorded
    /// root means the published state matches the replay (challenge
    /// rejected); a recheck that no longer reduces to it proves the
    /// divergence the challenger asserted (challenge accepted).
    pub fn resolve(
        &self,
        challenge: &FraudChallenge,
    ) -> Result<ChallengeOutcome, ChallengeError> {
        if challenge.start_slot > challenge.end_slot {
            return Err(ChallengeError::InvalidRange {
                start: challenge.start_slot,
                end: challenge.end_slot,
            });
        }

        let span = (challenge.end_slot - challenge.start_slot).saturating_add(1);
        if span > self.config.max_slot_span {
            return Err(ChallengeError::RangeTooLarge {
                span,
                max: self.config.max_slot_span,
            });
        }

        // The recorded root the dispute is about. A missing end slot means
        // there is nothing to dispute.
        let end_root = self.ledger.state_root(challenge.end_slot)?;

        // The challenger's starting assertion must hold against the recorded
        // root before any replay work is spent on it.
        challenge.proof.verify(&end_root)?;

        // Gather every transaction in the range, inclusive of both ends.
        // Slots that were never recorded contribute zero transactions.
        let mut transactions = Vec::new();
        for slot in challenge.start_slot..=challenge.end_slot {
            transactions.extend(self.ledger.transaction_batch(slot)?);
        }

        debug!(
            start_slot = challenge.start_slot,
            end_slot = challenge.end_slot,
            transactions = transactions.len(),
            "replaying disputed range"
        );

        let replayed = self.executor.execute(
            &transactions,
            &challenge.account_states,
            &challenge.environment,
        )?;

        // Linear scan, first match wins. Replay outputs are bounded by the
        // span guard, so O(n) here is fine.
        let account = replayed
            .iter()
            .find(|account| account.key == challenge.disputed_key)
            .ok_or(ChallengeError::AccountNotFound {
                key: challenge.disputed_key,
            })?;

        // Recommit the independently derived state and re-verify it through
        // the identical path topology. Only the leaf changes.
        let recomputed = account_commitment(account);
        let recheck = challenge.proof.with_commitment(recomputed);

        let outcome = match recheck.verify(&end_root) {
            Ok(()) => ChallengeOutcome::Rejected,
            Err(_) => ChallengeOutcome::Accepted,
        };

        debug!(
            end_slot = challenge.end_slot,
            disputed_key = %challenge.disputed_key,
            ?outcome,
            "challenge resolved"
        );

        Ok(outcome)
    }
}
