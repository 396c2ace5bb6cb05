use serde::{Deserialize, Serialize};
use odl_types::Account;

use crate::error::ReplayError;

/// Execution-environment context forwarded verbatim to the engine.
///
/// Opaque to the dispute layer: sysvar accounts and program accounts are
/// whatever the secondary environment needs to deterministically re-execute
/// a batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionEnvironment {
    pub sysvar_accounts: Vec<Account>,
    pub programs: Vec<Account>,
}

impl ExecutionEnvironment {
    /// An environment with no sysvars and no programs.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Deterministic execution of a transaction batch against an account-state
/// snapshot.
///
/// All implementations must satisfy these invariants:
/// - Pure function: identical inputs always yield identical outputs.
/// - No hidden shared state; nothing outside the return value changes.
/// - Resource usage is bounded in proportion to the input size. An engine
///   that cannot honor a bound reports `ReplayError::ResourceLimit` rather
///   than running away.
/// - All failures are reported, never silently swallowed: an ambiguous
///   execution must surface as an error so the caller can treat it as
///   non-provable rather than as fraud.
pub trait Executor: Send + Sync {
    fn execute(
        &self,
        transactions: &[Vec<u8>],
        accounts: &[Account],
        environment: &ExecutionEnvironment,
    ) -> Result<Vec<Account>, ReplayError>;
}
