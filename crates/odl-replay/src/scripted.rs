use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use odl_types::Account;

use crate::error::ReplayError;
use crate::executor::{ExecutionEnvironment, Executor};

/// Executor that returns the supplied account states unchanged.
///
/// Models an engine whose batch has no net effect on the disputed accounts.
/// Every call's transaction batch is captured so tests can assert exactly
/// which transactions reached the engine.
#[derive(Default)]
pub struct PassthroughExecutor {
    captured: Mutex<Vec<Vec<Vec<u8>>>>,
}

impl PassthroughExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transaction batches received so far, in call order.
    pub fn captured_batches(&self) -> Vec<Vec<Vec<u8>>> {
        self.captured.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Executor for PassthroughExecutor {
    fn execute(
        &self,
        transactions: &[Vec<u8>],
        accounts: &[Account],
        _environment: &ExecutionEnvironment,
    ) -> Result<Vec<Account>, ReplayError> {
        if let Ok(mut captured) = self.captured.lock() {
            captured.push(transactions.to_vec());
        }
        Ok(accounts.to_vec())
    }
}

enum Script {
    Return(Vec<Account>),
    Fail(ReplayError),
}

/// Executor with a scripted response, for resolver tests.
///
/// Returns a fixed output set or a fixed error on every call, and counts
/// invocations so tests can prove the engine was (or was not) reached.
pub struct ScriptedExecutor {
    script: Script,
    calls: AtomicU64,
}

impl ScriptedExecutor {
    /// An executor that always returns the given resulting accounts.
    pub fn returning(accounts: Vec<Account>) -> Self {
        Self {
            script: Script::Return(accounts),
            calls: AtomicU64::new(0),
        }
    }

    /// An executor that always fails with the given error.
    pub fn failing(error: ReplayError) -> Self {
        Self {
            script: Script::Fail(error),
            calls: AtomicU64::new(0),
        }
    }

    /// Number of times `execute` has been invoked.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Executor for ScriptedExecutor {
    fn execute(
        &self,
        _transactions: &[Vec<u8>],
        _accounts: &[Account],
        _environment: &ExecutionEnvironment,
    ) -> Result<Vec<Account>, ReplayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Return(accounts) => Ok(accounts.clone()),
            Script::Fail(error) => Err(error.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use odl_types::AccountKey;

    use super::*;

    fn account(seed: u8, balance: u64) -> Account {
        Account::with_balance(AccountKey::new([seed; 32]), balance)
    }

    #[test]
    fn passthrough_returns_inputs_unchanged() {
        let executor = PassthroughExecutor::new();
        let accounts = vec![account(1, 10), account(2, 20)];

        let result = executor
            .execute(&[vec![0xaa]], &accounts, &ExecutionEnvironment::empty())
            .unwrap();
        assert_eq!(result, accounts);
    }

    #[test]
    fn passthrough_captures_batches_in_order() {
        let executor = PassthroughExecutor::new();
        let env = ExecutionEnvironment::empty();

        executor.execute(&[vec![1]], &[], &env).unwrap();
        executor.execute(&[vec![2], vec![3]], &[], &env).unwrap();

        let captured = executor.captured_batches();
        assert_eq!(captured, vec![vec![vec![1]], vec![vec![2], vec![3]]]);
    }

    #[test]
    fn passthrough_is_deterministic() {
        let executor = PassthroughExecutor::new();
        let accounts = vec![account(1, 5)];
        let env = ExecutionEnvironment::empty();

        let first = executor.execute(&[vec![9]], &accounts, &env).unwrap();
        let second = executor.execute(&[vec![9]], &accounts, &env).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn scripted_returns_fixed_output() {
        let output = vec![account(7, 700)];
        let executor = ScriptedExecutor::returning(output.clone());

        let result = executor
            .execute(&[], &[account(1, 1)], &ExecutionEnvironment::empty())
            .unwrap();
        assert_eq!(result, output);
        assert_eq!(executor.calls(), 1);
    }

    #[test]
    fn scripted_failure_propagates() {
        let executor = ScriptedExecutor::failing(ReplayError::Engine("vm trap".into()));

        let error = executor
            .execute(&[], &[], &ExecutionEnvironment::empty())
            .unwrap_err();
        assert_eq!(error, ReplayError::Engine("vm trap".into()));
        assert_eq!(executor.calls(), 1);
    }
}
