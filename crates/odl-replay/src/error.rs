/// Errors produced by replay execution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("execution engine failure: {0}")]
    Engine(String),

    #[error("execution environment mismatch: {0}")]
    Environment(String),

    #[error("resource limit exceeded: {0}")]
    ResourceLimit(String),
}
