//! Replay engine boundary for the Optimistic Dispute Ledger.
//!
//! The dispute protocol never interprets transactions itself; it hands them
//! to an [`Executor`] and compares commitments over the result. This crate
//! defines that boundary and ships deterministic test executors so the
//! resolver can be exercised without a real execution engine.

pub mod error;
pub mod executor;
pub mod scripted;

pub use error::ReplayError;
pub use executor::{ExecutionEnvironment, Executor};
pub use scripted::{PassthroughExecutor, ScriptedExecutor};
