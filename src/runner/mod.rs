//! Evidence run orchestration.
//!
//! - [`workflow`] - The run state machine and its outcomes
//! - [`prompts`] - Menu and parameter gathering

pub mod prompts;
pub mod workflow;

pub use prompts::{gather_parameters, select_source, PreAnswers, SOURCE_KEY};
pub use workflow::{ProofRunner, RunOutcome, RunStage};
