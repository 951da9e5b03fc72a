//! azproof - Collect evidence that data exists in Azure Storage.
//!
//! azproof drives the Azure CLI on the operator's behalf: it makes sure the
//! CLI is installed and logged in, runs a blob or table listing, and
//! appends the result to a flat proof document (`proof.txt`).
//!
//! # Modules
//!
//! - [`auth`] - Session check and interactive login
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional YAML configuration
//! - [`error`] - Error types and result aliases
//! - [`evidence`] - Data sources, the evidence file, and the collector
//! - [`requirements`] - Tool availability checking and installation
//! - [`runner`] - Run orchestration
//! - [`secrets`] - Connection string masking
//! - [`shell`] - External command execution
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use azproof::evidence::{DataSource, EvidenceFile};
//! use azproof::runner::{PreAnswers, ProofRunner, RunOutcome};
//! use azproof::requirements::ToolDefinition;
//! use azproof::shell::MockInvoker;
//! use azproof::ui::MockUI;
//!
//! let temp = tempfile::TempDir::new().unwrap();
//! let tool = ToolDefinition::azure_cli();
//! let invoker = MockInvoker::new();
//! let mut ui = MockUI::new();
//!
//! let outcome = ProofRunner::new(&tool, &invoker, EvidenceFile::new(temp.path().join("proof.txt")))
//!     .with_answers(PreAnswers {
//!         source: Some(DataSource::GenericDatabase),
//!         ..Default::default()
//!     })
//!     .run(&mut ui)
//!     .unwrap();
//!
//! assert_eq!(outcome, RunOutcome::NotImplemented);
//! ```

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod evidence;
pub mod requirements;
pub mod runner;
pub mod secrets;
pub mod shell;
pub mod ui;

pub use error::{ProofError, Result};
