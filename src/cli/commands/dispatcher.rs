//! Command dispatching.

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::config::load_config;
use crate::error::Result;
use crate::evidence::EvidenceFile;
use crate::runner::RunOutcome;
use crate::ui::UserInterface;

use super::check::CheckCommand;
use super::collect::CollectCommand;
use super::context::RunContext;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

impl From<&RunOutcome> for CommandResult {
    fn from(outcome: &RunOutcome) -> Self {
        match outcome.exit_code() {
            0 => Self::success(),
            code => Self::failure(code),
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher rooted at `working_dir` (where
    /// `.azproof.yml` is looked up).
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Load configuration, then route the subcommand.
    ///
    /// A collection that fails to load its configuration still removes the
    /// previous evidence file at the flag or default path, so a stale
    /// document never survives a failed run.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(cli.config.as_deref(), &self.working_dir) {
            Ok(config) => config,
            Err(e) => {
                if let Some(evidence) = self.fallback_evidence(cli) {
                    evidence.reset()?;
                }
                return Err(e);
            }
        };

        match &cli.command {
            Some(Commands::Collect(args)) => {
                let context = RunContext::resolve(cli, args.output.as_deref(), &config);
                CollectCommand::new(context, args.clone()).execute(ui)
            }
            Some(Commands::Check(_)) => {
                let context = RunContext::resolve(cli, None, &config);
                CheckCommand::new(context).execute(ui)
            }
            None => {
                let context = RunContext::resolve(cli, None, &config);
                CollectCommand::new(context, Default::default()).execute(ui)
            }
        }
    }

    /// Evidence file a collection would use without any configuration.
    fn fallback_evidence(&self, cli: &Cli) -> Option<EvidenceFile> {
        let output = match &cli.command {
            Some(Commands::Collect(args)) => args.output.clone(),
            Some(Commands::Check(_)) => return None,
            None => None,
        };
        let file = match output {
            Some(path) => EvidenceFile::new(path),
            None => EvidenceFile::default(),
        };
        Some(EvidenceFile::new(self.working_dir.join(file.path())))
    }
}
