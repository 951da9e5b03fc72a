//! Collect command implementation.
//!
//! `azproof collect` (also the default) runs a full evidence collection.

use crate::cli::args::CollectArgs;
use crate::error::Result;
use crate::runner::{PreAnswers, ProofRunner, RunOutcome};
use crate::shell::{CommandInvoker, SystemInvoker};
use crate::ui::UserInterface;

use super::context::RunContext;
use super::dispatcher::{Command, CommandResult};

/// The collect command implementation.
pub struct CollectCommand {
    context: RunContext,
    args: CollectArgs,
}

impl CollectCommand {
    pub fn new(context: RunContext, args: CollectArgs) -> Self {
        Self { context, args }
    }

    /// Prompt answers supplied on the command line or by config.
    pub fn pre_answers(&self) -> PreAnswers {
        PreAnswers {
            source: self.args.source.or(self.context.default_source),
            connection_string: self.args.connection_string.clone(),
            container: self.args.container.clone(),
            table: self.args.table.clone(),
        }
    }

    /// Run against a specific invoker.
    pub fn run_with(
        &self,
        invoker: &dyn CommandInvoker,
        ui: &mut dyn UserInterface,
    ) -> Result<RunOutcome> {
        tracing::debug!("Collecting with {:?}", self.pre_answers());
        ProofRunner::new(&self.context.tool, invoker, self.context.evidence.clone())
            .with_answers(self.pre_answers())
            .run(ui)
    }
}

impl Command for CollectCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = self.run_with(&SystemInvoker::new(), ui)?;
        Ok(CommandResult::from(&outcome))
    }
}
