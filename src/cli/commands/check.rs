//! Check command implementation.
//!
//! `azproof check` confirms the Azure CLI is installed and logged in
//! without touching the evidence file.

use crate::error::Result;
use crate::runner::{ProofRunner, RunOutcome};
use crate::shell::{CommandInvoker, SystemInvoker};
use crate::ui::UserInterface;

use super::context::RunContext;
use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    context: RunContext,
}

impl CheckCommand {
    pub fn new(context: RunContext) -> Self {
        Self { context }
    }

    /// Run against a specific invoker.
    pub fn run_with(&self, invoker: &dyn CommandInvoker, ui: &mut dyn UserInterface) -> RunOutcome {
        ui.show_header(&format!("{} readiness", self.context.tool.display_name));
        ProofRunner::new(&self.context.tool, invoker, self.context.evidence.clone()).check(ui)
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = self.run_with(&SystemInvoker::new(), ui);
        Ok(CommandResult::from(&outcome))
    }
}
