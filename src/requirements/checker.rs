//! Tool availability checking.
//!
//! The `ToolAvailabilityChecker` runs the tool's version probe and hands
//! off to the installer when the probe fails.

use crate::requirements::installer::{remediate, InstallerContext};
use crate::requirements::registry::ToolDefinition;
use crate::requirements::status::ToolStatus;
use crate::shell::CommandInvoker;
use crate::ui::UserInterface;

/// Checks whether the external tool can be run, installing it if not.
pub struct ToolAvailabilityChecker<'a> {
    tool: &'a ToolDefinition,
    invoker: &'a dyn CommandInvoker,
    ctx: InstallerContext,
}

impl<'a> ToolAvailabilityChecker<'a> {
    /// Create a new checker.
    pub fn new(
        tool: &'a ToolDefinition,
        invoker: &'a dyn CommandInvoker,
        ctx: InstallerContext,
    ) -> Self {
        Self { tool, invoker, ctx }
    }

    /// Run the version probe.
    ///
    /// A missing binary and a non-zero exit both count as unavailable.
    pub fn probe(&self) -> bool {
        match self.invoker.capture(&self.tool.version_probe()) {
            Ok(result) => {
                if !result.success {
                    tracing::debug!(
                        "{} version probe exited with {:?}",
                        self.tool.binary,
                        result.exit_code
                    );
                }
                result.success
            }
            Err(e) => {
                tracing::debug!("{} version probe failed: {}", self.tool.binary, e);
                false
            }
        }
    }

    /// Ensure the tool is available, attempting remediation if it is not.
    pub fn ensure_available(&self, ui: &mut dyn UserInterface) -> ToolStatus {
        if self.probe() {
            ui.success(&format!("{} is installed.", self.tool.display_name));
            return ToolStatus::Available;
        }

        ui.warning(&format!(
            "{} is not installed. Attempting installation...",
            self.tool.display_name
        ));
        remediate(self.tool, &self.ctx, self.invoker, ui)
    }
}
