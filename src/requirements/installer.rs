//! Remediation when the external tool is missing.
//!
//! One install attempt with the platform's package manager, no retries.
//! A successful install ends the run with [`ToolStatus::RestartRequired`]
//! because the new binary is not on this process's PATH.

use crate::requirements::registry::ToolDefinition;
use crate::requirements::status::ToolStatus;
use crate::shell::{is_elevated, CommandInvoker, HostPlatform};
use crate::ui::UserInterface;

/// Host facts the installer depends on, injectable for tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerContext {
    /// Platform bucket deciding which package manager to use.
    pub platform: HostPlatform,
    /// Whether the process runs with administrator rights.
    pub elevated: bool,
}

impl InstallerContext {
    /// Detect the real host.
    pub fn detect() -> Self {
        Self {
            platform: HostPlatform::current(),
            elevated: is_elevated(),
        }
    }

    /// A context for an explicit platform.
    pub fn for_platform(platform: HostPlatform, elevated: bool) -> Self {
        Self { platform, elevated }
    }
}

/// Attempt to install the tool.
///
/// Never returns [`ToolStatus::Available`]: even after a successful install
/// the tool cannot be used until the operator restarts their shell.
pub fn remediate(
    tool: &ToolDefinition,
    ctx: &InstallerContext,
    invoker: &dyn CommandInvoker,
    ui: &mut dyn UserInterface,
) -> ToolStatus {
    let Some(recipe) = tool.install_recipe(&ctx.platform) else {
        let reason = format!(
            "Your OS ({}) is not directly supported for auto-install. Please install {} manually.",
            ctx.platform, tool.display_name
        );
        tracing::warn!("No install recipe for platform {}", ctx.platform);
        ui.error(&reason);
        ui.show_hint(&tool.manual_install_hint());
        return ToolStatus::Unavailable { reason };
    };

    match ctx.platform {
        HostPlatform::Windows => ui.message(&format!(
            "Installing {} on Windows. This requires admin rights and {}.",
            tool.display_name, recipe.manager
        )),
        _ => ui.message(&format!(
            "Installing {} via {} ({})...",
            tool.display_name, recipe.manager, ctx.platform
        )),
    }

    if recipe.requires_elevation && !ctx.elevated {
        ui.warning("This terminal is not elevated; the installer may ask for administrator approval.");
    }

    let invocation = recipe.invocation();
    let failure = match invoker.attach(&invocation) {
        Ok(result) if result.success => None,
        Ok(result) => Some(format!(
            "Command '{}' returned non-zero exit status {}.",
            invocation,
            result
                .exit_code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        )),
        Err(e) => Some(e.to_string()),
    };

    if let Some(detail) = failure {
        tracing::warn!("{} install failed: {}", recipe.manager, detail);
        ui.error(&format!("{} install failed: {}", recipe.manager, detail));
        ui.show_hint(&tool.manual_install_hint());
        return ToolStatus::Unavailable {
            reason: format!("{} install failed", recipe.manager),
        };
    }

    ui.success(&format!(
        "{} installed. Please restart your terminal and re-run azproof.",
        tool.display_name
    ));
    ToolStatus::RestartRequired {
        manager: recipe.manager.clone(),
    }
}
