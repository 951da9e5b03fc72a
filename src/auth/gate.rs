//! Session check and interactive login.

use crate::requirements::ToolDefinition;
use crate::shell::CommandInvoker;
use crate::ui::UserInterface;

/// Text the Azure CLI prints on stderr when no account is logged in.
pub const LOGIN_REQUIRED_MARKER: &str = "Please run 'az login' to setup account.";

/// Outcome of the authentication gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    /// A session already existed.
    AlreadyAuthenticated,
    /// The operator completed an interactive login during this run.
    LoggedIn,
    /// No session could be established.
    Failed {
        /// What went wrong.
        message: String,
    },
}

impl AuthStatus {
    /// Whether collection may proceed.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStatus::AlreadyAuthenticated | AuthStatus::LoggedIn)
    }
}

/// Ensures the external tool has an authenticated session.
///
/// Callers must already have confirmed the tool is available.
pub struct AuthenticationGate<'a> {
    tool: &'a ToolDefinition,
    invoker: &'a dyn CommandInvoker,
}

impl<'a> AuthenticationGate<'a> {
    /// Create a new gate.
    pub fn new(tool: &'a ToolDefinition, invoker: &'a dyn CommandInvoker) -> Self {
        Self { tool, invoker }
    }

    /// Ask the tool whether a session exists.
    ///
    /// `Err` carries the reason the status query itself could not run.
    pub fn has_session(&self) -> Result<bool, String> {
        let status = self.tool.invocation().args(["account", "show"]);
        let result = self.invoker.capture(&status).map_err(|e| e.to_string())?;

        let authenticated = result.success && !result.stderr.contains(LOGIN_REQUIRED_MARKER);
        tracing::debug!(
            "Account status exit {:?}, authenticated: {}",
            result.exit_code,
            authenticated
        );
        Ok(authenticated)
    }

    /// Ensure a session exists, running the interactive login if needed.
    pub fn ensure_authenticated(&self, ui: &mut dyn UserInterface) -> AuthStatus {
        match self.has_session() {
            Ok(true) => return AuthStatus::AlreadyAuthenticated,
            Ok(false) => {}
            Err(message) => return self.fail(ui, message),
        }

        ui.message(&format!(
            "You are not logged into {}. Please complete authentication in your browser...",
            self.tool.display_name
        ));

        // Login needs the terminal, so no spinner here.
        let login = self.tool.invocation().arg("login");
        match self.invoker.attach(&login) {
            Ok(result) if result.success => {
                ui.success("Login successful.");
                AuthStatus::LoggedIn
            }
            Ok(result) => self.fail(
                ui,
                format!(
                    "Command '{}' returned non-zero exit status {}.",
                    login,
                    result
                        .exit_code
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "unknown".to_string())
                ),
            ),
            Err(e) => self.fail(ui, e.to_string()),
        }
    }

    fn fail(&self, ui: &mut dyn UserInterface, message: String) -> AuthStatus {
        tracing::warn!("Authentication failed: {}", message);
        ui.error(&format!("Error during {} login: {}", self.tool.display_name, message));
        AuthStatus::Failed { message }
    }
}
