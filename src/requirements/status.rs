//! Tool availability status.

/// The result of ensuring the external tool is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// The version probe succeeded.
    Available,

    /// The tool was just installed. It is not on this process's PATH yet,
    /// so the operator must restart the terminal and re-run.
    RestartRequired {
        /// Package manager that performed the install (e.g., "Homebrew").
        manager: String,
    },

    /// The tool is missing and could not be installed.
    Unavailable {
        /// Why remediation did not happen or did not work.
        reason: String,
    },
}

impl ToolStatus {
    /// Whether later stages may run.
    pub fn is_available(&self) -> bool {
        matches!(self, ToolStatus::Available)
    }

    /// Whether the run must stop so the operator can restart.
    pub fn requires_restart(&self) -> bool {
        matches!(self, ToolStatus::RestartRequired { .. })
    }
}
