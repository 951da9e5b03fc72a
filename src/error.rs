//! Error types for azproof operations.
//!
//! This module defines [`ProofError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Stage failures (tool missing, login failed, query failed) are *outcomes*,
//!   not errors. They are reported to the operator and carried in
//!   [`ToolStatus`](crate::requirements::ToolStatus),
//!   [`AuthStatus`](crate::auth::AuthStatus) and
//!   [`CollectionReport`](crate::evidence::CollectionReport).
//! - `ProofError` is for things the run cannot continue past: local I/O on
//!   the evidence file, broken configuration, prompts that cannot be answered.
//! - Use `anyhow::Error` (via `ProofError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for azproof operations.
#[derive(Debug, Error)]
pub enum ProofError {
    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The external program could not be found on PATH.
    #[error("'{tool}' command not found")]
    ToolNotFound { tool: String },

    /// An external program could not be spawned or waited on.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Writing to the evidence file failed.
    #[error("Failed to write evidence to {path}: {source}")]
    EvidenceWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A prompt has no answer in non-interactive mode.
    #[error("Cannot prompt for '{key}' in non-interactive mode (set {env_var})")]
    PromptUnavailable { key: String, env_var: String },

    /// Standard input ended before a prompt was answered.
    #[error("No answer for '{key}': standard input is closed")]
    PromptClosed { key: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for azproof operations.
pub type Result<T> = std::result::Result<T, ProofError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_closed_names_key() {
        let err = ProofError::PromptClosed {
            key: "container".into(),
        };
        assert_eq!(
            err.to_string(),
            "No answer for 'container': standard input is closed"
        );
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = ProofError::ConfigNotFound {
            path: PathBuf::from("/foo/azproof.yml"),
        };
        assert!(err.to_string().contains("/foo/azproof.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = ProofError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn tool_not_found_displays_tool() {
        let err = ProofError::ToolNotFound { tool: "az".into() };
        assert_eq!(err.to_string(), "'az' command not found");
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = ProofError::CommandFailed {
            command: "az login".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("az login"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn evidence_write_displays_path() {
        let err = ProofError::EvidenceWrite {
            path: PathBuf::from("proof.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("proof.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn prompt_unavailable_names_env_var() {
        let err = ProofError::PromptUnavailable {
            key: "source".into(),
            env_var: "AZPROOF_PROMPT_SOURCE".into(),
        };
        assert!(err.to_string().contains("AZPROOF_PROMPT_SOURCE"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ProofError = io_err.into();
        assert!(matches!(err, ProofError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: ProofError = anyhow::anyhow!("unexpected").into();
        assert!(err.to_string().contains("unexpected"));
    }
}
