//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::evidence::DataSource;

/// azproof - Interactive evidence collection for Azure storage accounts.
#[derive(Debug, Parser)]
#[command(name = "azproof")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ./.azproof.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Azure CLI binary name or path
    #[arg(long, global = true, value_name = "PATH")]
    pub az_path: Option<String>,

    /// Show verbose output, including captured query output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Name of the selected command, for logging.
    pub fn command_name(&self) -> &'static str {
        match &self.command {
            Some(Commands::Collect(_)) | None => "collect",
            Some(Commands::Check(_)) => "check",
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Collect evidence into the proof document (default if no command specified)
    Collect(CollectArgs),

    /// Check that the Azure CLI is installed and logged in
    Check(CheckArgs),
}

/// Arguments for the `collect` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CollectArgs {
    /// Data source: 1/blob, 2/table or 3/database (skips the menu)
    #[arg(short, long)]
    pub source: Option<DataSource>,

    /// Azure Storage connection string
    #[arg(long, env = "AZURE_STORAGE_CONNECTION_STRING", hide_env_values = true)]
    pub connection_string: Option<String>,

    /// Blob container name
    #[arg(long)]
    pub container: Option<String>,

    /// Table name
    #[arg(long)]
    pub table: Option<String>,

    /// Evidence file path (default: proof.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Never prompt; answer from AZPROOF_PROMPT_* variables or fail
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Never prompt
    #[arg(long)]
    pub non_interactive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_command_defaults_to_collect() {
        let cli = Cli::try_parse_from(["azproof"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.command_name(), "collect");
    }

    #[test]
    fn collect_flags() {
        let cli = Cli::try_parse_from([
            "azproof",
            "collect",
            "--source",
            "table",
            "--table",
            "audit",
            "--output",
            "out.txt",
            "--non-interactive",
        ])
        .unwrap();

        let Some(Commands::Collect(args)) = cli.command else {
            panic!("expected collect");
        };
        assert_eq!(args.source, Some(DataSource::TableStorage));
        assert_eq!(args.table.as_deref(), Some("audit"));
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert!(args.non_interactive);
    }

    #[test]
    fn source_accepts_menu_number() {
        let cli = Cli::try_parse_from(["azproof", "collect", "-s", "1"]).unwrap();
        let Some(Commands::Collect(args)) = cli.command else {
            panic!("expected collect");
        };
        assert_eq!(args.source, Some(DataSource::BlobStorage));
    }

    #[test]
    fn invalid_source_rejected() {
        assert!(Cli::try_parse_from(["azproof", "collect", "--source", "queue"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["azproof", "check", "--az-path", "/opt/az", "--debug"])
            .unwrap();
        assert_eq!(cli.az_path.as_deref(), Some("/opt/az"));
        assert!(cli.debug);
        assert_eq!(cli.command_name(), "check");
    }
}
