//! Settings resolved from flags, config and defaults.

use std::path::Path;

use crate::cli::args::Cli;
use crate::config::ProofConfig;
use crate::evidence::{DataSource, EvidenceFile};
use crate::requirements::ToolDefinition;

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub tool: ToolDefinition,
    pub evidence: EvidenceFile,
    pub default_source: Option<DataSource>,
}

impl RunContext {
    /// Apply precedence: flag, then config file, then built-in default.
    pub fn resolve(cli: &Cli, output: Option<&Path>, config: &ProofConfig) -> Self {
        let mut tool = ToolDefinition::azure_cli();
        if let Some(binary) = cli.az_path.as_ref().or(config.azure_cli.as_ref()) {
            tool = tool.with_binary(binary);
        }
        if let Some(url) = &config.install_url {
            tool = tool.with_install_url(url);
        }

        let evidence = match output.or(config.output.as_deref()) {
            Some(path) => EvidenceFile::new(path),
            None => EvidenceFile::default(),
        };

        Self {
            tool,
            evidence,
            default_source: config.default_source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["azproof"]);
        let context = RunContext::resolve(&cli, None, &ProofConfig::default());

        assert_eq!(context.tool, ToolDefinition::azure_cli());
        assert_eq!(context.evidence.path(), Path::new("proof.txt"));
        assert_eq!(context.default_source, None);
    }

    #[test]
    fn config_overrides_defaults() {
        let cli = Cli::parse_from(["azproof"]);
        let config = ProofConfig {
            output: Some(PathBuf::from("cfg.txt")),
            azure_cli: Some("az-cfg".into()),
            install_url: Some("https://example.com".into()),
            default_source: Some(DataSource::TableStorage),
        };

        let context = RunContext::resolve(&cli, None, &config);

        assert_eq!(context.tool.binary, "az-cfg");
        assert_eq!(context.tool.install_url, "https://example.com");
        assert_eq!(context.evidence.path(), Path::new("cfg.txt"));
        assert_eq!(context.default_source, Some(DataSource::TableStorage));
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["azproof", "--az-path", "az-flag"]);
        let config = ProofConfig {
            output: Some(PathBuf::from("cfg.txt")),
            azure_cli: Some("az-cfg".into()),
            ..Default::default()
        };

        let context = RunContext::resolve(&cli, Some(Path::new("flag.txt")), &config);

        assert_eq!(context.tool.binary, "az-flag");
        assert_eq!(context.evidence.path(), Path::new("flag.txt"));
    }
}
