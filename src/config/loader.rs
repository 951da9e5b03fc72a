//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::ProofConfig;
use crate::error::{ProofError, Result};

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".azproof.yml";

/// Load configuration.
///
/// An explicit path must exist. Without one, `.azproof.yml` in `cwd` is
/// used when present, otherwise the defaults.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<ProofConfig> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    let discovered = discover(cwd);
    match discovered {
        Some(path) => load_config_file(&path),
        None => {
            tracing::debug!("No {} in {}", CONFIG_FILE_NAME, cwd.display());
            Ok(ProofConfig::default())
        }
    }
}

fn discover(cwd: &Path) -> Option<PathBuf> {
    let path = cwd.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<ProofConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProofError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ProofError::Io(e)
        }
    })?;

    tracing::debug!("Loaded config from {}", path.display());
    parse_config(&content, path)
}

/// Parse YAML content into a [`ProofConfig`].
///
/// An empty file is the default configuration.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProofConfig> {
    if content.trim().is_empty() {
        return Ok(ProofConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| ProofError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_discovered_config_is_default() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_config(None, temp.path()).unwrap(), ProofConfig::default());
    }

    #[test]
    fn discovers_config_in_cwd() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "azure_cli: az2").unwrap();

        let config = load_config(None, temp.path()).unwrap();
        assert_eq!(config.azure_cli.as_deref(), Some("az2"));
    }

    #[test]
    fn missing_explicit_config_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yml");

        let err = load_config(Some(&path), temp.path()).unwrap_err();
        assert!(matches!(err, ProofError::ConfigNotFound { .. }));
    }

    #[test]
    fn explicit_config_wins_over_discovered() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "azure_cli: local").unwrap();
        let explicit = temp.path().join("other.yml");
        fs::write(&explicit, "azure_cli: explicit").unwrap();

        let config = load_config(Some(&explicit), temp.path()).unwrap();
        assert_eq!(config.azure_cli.as_deref(), Some("explicit"));
    }

    #[test]
    fn parse_error_names_file() {
        let err = parse_config("bogus: true", Path::new("/x/.azproof.yml")).unwrap_err();
        assert!(matches!(err, ProofError::ConfigParseError { .. }));
        assert!(err.to_string().contains("/x/.azproof.yml"));
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(
            parse_config("\n", Path::new("c.yml")).unwrap(),
            ProofConfig::default()
        );
    }
}
