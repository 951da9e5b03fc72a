//! YAML configuration schema.

use serde::Deserialize;
use std::path::PathBuf;

use crate::evidence::DataSource;

/// Contents of `.azproof.yml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProofConfig {
    /// Evidence file path.
    pub output: Option<PathBuf>,

    /// Azure CLI binary name or path.
    pub azure_cli: Option<String>,

    /// Manual install guidance URL.
    pub install_url: Option<String>,

    /// Menu answer used instead of prompting: `blob`, `table`, `database`
    /// or a quoted menu number.
    pub default_source: Option<DataSource>,
}
