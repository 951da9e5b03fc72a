//! External tool definition.
//!
//! Describes the one tool this program orchestrates: how to probe it, and
//! how to install it on each supported platform.

use crate::shell::{HostPlatform, Invocation};

/// Where operators are sent when automatic installation is not possible.
pub const MANUAL_INSTALL_URL: &str = "https://docs.microsoft.com/cli/azure/install-azure-cli";

/// A package-manager command that installs the tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRecipe {
    /// Human-readable package manager name (e.g., "Homebrew").
    pub manager: String,
    /// Package manager binary.
    pub program: String,
    /// Arguments to the package manager.
    pub args: Vec<String>,
    /// Whether the install needs an elevated (administrator) session.
    pub requires_elevation: bool,
}

impl InstallRecipe {
    /// Build the invocation for this recipe.
    pub fn invocation(&self) -> Invocation {
        Invocation::new(&self.program).args(&self.args)
    }
}

/// Definition of the external CLI tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDefinition {
    /// Binary name or path used for every invocation.
    pub binary: String,
    /// Name shown to the operator.
    pub display_name: String,
    /// Arguments for the availability probe.
    pub version_args: Vec<String>,
    /// Manual install guidance URL.
    pub install_url: String,
    /// Install recipe on macOS.
    pub macos_install: InstallRecipe,
    /// Install recipe on Windows.
    pub windows_install: InstallRecipe,
}

impl ToolDefinition {
    /// The Azure CLI.
    pub fn azure_cli() -> Self {
        Self {
            binary: "az".to_string(),
            display_name: "Azure CLI".to_string(),
            version_args: vec!["--version".to_string()],
            install_url: MANUAL_INSTALL_URL.to_string(),
            macos_install: InstallRecipe {
                manager: "Homebrew".to_string(),
                program: "brew".to_string(),
                args: vec!["install".to_string(), "azure-cli".to_string()],
                requires_elevation: false,
            },
            windows_install: InstallRecipe {
                manager: "winget".to_string(),
                program: "winget".to_string(),
                args: vec!["install".to_string(), "Microsoft.AzureCLI".to_string()],
                requires_elevation: true,
            },
        }
    }

    /// Override the binary (e.g., an absolute path to `az`).
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Override the manual install guidance URL.
    pub fn with_install_url(mut self, url: impl Into<String>) -> Self {
        self.install_url = url.into();
        self
    }

    /// Start an invocation of the tool binary.
    pub fn invocation(&self) -> Invocation {
        Invocation::new(&self.binary)
    }

    /// The availability probe.
    pub fn version_probe(&self) -> Invocation {
        self.invocation().args(&self.version_args)
    }

    /// Install recipe for a platform, if automatic install is supported there.
    pub fn install_recipe(&self, platform: &HostPlatform) -> Option<&InstallRecipe> {
        match platform {
            HostPlatform::MacOS => Some(&self.macos_install),
            HostPlatform::Windows => Some(&self.windows_install),
            HostPlatform::Unsupported(_) => None,
        }
    }

    /// Operator guidance for installing manually.
    pub fn manual_install_hint(&self) -> String {
        format!(
            "Please manually install {} from {}",
            self.display_name, self.install_url
        )
    }
}

impl Default for ToolDefinition {
    fn default() -> Self {
        Self::azure_cli()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn azure_cli_probe_is_version_flag() {
        let tool = ToolDefinition::azure_cli();
        let probe = tool.version_probe();
        assert_eq!(probe.program(), "az");
        assert_eq!(probe.arg_list(), ["--version"]);
    }

    #[test]
    fn macos_installs_with_brew() {
        let tool = ToolDefinition::azure_cli();
        let recipe = tool.install_recipe(&HostPlatform::MacOS).unwrap();
        assert_eq!(recipe.invocation().to_string(), "brew install azure-cli");
        assert!(!recipe.requires_elevation);
    }

    #[test]
    fn windows_installs_with_winget_elevated() {
        let tool = ToolDefinition::azure_cli();
        let recipe = tool.install_recipe(&HostPlatform::Windows).unwrap();
        assert_eq!(
            recipe.invocation().to_string(),
            "winget install Microsoft.AzureCLI"
        );
        assert!(recipe.requires_elevation);
    }

    #[test]
    fn unsupported_platform_has_no_recipe() {
        let tool = ToolDefinition::azure_cli();
        assert!(tool
            .install_recipe(&HostPlatform::Unsupported("linux".into()))
            .is_none());
    }

    #[test]
    fn binary_override_applies_to_invocations() {
        let tool = ToolDefinition::azure_cli().with_binary("/opt/az/bin/az");
        assert_eq!(tool.version_probe().program(), "/opt/az/bin/az");
        assert_eq!(tool.invocation().arg("login").to_string(), "/opt/az/bin/az login");
    }

    #[test]
    fn manual_hint_uses_install_url() {
        let tool = ToolDefinition::azure_cli().with_install_url("https://example.test/az");
        assert_eq!(
            tool.manual_install_hint(),
            "Please manually install Azure CLI from https://example.test/az"
        );
        assert!(ToolDefinition::default()
            .manual_install_hint()
            .contains(MANUAL_INSTALL_URL));
    }
}
