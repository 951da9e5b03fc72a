//! Host platform detection.

use std::fmt;

/// Operating system family, bucketed by how the external tool is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostPlatform {
    /// macOS (Homebrew install).
    MacOS,
    /// Windows (winget install).
    Windows,
    /// Anything else; no automatic install.
    Unsupported(String),
}

impl HostPlatform {
    /// Detect the current platform.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Classify an OS name as reported by `std::env::consts::OS` or `uname`.
    pub fn from_os(os: &str) -> Self {
        match os.to_lowercase().as_str() {
            "macos" | "darwin" => HostPlatform::MacOS,
            "windows" => HostPlatform::Windows,
            other => HostPlatform::Unsupported(other.to_string()),
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostPlatform::MacOS => write!(f, "macos"),
            HostPlatform::Windows => write!(f, "windows"),
            HostPlatform::Unsupported(os) => write!(f, "{}", os),
        }
    }
}

/// Environment variables whose presence marks a CI environment.
pub const CI_ENV_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
    "TF_BUILD",
];

/// Check if running in a CI environment.
///
/// Used to auto-detect CI and force non-interactive mode in `main()`.
pub fn is_ci() -> bool {
    ci_from_env(|name| std::env::var_os(name).is_some())
}

/// Whether any of [`CI_ENV_VARS`] is set, according to `is_set`.
pub fn ci_from_env(is_set: impl Fn(&str) -> bool) -> bool {
    CI_ENV_VARS.iter().any(|name| is_set(name))
}

/// Check if running as root/admin.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(windows)]
    {
        // `net session` only succeeds from an elevated prompt.
        std::process::Command::new("net")
            .arg("session")
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status()
            .is_ok_and(|s| s.success())
    }

    #[cfg(not(any(unix, windows)))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_os_buckets() {
        assert_eq!(HostPlatform::from_os("macos"), HostPlatform::MacOS);
        assert_eq!(HostPlatform::from_os("Darwin"), HostPlatform::MacOS);
        assert_eq!(HostPlatform::from_os("windows"), HostPlatform::Windows);
        assert_eq!(
            HostPlatform::from_os("linux"),
            HostPlatform::Unsupported("linux".to_string())
        );
    }

    #[test]
    fn display_names_unsupported_os() {
        assert_eq!(HostPlatform::from_os("freebsd").to_string(), "freebsd");
        assert_eq!(HostPlatform::MacOS.to_string(), "macos");
    }

    #[test]
    fn current_matches_consts() {
        assert_eq!(
            HostPlatform::current(),
            HostPlatform::from_os(std::env::consts::OS)
        );
    }

    #[test]
    fn ci_detected_from_any_marker() {
        for marker in CI_ENV_VARS {
            assert!(ci_from_env(|name| name == *marker), "{marker}");
        }
    }

    #[test]
    fn no_ci_without_markers() {
        assert!(!ci_from_env(|_| false));
        assert!(!ci_from_env(|name| name == "HOME"));
    }
}
