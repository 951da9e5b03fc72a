//! External tool availability and remediation.
//!
//! This module decides whether the Azure CLI can be run, and when it
//! cannot, makes one best-effort attempt to install it with the host's
//! package manager.
//!
//! # Modules
//!
//! - [`registry`] - Definition of the external tool and its install recipes
//! - [`status`] - Outcome of an availability check
//! - [`checker`] - The version probe and the decision to remediate
//! - [`installer`] - Platform-conditioned install attempt

pub mod checker;
pub mod installer;
pub mod registry;
pub mod status;

pub use checker::ToolAvailabilityChecker;
pub use installer::InstallerContext;
pub use registry::{InstallRecipe, ToolDefinition, MANUAL_INSTALL_URL};
pub use status::ToolStatus;
