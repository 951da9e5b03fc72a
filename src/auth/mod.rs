//! Authentication with the external tool.
//!
//! The session lives entirely inside the Azure CLI. This module only asks
//! the CLI whether a session exists and, if not, hands the terminal to
//! `az login`.

pub mod gate;

pub use gate::{AuthStatus, AuthenticationGate, LOGIN_REQUIRED_MARKER};
