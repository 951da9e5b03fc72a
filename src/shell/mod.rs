//! External command execution and host platform detection.
//!
//! Everything this tool does against the cloud account goes through an
//! external program. [`CommandInvoker`] is the seam: production code uses
//! [`SystemInvoker`], tests script responses with [`MockInvoker`].

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{CommandInvoker, CommandResult, Invocation, SystemInvoker};
pub use mock::{MockInvoker, MockResponse, RecordedCall};
pub use platform::{ci_from_env, is_ci, is_elevated, HostPlatform, CI_ENV_VARS};
