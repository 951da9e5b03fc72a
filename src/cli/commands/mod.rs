//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by the
//! [`CommandDispatcher`]. Settings shared by every command (tool binary,
//! evidence path) are resolved once into a [`RunContext`].

pub mod check;
pub mod collect;
pub mod context;
pub mod dispatcher;

pub use check::CheckCommand;
pub use collect::CollectCommand;
pub use context::RunContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
