//! Configuration loading for azproof.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use azproof::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".azproof.yml"), "output: evidence/proof.txt").unwrap();
//!
//! let config = load_config(None, temp.path()).unwrap();
//! assert_eq!(config.output.unwrap().to_str(), Some("evidence/proof.txt"));
//! ```
//!
//! Values are applied with precedence: command-line flag, then config
//! file, then built-in default.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::ProofConfig;
