//! Secret masking.
//!
//! Connection strings carry account keys and SAS tokens. They must never
//! reach the evidence file, the log stream, or console echo of commands.
//!
//! - [`OutputMasker`] - Masks registered secret values in arbitrary text
//! - [`mask_connection_string`] - Redacts key material inside an Azure
//!   storage connection string while keeping its shape readable
//!
//! # Example
//!
//! ```
//! use azproof::secrets::{mask_connection_string, OutputMasker};
//!
//! let mut masker = OutputMasker::new();
//! masker.add_secret("super-secret-value");
//! let output = masker.mask("The key is super-secret-value here");
//! assert!(!output.contains("super-secret-value"));
//!
//! let cs = "AccountName=demo;AccountKey=abc123==;EndpointSuffix=core.windows.net";
//! assert_eq!(
//!     mask_connection_string(cs),
//!     "AccountName=demo;AccountKey=[REDACTED];EndpointSuffix=core.windows.net"
//! );
//! ```

pub mod connection;
pub mod mask;

pub use connection::mask_connection_string;
pub use mask::OutputMasker;
