//! Evidence collection.
//!
//! An evidence run appends one block per data source to a flat text file:
//!
//! ```text
//! ## Azure Blob Storage - Container: logs
//! Timestamp: 2024-05-01 10:00:00.000000
//!
//! <raw query output>
//! ```

pub mod collector;
pub mod file;
pub mod source;

pub use collector::{CollectionReport, EvidenceCollector};
pub use file::{format_header, EvidenceFile, DEFAULT_EVIDENCE_FILE, TIMESTAMP_FORMAT};
pub use source::{ConnectionParameters, DataSource};
