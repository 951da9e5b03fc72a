//! The append-only evidence file.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::{ProofError, Result};

/// Evidence file name used when nothing else is configured.
pub const DEFAULT_EVIDENCE_FILE: &str = "proof.txt";

/// Timestamp layout in block headers (microsecond precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Build the header block written before a query's output.
pub fn format_header(label: &str, timestamp: NaiveDateTime) -> String {
    format!(
        "## {}\nTimestamp: {}\n\n",
        label,
        timestamp.format(TIMESTAMP_FORMAT)
    )
}

/// Handle to the evidence file.
///
/// Every append opens, writes and closes the file; no handle is held
/// between writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceFile {
    path: PathBuf,
}

impl EvidenceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Delete the file if present. Succeeds when there is nothing to delete.
    pub fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!("Removed previous evidence file {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(ProofError::EvidenceWrite {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Append text, creating the file on first write.
    pub fn append(&self, text: &str) -> Result<()> {
        let write = || -> std::io::Result<()> {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            file.write_all(text.as_bytes())
        };
        write().map_err(|source| ProofError::EvidenceWrite {
            path: self.path.clone(),
            source,
        })
    }
}

impl Default for EvidenceFile {
    fn default() -> Self {
        Self::new(DEFAULT_EVIDENCE_FILE)
    }
}
