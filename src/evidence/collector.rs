//! Runs a data source's query and appends the result to the evidence file.

use chrono::{Local, NaiveDateTime};

use crate::error::{ProofError, Result};
use crate::evidence::file::{format_header, EvidenceFile};
use crate::evidence::source::{ConnectionParameters, DataSource};
use crate::requirements::ToolDefinition;
use crate::secrets::mask_connection_string;
use crate::shell::CommandInvoker;
use crate::ui::UserInterface;

/// What a collection attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionReport {
    /// Header and query output were appended.
    Written {
        /// Bytes of query output appended after the header.
        bytes: usize,
    },
    /// The query ran but did not succeed. The header stays in the file.
    QueryFailed {
        /// Operator-facing message, secrets masked.
        message: String,
    },
    /// The source has no collector yet; nothing was written.
    NotImplemented,
}

/// Source of header timestamps.
pub type Clock = Box<dyn Fn() -> NaiveDateTime>;

/// Appends evidence blocks for cloud storage sources.
pub struct EvidenceCollector<'a> {
    tool: &'a ToolDefinition,
    invoker: &'a dyn CommandInvoker,
    file: EvidenceFile,
    clock: Clock,
}

impl<'a> EvidenceCollector<'a> {
    /// Create a collector stamping headers with local time.
    pub fn new(tool: &'a ToolDefinition, invoker: &'a dyn CommandInvoker, file: EvidenceFile) -> Self {
        Self {
            tool,
            invoker,
            file,
            clock: Box::new(|| Local::now().naive_local()),
        }
    }

    /// Replace the timestamp source.
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDateTime + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Collect evidence from `source`.
    ///
    /// The header is appended before the query runs, so a failed query
    /// leaves a header with no body. `Err` is only returned for local
    /// failures writing the evidence file.
    pub fn collect(
        &self,
        source: DataSource,
        params: &ConnectionParameters,
        ui: &mut dyn UserInterface,
    ) -> Result<CollectionReport> {
        let (Some(label), Some(query)) = (
            source.header_label(&params.target),
            source.query(self.tool, params),
        ) else {
            ui.message("This function is a placeholder. You need to implement the connection");
            ui.message(
                "and query logic for your specific database (e.g., SQL Server, MySQL, PostgreSQL).",
            );
            return Ok(CollectionReport::NotImplemented);
        };

        tracing::debug!(
            "Collecting {} with {}",
            source.noun(),
            mask_connection_string(&params.connection_string)
        );
        self.file.append(&format_header(&label, (self.clock)()))?;

        let mut spinner = ui.start_spinner(&format!("Querying {}...", source.menu_label()));
        let message = match self.invoker.capture(&query) {
            Ok(result) if result.success => {
                if let Err(e) = self.file.append(&result.stdout) {
                    spinner.finish_error(&format!("Could not save {}", source.noun()));
                    return Err(e);
                }
                spinner.finish_success(&format!("Fetched {}", source.noun()));
                ui.command_output(&result.stdout);
                ui.success(&format!(
                    "Successfully wrote {} to {}",
                    source.noun(),
                    self.file.path().display()
                ));
                return Ok(CollectionReport::Written {
                    bytes: result.stdout.len(),
                });
            }
            Ok(result) => format!(
                "Error fetching {}: {}",
                source.noun(),
                mask_connection_string(&query.mask(result.stderr.trim_end()))
            ),
            Err(ProofError::ToolNotFound { tool }) => format!(
                "Error: '{}' command not found. Make sure {} is installed.",
                tool, self.tool.display_name
            ),
            Err(e) => format!("Error fetching {}: {}", source.noun(), e),
        };

        spinner.finish_error(&format!("Could not fetch {}", source.noun()));
        tracing::warn!("{}", message);
        ui.error(&message);
        Ok(CollectionReport::QueryFailed { message })
    }
}
