//! Evidence run orchestration.

use std::fmt;

use crate::auth::{AuthStatus, AuthenticationGate};
use crate::error::Result;
use crate::evidence::collector::Clock;
use crate::evidence::{CollectionReport, ConnectionParameters, EvidenceCollector, EvidenceFile};
use crate::requirements::{InstallerContext, ToolAvailabilityChecker, ToolDefinition, ToolStatus};
use crate::shell::CommandInvoker;
use crate::ui::UserInterface;

use super::prompts::{gather_parameters, select_source, PreAnswers};

/// Where a run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    Idle,
    ToolChecked,
    Authenticated,
    Collecting,
    Done,
    Failed,
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::ToolChecked => "tool-checked",
            Self::Authenticated => "authenticated",
            Self::Collecting => "collecting",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Evidence was written.
    Completed { bytes: usize },
    /// Tool and session are ready (readiness check only).
    Ready,
    /// The menu answer was not `1`, `2` or `3`.
    InvalidSelection,
    /// The selected source has no collector.
    NotImplemented,
    /// The tool was just installed; the operator must restart their shell.
    RestartRequired,
    /// The tool is missing and could not be installed.
    ToolUnavailable { reason: String },
    /// No authenticated session could be established.
    AuthFailed { message: String },
    /// The query did not succeed.
    CollectionFailed { message: String },
}

impl RunOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Completed { .. }
            | Self::Ready
            | Self::InvalidSelection
            | Self::NotImplemented
            | Self::RestartRequired => 0,
            Self::ToolUnavailable { .. }
            | Self::AuthFailed { .. }
            | Self::CollectionFailed { .. } => 1,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code() == 0
    }
}

/// Drives one evidence run: reset, select, gate, collect.
pub struct ProofRunner<'a> {
    tool: &'a ToolDefinition,
    invoker: &'a dyn CommandInvoker,
    installer: InstallerContext,
    evidence: EvidenceFile,
    answers: PreAnswers,
    clock: Option<Clock>,
    stage: RunStage,
}

impl<'a> ProofRunner<'a> {
    /// Create a runner for the real host.
    pub fn new(
        tool: &'a ToolDefinition,
        invoker: &'a dyn CommandInvoker,
        evidence: EvidenceFile,
    ) -> Self {
        Self {
            tool,
            invoker,
            installer: InstallerContext::detect(),
            evidence,
            answers: PreAnswers::default(),
            clock: None,
            stage: RunStage::Idle,
        }
    }

    /// Override host facts used for installation.
    pub fn with_installer_context(mut self, ctx: InstallerContext) -> Self {
        self.installer = ctx;
        self
    }

    /// Supply answers that skip prompts.
    pub fn with_answers(mut self, answers: PreAnswers) -> Self {
        self.answers = answers;
        self
    }

    /// Override the header timestamp source.
    pub fn with_clock(mut self, clock: impl Fn() -> chrono::NaiveDateTime + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    pub fn stage(&self) -> RunStage {
        self.stage
    }

    fn advance(&mut self, stage: RunStage) {
        tracing::debug!("Run stage {} -> {}", self.stage, stage);
        self.stage = stage;
    }

    fn fail(&mut self, outcome: RunOutcome) -> RunOutcome {
        self.advance(RunStage::Failed);
        outcome
    }

    /// Run a full evidence collection.
    ///
    /// Stage failures come back as [`RunOutcome`]s; `Err` is reserved for
    /// local errors (evidence file I/O, unanswerable prompts).
    pub fn run(&mut self, ui: &mut dyn UserInterface) -> Result<RunOutcome> {
        self.evidence.reset()?;

        let Some(source) = select_source(ui, self.answers.source)? else {
            ui.warning("Invalid choice. Please run the program again and select 1, 2, or 3.");
            return Ok(RunOutcome::InvalidSelection);
        };
        tracing::debug!("Selected data source: {}", source);

        if source.requires_cloud_tool() {
            if let Some(outcome) = self.gate(ui) {
                return Ok(outcome);
            }
        }

        ui.show_header(source.menu_label());
        let params = if source.requires_cloud_tool() {
            gather_parameters(source, ui, &self.answers)?
        } else {
            ConnectionParameters::default()
        };

        self.advance(RunStage::Collecting);
        let mut collector =
            EvidenceCollector::new(self.tool, self.invoker, self.evidence.clone());
        if let Some(clock) = self.clock.take() {
            collector = collector.with_clock(clock);
        }

        let report = match collector.collect(source, &params, ui) {
            Ok(report) => report,
            Err(e) => {
                self.advance(RunStage::Failed);
                return Err(e);
            }
        };

        Ok(match report {
            CollectionReport::Written { bytes } => {
                self.advance(RunStage::Done);
                RunOutcome::Completed { bytes }
            }
            CollectionReport::NotImplemented => {
                self.advance(RunStage::Done);
                RunOutcome::NotImplemented
            }
            CollectionReport::QueryFailed { message } => {
                self.fail(RunOutcome::CollectionFailed { message })
            }
        })
    }

    /// Check the tool and the session without collecting anything.
    pub fn check(&mut self, ui: &mut dyn UserInterface) -> RunOutcome {
        if let Some(outcome) = self.gate(ui) {
            return outcome;
        }
        self.advance(RunStage::Done);
        ui.success(&format!(
            "{} is ready to collect evidence.",
            self.tool.display_name
        ));
        RunOutcome::Ready
    }

    /// Tool check then authentication. `Some` ends the run.
    fn gate(&mut self, ui: &mut dyn UserInterface) -> Option<RunOutcome> {
        let checker = ToolAvailabilityChecker::new(self.tool, self.invoker, self.installer.clone());
        match checker.ensure_available(ui) {
            ToolStatus::Available => self.advance(RunStage::ToolChecked),
            ToolStatus::RestartRequired { manager } => {
                tracing::debug!("Installed via {}; restart required", manager);
                self.advance(RunStage::Done);
                return Some(RunOutcome::RestartRequired);
            }
            ToolStatus::Unavailable { reason } => {
                return Some(self.fail(RunOutcome::ToolUnavailable { reason }));
            }
        }

        match AuthenticationGate::new(self.tool, self.invoker).ensure_authenticated(ui) {
            AuthStatus::AlreadyAuthenticated | AuthStatus::LoggedIn => {
                self.advance(RunStage::Authenticated);
                None
            }
            AuthStatus::Failed { message } => Some(self.fail(RunOutcome::AuthFailed { message })),
        }
    }
}
