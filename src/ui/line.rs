//! Line-oriented UI for piped or redirected sessions.

use std::io::{BufRead, Write};

use crate::error::{ProofError, Result};

use super::{NonInteractiveUI, OutputMode, Prompt, SpinnerHandle, UserInterface};

/// UI that reads prompt answers one line at a time from standard input.
///
/// Used when the operator is present but stdout is not a terminal, for
/// example `azproof | tee run.log`. Output is the same plain text as
/// [`NonInteractiveUI`]. Secret answers are read like any other line.
pub struct LineUI {
    plain: NonInteractiveUI,
    input: Box<dyn BufRead>,
    echo: Box<dyn Write>,
}

impl LineUI {
    /// Read answers from stdin, writing questions to stdout.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_io(
            mode,
            Box::new(std::io::stdin().lock()),
            Box::new(std::io::stdout()),
        )
    }

    /// Use explicit streams (for testing).
    pub fn with_io(mode: OutputMode, input: Box<dyn BufRead>, echo: Box<dyn Write>) -> Self {
        Self {
            plain: NonInteractiveUI::with_overrides(mode, Default::default()),
            input,
            echo,
        }
    }
}

impl UserInterface for LineUI {
    fn output_mode(&self) -> OutputMode {
        self.plain.output_mode()
    }

    fn message(&mut self, msg: &str) {
        self.plain.message(msg);
    }

    fn success(&mut self, msg: &str) {
        self.plain.success(msg);
    }

    fn warning(&mut self, msg: &str) {
        self.plain.warning(msg);
    }

    fn error(&mut self, msg: &str) {
        self.plain.error(msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        write!(self.echo, "{}: ", prompt.question)?;
        self.echo.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ProofError::PromptClosed {
                key: prompt.key.clone(),
            });
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.plain.start_spinner(message)
    }

    fn show_header(&mut self, title: &str) {
        self.plain.show_header(title);
    }

    fn show_hint(&mut self, hint: &str) {
        self.plain.show_hint(hint);
    }

    fn command_output(&mut self, output: &str) {
        self.plain.command_output(output);
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
