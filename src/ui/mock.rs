//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use azproof::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("container", "logs");
//!
//! let answer = ui.prompt(&Prompt::input("container", "Container name")).unwrap();
//! ui.success("Done!");
//!
//! assert_eq!(answer, "logs");
//! assert!(ui.has_success("Done!"));
//! assert_eq!(ui.prompts_shown(), &["container".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::error::Result;

use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Prompt answers come from, in order: the queue for the key, the single
/// response for the key, then the empty string.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    spinners: Vec<String>,
    spinner_results: Rc<RefCell<Vec<(bool, String)>>>,
    command_outputs: Vec<String>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue responses for a prompt key, consumed in order.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: &[&str]) {
        self.prompt_queues
            .entry(key.to_string())
            .or_default()
            .extend(responses.iter().map(|r| r.to_string()));
    }

    /// Set whether the UI reports itself as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Spinner messages, in start order.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// How each finished spinner ended: `(succeeded, message)`, in finish order.
    pub fn spinner_results(&self) -> Vec<(bool, String)> {
        self.spinner_results.borrow().clone()
    }

    /// Captured command output echoed in verbose mode.
    pub fn command_outputs(&self) -> &[String] {
        &self.command_outputs
    }

    /// Keys of the prompts shown, in order.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Whether any message contains `text`.
    pub fn has_message(&self, text: &str) -> bool {
        self.messages.iter().any(|m| m.contains(text))
    }

    /// Whether any success line contains `text`.
    pub fn has_success(&self, text: &str) -> bool {
        self.successes.iter().any(|m| m.contains(text))
    }

    /// Whether any warning contains `text`.
    pub fn has_warning(&self, text: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(text))
    }

    /// Whether any error contains `text`.
    pub fn has_error(&self, text: &str) -> bool {
        self.errors.iter().any(|m| m.contains(text))
    }

    /// Whether any hint contains `text`.
    pub fn has_hint(&self, text: &str) -> bool {
        self.hints.iter().any(|m| m.contains(text))
    }

    /// Everything shown to the operator, for "never displayed" checks.
    pub fn all_output(&self) -> String {
        self.messages
            .iter()
            .chain(&self.successes)
            .chain(&self.warnings)
            .chain(&self.errors)
            .chain(&self.headers)
            .chain(&self.hints)
            .chain(&self.spinners)
            .chain(&self.command_outputs)
            .cloned()
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        self.prompts_shown.push(prompt.key.clone());

        if let Some(answer) = self
            .prompt_queues
            .get_mut(&prompt.key)
            .and_then(|q| q.pop_front())
        {
            return Ok(answer);
        }

        if let Some(answer) = self.prompt_responses.get(&prompt.key) {
            return Ok(answer.clone());
        }

        Ok(String::new())
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            message: message.to_string(),
            results: Rc::clone(&self.spinner_results),
            ..Default::default()
        })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn command_output(&mut self, output: &str) {
        if self.mode.shows_command_output() {
            self.command_outputs.push(output.to_string());
        }
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner that records how it finished, also into its `MockUI`.
#[derive(Debug, Default)]
pub struct MockSpinner {
    pub message: String,
    pub finished: Option<(bool, String)>,
    results: Rc<RefCell<Vec<(bool, String)>>>,
}

impl MockSpinner {
    fn finish(&mut self, success: bool, msg: &str) {
        self.finished = Some((success, msg.to_string()));
        self.results.borrow_mut().push((success, msg.to_string()));
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.message = msg.to_string();
    }

    fn finish_success(&mut self, msg: &str) {
        self.finish(true, msg);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish(false, msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_messages() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.warning("careful");
        ui.error("broken");

        assert_eq!(ui.messages(), &["hello".to_string()]);
        assert!(ui.has_warning("care"));
        assert!(ui.has_error("broken"));
    }

    #[test]
    fn queued_responses_come_first() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("source", "2");
        ui.queue_prompt_responses("source", &["1"]);
        let prompt = Prompt::input("source", "Choice");

        assert_eq!(ui.prompt(&prompt).unwrap(), "1");
        assert_eq!(ui.prompt(&prompt).unwrap(), "2");
    }

    #[test]
    fn unanswered_prompt_is_empty() {
        let mut ui = MockUI::new();

        assert_eq!(ui.prompt(&Prompt::input("b", "B")).unwrap(), "");
        assert_eq!(ui.prompts_shown(), &["b".to_string()]);
    }

    #[test]
    fn command_output_only_in_verbose() {
        let mut normal = MockUI::new();
        normal.command_output("rows");
        assert!(normal.command_outputs().is_empty());

        let mut verbose = MockUI::with_mode(OutputMode::Verbose);
        verbose.command_output("rows");
        assert_eq!(verbose.command_outputs(), &["rows".to_string()]);
    }

    #[test]
    fn spinner_is_recorded() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Querying");
        spinner.finish_success("done");
        let mut failed = ui.start_spinner("Saving");
        failed.finish_error("disk full");

        assert_eq!(ui.spinners(), &["Querying".to_string(), "Saving".to_string()]);
        assert_eq!(
            ui.spinner_results(),
            vec![(true, "done".to_string()), (false, "disk full".to_string())]
        );
    }

    #[test]
    fn interactive_flag() {
        let mut ui = MockUI::new();
        assert!(!ui.is_interactive());
        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }
}
