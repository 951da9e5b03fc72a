//! Scripted invoker for testing.
//!
//! `MockInvoker` implements [`CommandInvoker`] without spawning anything.
//! Each call is recorded, and the response comes from the first rule whose
//! program matches and whose argument prefix matches the call.
//!
//! # Example
//!
//! ```
//! use azproof::shell::{CommandInvoker, Invocation, MockInvoker, MockResponse};
//!
//! let invoker = MockInvoker::new()
//!     .on("az", &["--version"], MockResponse::ok("azure-cli 2.61.0\n"))
//!     .on("az", &["account", "show"], MockResponse::fail(1, "Please run 'az login' to setup account."));
//!
//! let version = invoker.capture(&Invocation::new("az").arg("--version")).unwrap();
//! assert!(version.success);
//! assert!(invoker.was_called("az", &["--version"]));
//! assert!(!invoker.was_called("az", &["login"]));
//! ```

use std::cell::RefCell;
use std::time::Duration;

use crate::error::{ProofError, Result};

use super::command::{CommandInvoker, CommandResult, Invocation};

/// Scripted outcome for a matched invocation.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// The program ran and exited with this status and output.
    Exit {
        code: i32,
        stdout: String,
        stderr: String,
    },
    /// The program is not on PATH.
    NotFound,
}

impl MockResponse {
    /// Exit 0 with the given stdout.
    pub fn ok(stdout: &str) -> Self {
        Self::Exit {
            code: 0,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    /// Non-zero exit with the given stderr.
    pub fn fail(code: i32, stderr: &str) -> Self {
        Self::Exit {
            code,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    fn to_result(&self, program: &str) -> Result<CommandResult> {
        match self {
            Self::Exit {
                code,
                stdout,
                stderr,
            } if *code == 0 => Ok(CommandResult::success(
                stdout.clone(),
                stderr.clone(),
                Duration::ZERO,
            )),
            Self::Exit {
                code,
                stdout,
                stderr,
            } => Ok(CommandResult::failure(
                Some(*code),
                stdout.clone(),
                stderr.clone(),
                Duration::ZERO,
            )),
            Self::NotFound => Err(ProofError::ToolNotFound {
                tool: program.to_string(),
            }),
        }
    }
}

/// A call observed by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Program name.
    pub program: String,
    /// Raw arguments (secrets included, for assertions).
    pub args: Vec<String>,
    /// Whether the call was attached to the terminal.
    pub attached: bool,
}

#[derive(Debug)]
struct Rule {
    program: String,
    prefix: Vec<String>,
    response: MockResponse,
    once: bool,
    used: bool,
}

impl Rule {
    fn matches(&self, invocation: &Invocation) -> bool {
        !(self.once && self.used)
            && self.program == invocation.program()
            && invocation.arg_list().starts_with(&self.prefix)
    }
}

/// Mock invoker with scripted responses.
///
/// Calls that match no rule behave as if the program is missing.
#[derive(Debug, Default)]
pub struct MockInvoker {
    rules: RefCell<Vec<Rule>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl MockInvoker {
    /// Create an invoker with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to every call of `program` whose args start with `prefix`.
    pub fn on(self, program: &str, prefix: &[&str], response: MockResponse) -> Self {
        self.push_rule(program, prefix, response, false);
        self
    }

    /// Respond to the first matching call only.
    ///
    /// Once-rules are checked in insertion order with other rules, so put
    /// them before any persistent rule for the same prefix.
    pub fn on_once(self, program: &str, prefix: &[&str], response: MockResponse) -> Self {
        self.push_rule(program, prefix, response, true);
        self
    }

    fn push_rule(&self, program: &str, prefix: &[&str], response: MockResponse, once: bool) {
        self.rules.borrow_mut().push(Rule {
            program: program.to_string(),
            prefix: prefix.iter().map(|s| s.to_string()).collect(),
            response,
            once,
            used: false,
        });
    }

    /// All calls so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    /// Number of calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Whether any call to `program` started with `prefix`.
    pub fn was_called(&self, program: &str, prefix: &[&str]) -> bool {
        self.calls.borrow().iter().any(|c| {
            c.program == program
                && c.args.len() >= prefix.len()
                && c.args.iter().zip(prefix).all(|(a, p)| a == p)
        })
    }

    fn respond(&self, invocation: &Invocation, attached: bool) -> Result<CommandResult> {
        self.calls.borrow_mut().push(RecordedCall {
            program: invocation.program().to_string(),
            args: invocation.arg_list().to_vec(),
            attached,
        });

        let mut rules = self.rules.borrow_mut();
        match rules.iter_mut().find(|r| r.matches(invocation)) {
            Some(rule) => {
                rule.used = true;
                rule.response.to_result(invocation.program())
            }
            None => MockResponse::NotFound.to_result(invocation.program()),
        }
    }
}

impl CommandInvoker for MockInvoker {
    fn capture(&self, invocation: &Invocation) -> Result<CommandResult> {
        self.respond(invocation, false)
    }

    fn attach(&self, invocation: &Invocation) -> Result<CommandResult> {
        self.respond(invocation, true)
    }
}
