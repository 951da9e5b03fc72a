//! External command execution.

use crate::error::{ProofError, Result};
use crate::secrets::OutputMasker;
use std::fmt;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

#[cfg(any(windows, test))]
use std::ffi::OsStr;
#[cfg(any(windows, test))]
use std::path::{Path, PathBuf};

/// Executable extensions tried when `PATHEXT` is unset.
#[cfg(any(windows, test))]
const DEFAULT_PATHEXT: &str = ".COM;.EXE;.BAT;.CMD";

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output. Empty when the command was attached to the terminal.
    pub stdout: String,

    /// Standard error. Empty when the command was attached to the terminal.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// A program plus arguments, with secret-bearing arguments tracked.
///
/// Arguments are handed to the program directly, never through a shell, so
/// values such as connection strings are not re-interpreted. Its `Display`
/// form masks secret arguments and is safe to log.
#[derive(Debug, Clone)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    masker: OutputMasker,
}

impl Invocation {
    /// Start an invocation of `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            masker: OutputMasker::new(),
        }
    }

    /// Append a plain argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several plain arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append an argument whose value must never be displayed.
    pub fn secret_arg(mut self, arg: impl Into<String>) -> Self {
        let arg = arg.into();
        self.masker.add_secret(arg.clone());
        self.args.push(arg);
        self
    }

    /// The program to run.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The raw arguments, secrets included.
    pub fn arg_list(&self) -> &[String] {
        &self.args
    }

    /// Mask this invocation's secret arguments in arbitrary text.
    ///
    /// Used on captured stderr, which may echo arguments back.
    pub fn mask(&self, text: &str) -> String {
        self.masker.mask(text)
    }

    #[cfg(windows)]
    fn to_command(&self) -> Command {
        // `az` ships as az.cmd, which CreateProcess does not find by bare name.
        let pathext = std::env::var("PATHEXT").unwrap_or_else(|_| DEFAULT_PATHEXT.to_string());
        let program = std::env::var_os("PATH")
            .and_then(|path| find_in_path(&self.program, &path, &pathext))
            .unwrap_or_else(|| PathBuf::from(&self.program));
        let mut cmd = Command::new(program);
        cmd.args(&self.args);
        cmd
    }

    #[cfg(not(windows))]
    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                line.push_str(&format!("\"{}\"", arg));
            } else {
                line.push_str(arg);
            }
        }
        write!(f, "{}", self.masker.mask(&line))
    }
}

/// Resolve `program` the way the Windows shell does: each `PATH` entry in
/// turn, trying the name as given when it has an extension, then with each
/// `PATHEXT` extension appended. A name with a directory part is resolved
/// against that directory only.
#[cfg(any(windows, test))]
fn find_in_path(program: &str, path: &OsStr, pathext: &str) -> Option<PathBuf> {
    let name = Path::new(program);
    let candidates = |base: PathBuf| {
        let as_given = name.extension().is_some().then(|| base.clone());
        let with_ext = pathext
            .split(';')
            .filter(|ext| !ext.is_empty())
            .map(move |ext| {
                let mut file = base.clone().into_os_string();
                file.push(ext);
                PathBuf::from(file)
            });
        as_given.into_iter().chain(with_ext)
    };

    if name.parent().is_some_and(|p| !p.as_os_str().is_empty()) {
        return candidates(name.to_path_buf()).find(|c| c.is_file());
    }

    std::env::split_paths(path)
        .flat_map(|dir| candidates(dir.join(name)))
        .find(|c| c.is_file())
}

/// Runs external commands.
///
/// Implementations must not raise on a non-zero exit: that is reported
/// through [`CommandResult::success`]. `Err` means the program could not be
/// run at all.
pub trait CommandInvoker {
    /// Run with stdout and stderr captured.
    fn capture(&self, invocation: &Invocation) -> Result<CommandResult>;

    /// Run attached to the operator's terminal (login flows, installers).
    fn attach(&self, invocation: &Invocation) -> Result<CommandResult>;
}

/// Invoker that spawns real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInvoker;

impl SystemInvoker {
    /// Create a new system invoker.
    pub fn new() -> Self {
        Self
    }

    fn run(&self, invocation: &Invocation, capture: bool) -> Result<CommandResult> {
        let start = Instant::now();
        tracing::debug!("Running: {}", invocation);

        let mut cmd = invocation.to_command();
        if capture {
            cmd.stdin(Stdio::null());
            cmd.stdout(Stdio::piped());
            cmd.stderr(Stdio::piped());
        } else {
            cmd.stdin(Stdio::inherit());
            cmd.stdout(Stdio::inherit());
            cmd.stderr(Stdio::inherit());
        }

        let output = cmd.output().map_err(|e| spawn_error(invocation, e))?;
        let duration = start.elapsed();

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        tracing::debug!(
            "Finished {} with exit code {:?} in {:?}",
            invocation.program(),
            output.status.code(),
            duration
        );

        if output.status.success() {
            Ok(CommandResult::success(stdout, stderr, duration))
        } else {
            Ok(CommandResult::failure(
                output.status.code(),
                stdout,
                stderr,
                duration,
            ))
        }
    }
}

impl CommandInvoker for SystemInvoker {
    fn capture(&self, invocation: &Invocation) -> Result<CommandResult> {
        self.run(invocation, true)
    }

    fn attach(&self, invocation: &Invocation) -> Result<CommandResult> {
        self.run(invocation, false)
    }
}

fn spawn_error(invocation: &Invocation, err: std::io::Error) -> ProofError {
    if err.kind() == std::io::ErrorKind::NotFound {
        ProofError::ToolNotFound {
            tool: invocation.program().to_string(),
        }
    } else {
        tracing::warn!("Failed to spawn {}: {}", invocation.program(), err);
        ProofError::CommandFailed {
            command: invocation.to_string(),
            code: None,
        }
    }
}
