//! Script execution.
//!
//! Runs the selected script through the host shell with inherited stdio and
//! classifies how it ended.

use std::fmt;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

/// How a script run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecOutcome {
    /// Exited with code 0.
    Success,
    /// Exited with a non-zero code, or could not be started.
    Failure,
    /// Terminated without an exit code (killed by a signal).
    Interrupted,
}

impl ExecOutcome {
    /// Classify an exit status.
    pub fn from_status(status: &ExitStatus) -> Self {
        Self::from_code(status.code())
    }

    /// Classify a raw exit code; `None` means the process was terminated.
    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => ExecOutcome::Success,
            Some(_) => ExecOutcome::Failure,
            None => ExecOutcome::Interrupted,
        }
    }

    /// Label printed after the run.
    pub fn label(self) -> &'static str {
        match self {
            ExecOutcome::Success => "SUCCESSFUL",
            ExecOutcome::Failure => "FAILED",
            ExecOutcome::Interrupted => "INTERRUPTED",
        }
    }
}

impl fmt::Display for ExecOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of script execution.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Classified outcome.
    pub outcome: ExecOutcome,
    /// Exit code, when the script exited normally.
    pub code: Option<i32>,
    /// Terminating signal, when the script was killed (Unix only).
    pub signal: Option<i32>,
    /// The command that was executed, shell-quoted for display.
    pub command: String,
    /// Why the script could not be started, if it wasn't.
    pub launch_error: Option<String>,
    /// Wall time between spawn and exit.
    pub elapsed: Duration,
    /// Local time the run finished.
    pub finished_at: DateTime<Local>,
}

impl ExecutionResult {
    /// Check if the execution was successful.
    pub fn success(&self) -> bool {
        self.outcome == ExecOutcome::Success
    }

    /// Short detail about the exit, e.g. `exit 7` or `signal 9`.
    pub fn detail(&self) -> String {
        if let Some(err) = &self.launch_error {
            return format!("could not start: {err}");
        }
        match (self.code, self.signal) {
            (Some(code), _) => format!("exit {code}"),
            (None, Some(sig)) => format!("signal {sig}"),
            (None, None) => "terminated".to_string(),
        }
    }

    fn from_status(status: ExitStatus, command: String, elapsed: Duration) -> Self {
        Self {
            outcome: ExecOutcome::from_status(&status),
            code: status.code(),
            signal: exit_signal(&status),
            command,
            launch_error: None,
            elapsed,
            finished_at: Local::now(),
        }
    }

    fn launch_failed(command: String, error: &anyhow::Error) -> Self {
        Self {
            outcome: ExecOutcome::Failure,
            code: None,
            signal: None,
            command,
            launch_error: Some(format!("{error:#}")),
            elapsed: Duration::ZERO,
            finished_at: Local::now(),
        }
    }
}

#[cfg(unix)]
fn exit_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

/// Format the command line used to launch a script, for display and logs.
pub fn format_command(shell: &str, script: &Path) -> String {
    let path = script.to_string_lossy();
    format!(
        "{} -c {}",
        shell,
        shell_words::quote(&format!("exec {}", shell_words::quote(&path)))
    )
}

/// Execute a script through `shell` and wait for it.
///
/// The path is handed to the shell as `$0` rather than spliced into the
/// command string, so any byte sequence in the file name is passed intact.
///
/// # Errors
///
/// Returns an error if the shell cannot be spawned.
pub fn execute_script(shell: &str, script: &Path) -> Result<ExecutionResult> {
    let command_str = format_command(shell, script);

    let mut command = Command::new(shell);
    command.arg("-c").arg("exec \"$0\"").arg(script);

    // Inherit stdio for interactive scripts
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    tracing::info!(command = %command_str, "executing script");
    let started = Instant::now();
    let status = command
        .status()
        .with_context(|| format!("Failed to execute: {command_str}"))?;

    let result = ExecutionResult::from_status(status, command_str, started.elapsed());
    tracing::info!(
        outcome = %result.outcome,
        detail = %result.detail(),
        elapsed_ms = result.elapsed.as_millis() as u64,
        "script finished"
    );
    Ok(result)
}

/// Run a script, reporting a launch error as a failed run.
pub fn run_script(shell: &str, script: &Path) -> ExecutionResult {
    match execute_script(shell, script) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(script = %script.display(), error = %format!("{e:#}"), "launch failed");
            ExecutionResult::launch_failed(format_command(shell, script), &e)
        }
    }
}
