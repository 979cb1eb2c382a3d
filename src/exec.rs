//! Running external programs.
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a command execution.
#[derive(Debug)]
pub struct ExecResult {
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Exit code, or `None` when terminated by a signal.
    pub code: Option<i32>,
}

impl From<Output> for ExecResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

/// Run a program to completion, capturing its output.
///
/// A non-zero exit is reported through [`ExecResult::success`], not as an
/// error; `Err` means the process could not be spawned at all.
///
/// # Errors
///
/// Returns the spawn error if the program cannot be launched.
pub fn run_unchecked<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> io::Result<ExecResult> {
    let output = Command::new(program).args(args).output()?;
    Ok(ExecResult::from(output))
}

/// Resolve a program on `PATH`.
#[must_use]
pub fn which(program: &str) -> Option<PathBuf> {
    which::which(program).ok()
}
