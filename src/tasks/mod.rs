//! Named units of work run in order by the install command.
pub mod fonts;
pub mod themes;

use std::fmt;
use std::path::PathBuf;

use crate::config::{self, Options};
use crate::error::InstallError;
use crate::logging::Logger;

/// Outcome of a task that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    /// Task completed and changed the system.
    Ok,
    /// Nothing needed doing.
    Skipped(String),
    /// Task ran in dry-run mode; no changes were applied.
    DryRun,
}

impl fmt::Display for TaskResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Skipped(reason) => write!(f, "skipped ({reason})"),
            Self::DryRun => write!(f, "dry run"),
        }
    }
}

/// Shared state handed to every task.
#[derive(Debug)]
pub struct Context<'a> {
    /// Parsed command-line options.
    pub options: &'a Options,
    /// Directory fonts are installed into.
    pub fonts_dir: PathBuf,
    /// Output sink.
    pub log: &'a Logger,
}

impl<'a> Context<'a> {
    /// Create a context that installs fonts into `~/Library/Fonts`.
    #[must_use]
    pub fn new(options: &'a Options, log: &'a Logger) -> Self {
        Self {
            options,
            fonts_dir: config::fonts_dir(),
            log,
        }
    }

    /// Install fonts into `dir` instead of the user font directory.
    #[must_use]
    pub fn with_fonts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fonts_dir = dir.into();
        self
    }

    /// Whether filesystem writes must be skipped.
    #[must_use]
    pub const fn dry_run(&self) -> bool {
        self.options.dry_run
    }
}

/// A named, executable task.
pub trait Task {
    /// Human-readable task name, shown as a stage header.
    fn name(&self) -> &str;

    /// Execute the task.
    ///
    /// # Errors
    ///
    /// Returns the first failure encountered; tasks never recover locally.
    fn run(&self, ctx: &Context) -> Result<TaskResult, InstallError>;
}

/// The tasks run by the install command, in execution order.
#[must_use]
pub fn all_install_tasks() -> Vec<Box<dyn Task>> {
    vec![
        Box::new(fonts::ProvisionFont::default()),
        Box::new(themes::InstallThemes::new()),
    ]
}
