//! Dry-run aware logger that feeds the tracing pipeline.

/// Target for stage headers.
pub const STAGE_TARGET: &str = "hexxa_install::stage";

/// Target for dry-run action messages.
pub const DRY_RUN_TARGET: &str = "hexxa_install::dry_run";

/// Structured logger used by tasks and the orchestrator.
///
/// Every method emits a [`tracing`] event; how it is rendered is decided by
/// the subscriber installed with [`init_subscriber`](super::init_subscriber).
/// Without a subscriber (as in unit tests) the events are discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct Logger;

impl Logger {
    /// Create a new logger.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed unless `HEXXA_LOG` enables debug).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log an action that a dry run skipped.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }
}
