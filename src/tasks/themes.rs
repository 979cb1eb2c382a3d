//! Copying the bundled color themes into Xcode's theme directory.
use std::path::{Path, PathBuf};

use super::{Context, Task, TaskResult};
use crate::config::THEME_EXTENSION;
use crate::error::InstallError;
use crate::resources::{bundle, fs};

/// Copy the bundled color themes into the destination directory.
#[derive(Debug, Default, Clone)]
pub struct InstallThemes {
    bundle: Option<PathBuf>,
}

impl InstallThemes {
    /// Install from the bundle found by [`bundle::locate`].
    #[must_use]
    pub const fn new() -> Self {
        Self { bundle: None }
    }

    /// Install from an explicit bundle directory.
    #[must_use]
    pub fn from_bundle(bundle: impl Into<PathBuf>) -> Self {
        Self {
            bundle: Some(bundle.into()),
        }
    }

    fn source_dir(&self) -> Result<PathBuf, InstallError> {
        let bundle = match &self.bundle {
            Some(explicit) => bundle::locate_from(Some(explicit.clone()), &[])?,
            None => bundle::locate()?,
        };
        bundle::themes_dir(&bundle)
    }
}

impl Task for InstallThemes {
    fn name(&self) -> &str {
        "Install themes"
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult, InstallError> {
        let source = self.source_dir()?;
        ctx.log.debug(&format!("theme source: {}", source.display()));
        install_themes(&source, ctx)
    }
}

/// Copy every theme file in `source` into the configured destination.
///
/// Finding no themes is not an error. In dry-run mode each copy is reported
/// and nothing is written, not even the destination directory.
///
/// # Errors
///
/// Returns [`InstallError::Io`] if `source` cannot be read or a copy fails.
pub fn install_themes(source: &Path, ctx: &Context) -> Result<TaskResult, InstallError> {
    let destination = &ctx.options.destination;
    if !ctx.dry_run() {
        fs::ensure_dir(destination)?;
    }

    let themes = fs::files_with_extension(source, THEME_EXTENSION)?;
    if themes.is_empty() {
        ctx.log.info(&format!(
            "No .{THEME_EXTENSION} files found in {}",
            source.display()
        ));
        return Ok(TaskResult::Skipped("no themes found".to_string()));
    }

    for theme in &themes {
        if ctx.dry_run() {
            let name = theme.file_name().unwrap_or_default();
            ctx.log.dry_run(&format!(
                "Would copy {} to {}",
                theme.display(),
                destination.join(name).display()
            ));
            continue;
        }
        let target = fs::replace_into(theme, destination)?;
        ctx.log.info(&format!(
            "Installed {}",
            target.file_name().unwrap_or_default().to_string_lossy()
        ));
    }

    if ctx.dry_run() {
        return Ok(TaskResult::DryRun);
    }
    ctx.log.debug(&format!("{} theme(s) copied", themes.len()));
    Ok(TaskResult::Ok)
}
