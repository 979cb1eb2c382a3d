//! Error type for the installer.
//!
//! Every stage returns [`InstallError`] and propagates it unchanged with `?`.
//! Nothing recovers locally: `main` is the only place errors are reported,
//! after which the process exits non-zero.
//!
//! # Variants
//!
//! ```text
//! InstallError
//! ├── MissingResourceBundle   bundled resources unreachable
//! ├── MissingThemesDirectory  bundle lacks a Themes/ directory
//! ├── InvalidArgument         unknown flag or missing flag value
//! ├── FontDownloadFailed      archive fetch failed
//! ├── FontExtractionFailed    unzip exited non-zero
//! ├── MissingFontFiles        no ttf payload in the archive
//! ├── UnzipUnavailable        unzip could not be launched
//! └── Io                      an underlying filesystem operation failed
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Failure kinds raised while installing the theme and its font.
#[derive(Error, Debug)]
pub enum InstallError {
    /// The packaged resource bundle could not be found.
    #[error("could not locate the resource bundle (set HEXXA_RESOURCES to override)")]
    MissingResourceBundle,

    /// The resource bundle exists but has no themes directory.
    #[error("themes directory not found: {}", .0.display())]
    MissingThemesDirectory(PathBuf),

    /// A command-line token was not recognised or a flag lacked its value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Downloading the font archive failed.
    #[error("font download failed from {url}: {source}")]
    FontDownloadFailed {
        /// URL that was requested.
        url: String,
        /// Underlying HTTP error.
        source: ureq::Error,
    },

    /// The extraction tool ran but exited with a non-zero status.
    #[error("font extraction failed (exit {status})")]
    FontExtractionFailed {
        /// Exit status, or `-1` when terminated by a signal.
        status: i32,
    },

    /// No font files were found where the archive should contain them.
    #[error("missing font files in {}", .0.display())]
    MissingFontFiles(PathBuf),

    /// The extraction tool could not be found or launched.
    #[error("'{tool}' is not available; install it and try again")]
    UnzipUnavailable {
        /// Name of the tool that was looked up.
        tool: String,
    },

    /// A filesystem operation failed.
    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        /// What was being attempted, e.g. `"copy"`.
        action: &'static str,
        /// Path the operation was applied to.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl InstallError {
    /// Build a `map_err` adapter that wraps an [`std::io::Error`] with the
    /// attempted action and the path it concerned.
    pub fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io {
            action,
            path,
            source,
        }
    }
}
