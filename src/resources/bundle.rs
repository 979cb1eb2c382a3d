//! Locating the packaged resource bundle and the themes inside it.
use std::path::{Path, PathBuf};

use crate::config::RESOURCES_ENV;
use crate::error::InstallError;

/// Directory name of the resource bundle.
pub const BUNDLE_DIR: &str = "Resources";

/// Subdirectory of the bundle holding theme files.
pub const THEMES_DIR: &str = "Themes";

/// Resolve the resource bundle.
///
/// `HEXXA_RESOURCES` takes precedence. Otherwise the bundle is looked for
/// next to the executable, under the install prefix's `share/` directory,
/// and finally in the source checkout.
///
/// # Errors
///
/// Returns [`InstallError::MissingResourceBundle`] if no location holds a
/// bundle directory.
pub fn locate() -> Result<PathBuf, InstallError> {
    let explicit = std::env::var_os(RESOURCES_ENV).map(PathBuf::from);
    locate_from(explicit, &default_candidates())
}

/// Resolve the bundle from an explicit override or the first existing
/// candidate. An override that is not a directory is an error rather than a
/// reason to keep searching.
///
/// # Errors
///
/// Returns [`InstallError::MissingResourceBundle`] if nothing matches.
pub fn locate_from(
    explicit: Option<PathBuf>,
    candidates: &[PathBuf],
) -> Result<PathBuf, InstallError> {
    if let Some(path) = explicit {
        return canonical_dir(&path).ok_or(InstallError::MissingResourceBundle);
    }
    candidates
        .iter()
        .find_map(|c| canonical_dir(c))
        .ok_or(InstallError::MissingResourceBundle)
}

/// The `Themes` directory of a resolved bundle.
///
/// # Errors
///
/// Returns [`InstallError::MissingThemesDirectory`] carrying the expected
/// path if it is not a directory.
pub fn themes_dir(bundle: &Path) -> Result<PathBuf, InstallError> {
    let themes = bundle.join(THEMES_DIR);
    if themes.is_dir() {
        Ok(themes)
    } else {
        Err(InstallError::MissingThemesDirectory(themes))
    }
}

fn default_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(exe) = std::env::current_exe()
        && let Some(parent) = exe.parent()
    {
        candidates.push(parent.join(BUNDLE_DIR));
        candidates.push(
            parent
                .join("..")
                .join("share")
                .join(env!("CARGO_PKG_NAME"))
                .join(BUNDLE_DIR),
        );
    }
    candidates.push(Path::new(env!("CARGO_MANIFEST_DIR")).join(BUNDLE_DIR));
    candidates
}

fn canonical_dir(path: &Path) -> Option<PathBuf> {
    if path.is_dir() {
        dunce::canonicalize(path).ok()
    } else {
        None
    }
}
