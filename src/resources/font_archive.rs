//! Locating the font payload inside an extracted release archive.
//!
//! Release archives are not laid out consistently. Some put the fonts in a
//! top-level `ttf/` directory, others nest it one level down under a
//! directory whose name varies between releases (`fonts/ttf/`, `<family>/ttf/`).
use std::path::{Path, PathBuf};

use crate::error::InstallError;

/// Name of the directory holding TrueType files inside an archive.
pub const PAYLOAD_DIR: &str = "ttf";

/// Find the `ttf` directory under an extraction `root`.
///
/// A direct `root/ttf` wins. Otherwise every immediate subdirectory holding a
/// `ttf` directory is a candidate, and the lexicographically first one is
/// chosen.
///
/// # Errors
///
/// Returns [`InstallError::MissingFontFiles`] carrying `root` when there is no
/// candidate, or [`InstallError::Io`] if `root` cannot be read.
pub fn locate_payload(root: &Path) -> Result<PathBuf, InstallError> {
    let direct = root.join(PAYLOAD_DIR);
    if direct.is_dir() {
        return Ok(direct);
    }

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(root).map_err(InstallError::io("read directory", root))? {
        let entry = entry.map_err(InstallError::io("read entry in", root))?;
        let nested = entry.path().join(PAYLOAD_DIR);
        if entry.path().is_dir() && nested.is_dir() {
            candidates.push(nested);
        }
    }
    candidates.sort();

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| InstallError::MissingFontFiles(root.to_path_buf()))
}
