//! File-system helpers shared by the font and theme tasks.
use std::path::{Path, PathBuf};

use crate::error::InstallError;

/// Create `dir` and any missing ancestors. Succeeds if it already exists.
///
/// # Errors
///
/// Returns [`InstallError::Io`] if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> Result<(), InstallError> {
    std::fs::create_dir_all(dir).map_err(InstallError::io("create directory", dir))
}

/// Remove an existing file or symlink at `path`, including broken symlinks.
///
/// Does nothing if `path` does not exist.
///
/// # Errors
///
/// Returns [`InstallError::Io`] if the path exists but cannot be removed.
pub fn remove_existing(path: &Path) -> Result<(), InstallError> {
    if path.symlink_metadata().is_ok() {
        std::fs::remove_file(path).map_err(InstallError::io("remove existing", path))?;
    }
    Ok(())
}

/// Copy `src` into `dst_dir` under the same file name, removing any file
/// already there first. Returns the destination path.
///
/// # Errors
///
/// Returns [`InstallError::Io`] if the existing file cannot be removed or the
/// copy fails.
pub fn replace_into(src: &Path, dst_dir: &Path) -> Result<PathBuf, InstallError> {
    let name = src
        .file_name()
        .ok_or_else(|| InstallError::Io {
            action: "copy",
            path: src.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "no file name"),
        })?;
    let target = dst_dir.join(name);
    remove_existing(&target)?;
    std::fs::copy(src, &target).map_err(InstallError::io("copy", &target))?;
    Ok(target)
}

/// Regular files directly inside `dir` whose extension matches `extension`
/// case-insensitively, sorted by file name.
///
/// # Errors
///
/// Returns [`InstallError::Io`] if the directory cannot be read.
pub fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, InstallError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(InstallError::io("read directory", dir))? {
        let entry = entry.map_err(InstallError::io("read entry in", dir))?;
        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
