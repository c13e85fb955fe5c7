use crate::error::Error;

use log::debug;

use std::fs;
use std::path::{Path, PathBuf};

/// Returns the real directory containing the launcher executable `exe`.
///
/// Symbolic links are followed all the way down and relative paths are
/// resolved against the current working directory, so the result only depends
/// on where the launcher binary actually lives.
pub fn script_dir(exe: &Path) -> Result<PathBuf, Error> {
    let exe = fs::canonicalize(exe).map_err(|source| Error::SelfLocation { source })?;
    let dir = exe
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::SelfLocation {
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} has no parent directory", exe.display()),
            ),
        })?;
    debug!("launcher directory: {}", dir.display());
    Ok(dir)
}

/// Path of the companion script inside the launcher directory.
pub fn target_path(dir: &Path, file_name: &str) -> PathBuf {
    dir.join(file_name)
}
