use crate::error::Error;
use crate::version::Version;

use log::{debug, trace};

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Program handed to `<interpreter> -c` to learn its release.
pub const VERSION_QUERY: &str = "import sys; print('%d.%d' % sys.version_info[:2])";

/// An interpreter binary selected from the search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter {
    /// Candidate name it was found under, e.g. `python3`.
    pub name: String,
    /// Location on the search path; this exact file is queried and executed.
    pub path: PathBuf,
}

impl Interpreter {
    /// Picks the first candidate present on the search path `path_var`.
    ///
    /// Candidates are tried in order; for each, the search path directories
    /// are scanned in order. Empty search path entries are ignored.
    pub fn find<S: AsRef<str>>(candidates: &[S], path_var: Option<&OsStr>) -> Option<Self> {
        let dirs: Vec<PathBuf> = path_var
            .map(|paths| {
                env::split_paths(paths)
                    .filter(|dir| !dir.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();

        candidates.iter().find_map(|name| {
            let name = name.as_ref();
            let found = dirs.iter().find_map(|dir| executable_in(dir, name));
            match found {
                Some(path) => {
                    debug!("selected {} at {}", name, path.display());
                    Some(Interpreter {
                        name: name.to_string(),
                        path,
                    })
                }
                None => {
                    trace!("{} not found on search path", name);
                    None
                }
            }
        })
    }

    /// Asks the interpreter for its `major.minor` release.
    pub fn version(&self) -> Result<Version, Error> {
        let output = Command::new(&self.path)
            .arg("-c")
            .arg(VERSION_QUERY)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| Error::VersionQuery {
                interpreter: self.path.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(Error::VersionQuery {
                interpreter: self.path.clone(),
                reason: format!("version query {}", output.status),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        trace!("{} answered {:?}", self.path.display(), stdout);
        Version::parse(&stdout).ok_or_else(|| Error::VersionParse {
            interpreter: self.path.clone(),
            output: stdout.into_owned(),
        })
    }
}

#[cfg(unix)]
fn executable_in(dir: &Path, name: &str) -> Option<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let candidate = dir.join(name);
    let metadata = fs::metadata(&candidate).ok()?;
    if metadata.is_file() && metadata.permissions().mode() & 0o111 != 0 {
        Some(candidate)
    } else {
        None
    }
}

#[cfg(not(unix))]
fn executable_in(dir: &Path, name: &str) -> Option<PathBuf> {
    [name.to_string(), format!("{}.exe", name)]
        .iter()
        .map(|file_name| dir.join(file_name))
        .find(|candidate| fs::metadata(candidate).map(|m| m.is_file()).unwrap_or(false))
}
