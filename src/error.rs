use crate::version::Version;

use itertools::Itertools;

use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    SelfLocation {
        source: io::Error,
    },
    InterpreterNotFound {
        candidates: Vec<String>,
    },
    VersionQuery {
        interpreter: PathBuf,
        reason: String,
    },
    VersionParse {
        interpreter: PathBuf,
        output: String,
    },
    UnsupportedVersion {
        interpreter: PathBuf,
        found: Version,
        required: Version,
    },
    Exec {
        interpreter: PathBuf,
        source: io::Error,
    },
}

impl Error {
    /// Exit status the launcher terminates with when it fails with this error.
    ///
    /// A failed process replacement follows the shell's `exec` convention.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Exec { source, .. } if source.kind() == io::ErrorKind::NotFound => 127,
            Error::Exec { .. } => 126,
            _ => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::SelfLocation { ref source } => {
                write!(f, "error: cannot resolve launcher location: {}", source)
            }
            Error::InterpreterNotFound { ref candidates } => write!(
                f,
                "error: no Python interpreter found on PATH (tried {})",
                candidates.iter().join(", ")
            ),
            Error::VersionQuery {
                ref interpreter,
                ref reason,
            } => write!(
                f,
                "error: failed to query version of {}: {}",
                interpreter.display(),
                reason
            ),
            Error::VersionParse {
                ref interpreter,
                ref output,
            } => write!(
                f,
                "error: unrecognized version output from {}: {:?}",
                interpreter.display(),
                output.trim()
            ),
            Error::UnsupportedVersion {
                ref interpreter,
                found,
                required,
            } => write!(
                f,
                "error: Python >= {} is required, but {} is {}",
                required,
                interpreter.display(),
                found
            ),
            Error::Exec {
                ref interpreter,
                ref source,
            } => write!(
                f,
                "error: failed to execute {}: {}",
                interpreter.display(),
                source
            ),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::SelfLocation { source } | Error::Exec { source, .. } => Some(source),
            _ => None,
        }
    }
}
