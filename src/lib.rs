mod config;
mod error;
mod exec;
mod interpreter;
mod location;
mod version;

pub use config::Config;
pub use error::Error;
pub use interpreter::Interpreter;
pub use version::Version;

use log::debug;

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Everything needed to start the companion script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub interpreter: Interpreter,
    pub version: Version,
    pub target: PathBuf,
}

pub struct Launcher {
    config: Config,
    path_var: Option<OsString>,
}

impl Launcher {
    /// Creates a launcher searching the process' own `PATH`.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            path_var: env::var_os("PATH"),
        }
    }

    /// Replaces the search path probed for interpreters.
    pub fn with_path_var(mut self, path_var: Option<OsString>) -> Self {
        self.path_var = path_var;
        self
    }

    /// Resolves the launcher directory from `exe`, locates the companion
    /// script, selects an interpreter and checks its version.
    pub fn prepare(&self, exe: &Path) -> Result<Invocation, Error> {
        let dir = location::script_dir(exe)?;
        let target = location::target_path(&dir, &self.config.target_file_name);

        let interpreter = Interpreter::find(&self.config.candidates[..], self.path_var.as_deref())
            .ok_or_else(|| Error::InterpreterNotFound {
                candidates: self.config.candidates.clone(),
            })?;

        let version = interpreter.version()?;
        debug!("{} reports {}", interpreter.path.display(), version);
        if !version.satisfies(self.config.minimum_version) {
            return Err(Error::UnsupportedVersion {
                interpreter: interpreter.path,
                found: version,
                required: self.config.minimum_version,
            });
        }

        Ok(Invocation {
            interpreter,
            version,
            target,
        })
    }

    /// Prepares the invocation and replaces the current process with it.
    ///
    /// Returns only on failure; the returned error decides the exit code.
    pub fn run<I>(&self, exe: &Path, args: I) -> Error
    where
        I: IntoIterator<Item = OsString>,
    {
        match self.prepare(exe) {
            Ok(invocation) => {
                exec::delegate(&invocation.interpreter.path, &invocation.target, args)
            }
            Err(e) => e,
        }
    }
}
