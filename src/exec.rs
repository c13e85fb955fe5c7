use crate::error::Error;

use log::debug;

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

/// Hands the process over to `interpreter target args...`.
///
/// On Unix the launcher's process image is replaced, so the companion script
/// inherits the pid, the standard streams and ultimately the exit status.
/// The function only returns if the replacement could not happen.
#[cfg(unix)]
pub fn delegate<I>(interpreter: &Path, target: &Path, args: I) -> Error
where
    I: IntoIterator<Item = OsString>,
{
    use std::os::unix::process::CommandExt;

    let mut command = build_command(interpreter, target, args);
    debug!("exec {:?}", command);
    let source = command.exec();
    Error::Exec {
        interpreter: interpreter.to_path_buf(),
        source,
    }
}

/// Runs `interpreter target args...` and exits with its status.
///
/// Without process replacement the child's exit code is forwarded verbatim
/// and nothing is written after the child terminates. A child that ends
/// without an exit code maps to 1.
#[cfg(not(unix))]
pub fn delegate<I>(interpreter: &Path, target: &Path, args: I) -> Error
where
    I: IntoIterator<Item = OsString>,
{
    let mut command = build_command(interpreter, target, args);
    debug!("spawn {:?}", command);
    match command.status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(source) => Error::Exec {
            interpreter: interpreter.to_path_buf(),
            source,
        },
    }
}

fn build_command<I>(interpreter: &Path, target: &Path, args: I) -> Command
where
    I: IntoIterator<Item = OsString>,
{
    let mut command = Command::new(interpreter);
    command.arg(target).args(args);
    command
}
