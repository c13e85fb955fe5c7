extern crate run_benchmark;

use run_benchmark::{Config, Error, Launcher};

use std::env;
use std::ffi::OsString;
use std::process;

/// Log filter for the launcher's own diagnostics; silent unless set.
const LOG_ENV: &str = "RUN_BENCHMARK_LOG";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "off"))
        .format_timestamp(None)
        .init();

    let args: Vec<OsString> = env::args_os().skip(1).collect();
    let err = match env::current_exe() {
        Ok(exe) => Launcher::new(Config::default()).run(&exe, args),
        Err(source) => Error::SelfLocation { source },
    };

    eprintln!("{}", err);
    process::exit(err.exit_code());
}
