use crate::version::Version;

/// Name of the companion script expected next to the launcher.
pub const TARGET_FILE_NAME: &str = "run_benchmark.py";

/// Interpreter binaries probed on the search path, in priority order.
pub const CANDIDATES: &[&str] = &["python3", "python"];

/// Oldest interpreter the companion script runs on.
pub const MINIMUM_VERSION: Version = Version {
    major: 3,
    minor: 10,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub target_file_name: String,
    pub candidates: Vec<String>,
    pub minimum_version: Version,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_file_name: TARGET_FILE_NAME.to_string(),
            candidates: CANDIDATES.iter().map(|c| c.to_string()).collect(),
            minimum_version: MINIMUM_VERSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefers_python3() {
        let config = Config::default();
        assert_eq!(config.candidates, vec!["python3", "python"]);
        assert_eq!(config.target_file_name, "run_benchmark.py");
        assert_eq!(config.minimum_version, Version::new(3, 10));
    }
}
