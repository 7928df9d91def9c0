use std::path::PathBuf;

pub const LOG_ENV: &str = "ANGULATOR_LOG";
const DEFAULT_LOG_FILE: &str = "angulator.log";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where the debug log is appended. `None` disables logging.
    pub log_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_log_var(std::env::var(LOG_ENV).ok())
    }

    fn from_log_var(value: Option<String>) -> Self {
        let log_path = match value {
            None => Some(PathBuf::from(DEFAULT_LOG_FILE)),
            Some(path) if path.trim().is_empty() => None,
            Some(path) => Some(PathBuf::from(path)),
        };
        Self { log_path }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_log_var(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_file() {
        assert_eq!(
            Config::default().log_path,
            Some(PathBuf::from("angulator.log"))
        );
    }

    #[test]
    fn test_empty_value_disables_logging() {
        assert_eq!(Config::from_log_var(Some(String::new())).log_path, None);
        assert_eq!(Config::from_log_var(Some("  ".to_string())).log_path, None);
    }

    #[test]
    fn test_custom_log_path() {
        let config = Config::from_log_var(Some("/tmp/angles.log".to_string()));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/angles.log")));
    }
}
