//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the JSON record files.
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `MOODLOG_DATA_DIR` selects where the JSON records live; it defaults
    /// to `.moodlog` in the current directory for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let data_dir = env::var("MOODLOG_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".moodlog"));

        if data_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("MOODLOG_DATA_DIR"));
        }

        Ok(Self { data_dir })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("MOODLOG_DATA_DIR", "/tmp/moodlog-test");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.data_dir, PathBuf::from("/tmp/moodlog-test"));
        env::remove_var("MOODLOG_DATA_DIR");
    }
}
