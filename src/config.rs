//! Configuration management module.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub rating: RatingConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Local session storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// File name of the key-value store inside the data directory.
    pub session_file: String,
    /// Key holding the serialized current user.
    pub session_key: String,
}

/// Rating submission timings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingConfig {
    /// Delay before the confirmation screen appears.
    pub submit_delay_ms: u64,
    /// Delay between confirmation and redirect to the dashboard.
    pub redirect_delay_ms: u64,
}

/// UI preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub dark_mode: bool,
    pub toast_duration_secs: u64,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is not set.
    pub level: String,
    /// Write a daily rolling log file next to the session data.
    pub file_logging: bool,
}

const MAX_DELAY_MS: u64 = 60_000;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl AppConfig {
    /// Get config file path (platform config dir, falling back to the executable directory).
    pub fn default_path() -> PathBuf {
        match ProjectDirs::from("id", "EduRate", "EduRate") {
            Some(dirs) => dirs.config_dir().join("config.toml"),
            None => std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."))
                .join("config.toml"),
        }
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => ConfigLoadResult::Loaded(config),
                    Err(e) => ConfigLoadResult::Invalid(e),
                },
                Err(e) => ConfigLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.session_file.trim().is_empty() {
            return Err(ConfigError::Validation("Session file name cannot be empty".to_string()));
        }
        if self.storage.session_key.trim().is_empty() {
            return Err(ConfigError::Validation("Session key cannot be empty".to_string()));
        }
        if self.rating.submit_delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "Submit delay cannot exceed {MAX_DELAY_MS} ms"
            )));
        }
        if self.rating.redirect_delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "Redirect delay cannot exceed {MAX_DELAY_MS} ms"
            )));
        }
        if self.ui.toast_duration_secs < 1 {
            return Err(ConfigError::Validation(
                "Toast duration must be at least 1 second".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "Log level must be one of: {}",
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    /// Save configuration to file, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl RatingConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

impl UiConfig {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_duration_secs)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_file: "session.json".to_string(),
            session_key: "edurate_user".to_string(),
        }
    }
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1000,
            redirect_delay_ms: 2000,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            toast_duration_secs: 4,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_logging: true,
        }
    }
}

/// Resolved on-disk locations for config, session data and logs.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub config_file: PathBuf,
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl AppPaths {
    /// Resolve paths for the current run.
    ///
    /// Dev mode keeps everything in the working directory. An explicit data
    /// directory overrides the platform default for session data and logs.
    pub fn resolve(dev: bool, data_dir: Option<PathBuf>) -> Self {
        if dev {
            let data_dir = data_dir.unwrap_or_else(|| PathBuf::from("."));
            return Self {
                config_file: PathBuf::from("config.toml"),
                log_dir: data_dir.join("logs"),
                data_dir,
            };
        }

        let dirs = ProjectDirs::from("id", "EduRate", "EduRate");
        let data_dir = data_dir
            .or_else(|| dirs.as_ref().map(|d| d.data_dir().to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            config_file: AppConfig::default_path(),
            log_dir: data_dir.join("logs"),
            data_dir,
        }
    }

    /// Path of the session key-value file.
    pub fn session_file(&self, storage: &StorageConfig) -> PathBuf {
        self.data_dir.join(&storage.session_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_session_key() {
        let mut config = AppConfig::default();
        config.storage.session_key = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_delay_bounds() {
        let mut config = AppConfig::default();

        config.rating.redirect_delay_ms = MAX_DELAY_MS + 1;
        assert!(config.validate().is_err());

        config.rating.redirect_delay_ms = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        config.logging.level = "DEBUG".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_toast_duration() {
        let mut config = AppConfig::default();
        config.ui.toast_duration_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(matches!(AppConfig::try_load(&path), ConfigLoadResult::Missing));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.rating.submit_delay_ms = 250;
        config.save(&path).unwrap();

        match AppConfig::try_load(&path) {
            ConfigLoadResult::Loaded(loaded) => assert_eq!(loaded.rating.submit_delay_ms, 250),
            other => panic!("unexpected load result: {other:?}"),
        }
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ndark_mode = true\ntoast_duration_secs = 2\n").unwrap();

        match AppConfig::try_load(&path) {
            ConfigLoadResult::Loaded(config) => {
                assert!(config.ui.dark_mode);
                assert_eq!(config.storage.session_key, "edurate_user");
                assert_eq!(config.rating.redirect_delay_ms, 2000);
            }
            other => panic!("unexpected load result: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui\n").unwrap();
        assert!(matches!(
            AppConfig::try_load(&path),
            ConfigLoadResult::Invalid(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_dev_paths() {
        let paths = AppPaths::resolve(true, None);
        assert_eq!(paths.config_file, PathBuf::from("config.toml"));
        assert_eq!(
            paths.session_file(&StorageConfig::default()),
            PathBuf::from(".").join("session.json")
        );
    }
}
