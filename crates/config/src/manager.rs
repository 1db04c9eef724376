//! Configuration manager - main API for config operations

use crate::persistence::ConfigPersistence;
use crate::{Config, ConfigError, ConfigResult};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Main configuration manager
///
/// This is the primary interface for loading and saving configuration.
/// It handles file paths, defaults, and graceful fallback.
pub struct ConfigManager {
    persistence: ConfigPersistence,
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager using the default config directory
    ///
    /// The default directory follows XDG base directory specification:
    /// - Linux: `~/.config/bookrack/`
    /// - macOS: `~/Library/Application Support/bookrack/`
    /// - Windows: `%APPDATA%\bookrack\`
    pub fn new() -> ConfigResult<Self> {
        let config_dir = Self::default_config_dir()?;
        Ok(Self::with_directory(config_dir))
    }

    /// Creates a config manager with a custom config directory
    pub fn with_directory(config_dir: PathBuf) -> Self {
        let config_path = config_dir.join("config.toml");
        let persistence = ConfigPersistence::new(config_path);

        Self {
            persistence,
            config_dir,
        }
    }

    /// Returns the default config directory based on the platform
    fn default_config_dir() -> ConfigResult<PathBuf> {
        ProjectDirs::from("", "", "bookrack")
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
            .ok_or_else(|| ConfigError::PathResolutionError {
                reason: "Could not determine user config directory".to_string(),
            })
    }

    /// Returns the config directory path
    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }

    /// Returns the full config file path
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Loads the configuration from file
    ///
    /// If the file doesn't exist, returns default configuration.
    /// If the file is corrupted, returns an error.
    pub fn load(&self) -> ConfigResult<Config> {
        self.persistence.load()
    }

    /// Loads the configuration, falling back to defaults on any error
    ///
    /// Errors are logged but the function always returns a valid config.
    pub fn load_or_default(&self) -> Config {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            }
        }
    }

    /// Saves the configuration to file atomically
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        self.persistence.save(config)
    }

    /// Generates a default config file if one doesn't exist
    ///
    /// Returns Ok(true) if a new file was created, Ok(false) if one
    /// already exists.
    pub fn initialize(&self) -> ConfigResult<bool> {
        if self.config_path().exists() {
            log::info!(
                "Config file already exists at {}",
                self.config_path().display()
            );
            return Ok(false);
        }

        self.save(&Config::default())?;
        log::info!("Generated default config at {}", self.config_path().display());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_manager_with_custom_directory() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_directory(temp_dir.path().to_path_buf());

        assert_eq!(manager.config_dir(), &temp_dir.path().to_path_buf());
        assert!(manager.config_path().ends_with("config.toml"));
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_directory(temp_dir.path().to_path_buf());

        let config = manager.load_or_default();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_initialize_creates_file_once() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_directory(temp_dir.path().to_path_buf());

        assert!(manager.initialize().unwrap());
        assert!(!manager.initialize().unwrap());
        assert!(manager.config_path().exists());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_directory(temp_dir.path().to_path_buf());

        let config = Config::with_database_path("/tmp/custom.db");
        manager.save(&config).unwrap();

        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn test_load_or_default_on_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_directory(temp_dir.path().to_path_buf());

        std::fs::write(manager.config_path(), "{{{{").unwrap();
        let config = manager.load_or_default();
        assert_eq!(config, Config::default());
    }
}
