use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog;
use crate::selector::DEFAULT_HISTORY_WINDOW;

const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "askeka.log";

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language selected when a chat starts
    pub default_language: String,

    /// Artificial "thinking" delay before a reply is shown
    pub thinking_delay_ms: u64,

    /// Trailing conversation entries consulted for concept matches
    pub history_window: usize,

    /// Fixed seed for template choice; random when unset
    pub seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set
    pub log_level: Option<String>,

    /// UI preferences
    pub ui: UiConfig,

    /// Askeka home directory, derived from the config file location
    #[serde(skip)]
    pub home: PathBuf,

    /// Problems fixed up while loading, logged once logging is set up
    #[serde(skip)]
    warnings: Vec<String>,
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub show_timestamps: bool,
    /// Messages kept on screen; the conversation log itself keeps everything
    pub max_messages: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_timestamps: true,
            max_messages: 200,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let home = dirs::home_dir()
            .map(|h| h.join(".askeka"))
            .unwrap_or_else(|| PathBuf::from(".askeka"));

        Config {
            default_language: catalog::DEFAULT_LANGUAGE.to_string(),
            thinking_delay_ms: 2000,
            history_window: DEFAULT_HISTORY_WINDOW,
            seed: None,
            log_level: None,
            ui: UiConfig::default(),
            home,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Default config file location (~/.askeka/config.toml)
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".askeka").join(CONFIG_FILE))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        let home = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        fs::create_dir_all(&home).context("Failed to create askeka directory")?;

        let mut config = if path.exists() {
            let content = fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")?
        } else {
            let config = Config::default();
            let content = toml::to_string_pretty(&config).context("Failed to serialize config")?;
            fs::write(path, content).context("Failed to write default config file")?;
            config
        };

        config.home = home;
        config.normalize();
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }

    /// Values that were invalid in the file and replaced with defaults
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Where the chat UI writes its log
    pub fn log_path(&self) -> PathBuf {
        self.home.join(LOG_FILE)
    }

    /// Replace values that would make the assistant misbehave
    fn normalize(&mut self) {
        match catalog::language(&self.default_language) {
            Ok(lang) => self.default_language = lang.code.to_string(),
            Err(err) => {
                self.warnings
                    .push(format!("invalid default_language in config, using English: {err}"));
                self.default_language = catalog::DEFAULT_LANGUAGE.to_string();
            }
        }
        if self.history_window == 0 {
            self.warnings.push(format!(
                "history_window must be at least 1, using {DEFAULT_HISTORY_WINDOW}"
            ));
            self.history_window = DEFAULT_HISTORY_WINDOW;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.thinking_delay_ms, 2000);
        assert_eq!(config.history_window, 3);
        assert_eq!(config.home, dir.path());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "thinking_delay_ms = 10\nseed = 9\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.thinking_delay(), Duration::from_millis(10));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.default_language, "english");
        assert!(config.ui.show_timestamps);
    }

    #[test]
    fn invalid_values_are_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_language = \"klingon\"\nhistory_window = 0\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_language, "english");
        assert_eq!(config.history_window, DEFAULT_HISTORY_WINDOW);
        assert_eq!(config.warnings().len(), 2);
        assert!(config.warnings()[0].contains("klingon"));
    }

    #[test]
    fn valid_file_has_no_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_language = \"Tamil\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.warnings().is_empty());
        assert_eq!(config.default_language, "tamil");
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::load_from(&path).unwrap();
        config.default_language = "tamil".to_string();
        config.ui.max_messages = 50;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "thinking_delay_ms = \"soon\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
