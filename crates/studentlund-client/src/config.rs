//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/studentlund/config.toml` by default. Every key is optional:
//!
//! ```toml
//! [feed]
//! timeout_secs = 10
//! user_agent = "my-agent/1.0"
//! week_url = "https://www.studentlund.se/event/vecka/?ical=1&tribe_display=week&tribe-bar-date="
//!
//! [display]
//! sort = true
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use studentlund_feed::{FeedConfig, Granularity};

/// Configuration for the studentlund client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Feed settings.
    pub feed: FeedSettings,

    /// Display settings.
    pub display: DisplaySettings,
}

/// Feed locations and HTTP settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSettings {
    /// Overrides the day feed base URL.
    pub day_url: Option<String>,

    /// Overrides the week feed base URL.
    pub week_url: Option<String>,

    /// Overrides the month feed base URL.
    pub month_url: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Overrides the HTTP user agent.
    pub user_agent: Option<String>,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            day_url: None,
            week_url: None,
            month_url: None,
            timeout_secs: FeedConfig::DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

/// Display settings for output formatting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Always sort events chronologically.
    pub sort: bool,
}

impl ClientConfig {
    /// Loads configuration from the default path.
    ///
    /// A missing file yields the default configuration.
    pub fn load() -> Result<Self, String> {
        Self::load_if_exists(&Self::default_path())
    }

    /// Loads configuration from `path`, or the defaults if it does not exist.
    pub fn load_if_exists(path: &Path) -> Result<Self, String> {
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("studentlund")
    }
}

impl FeedSettings {
    /// Converts to a feed client configuration.
    pub fn to_feed_config(&self) -> Result<FeedConfig, String> {
        let mut config =
            FeedConfig::new().with_timeout(Duration::from_secs(self.timeout_secs));

        if let Some(ref user_agent) = self.user_agent {
            config = config.with_user_agent(user_agent);
        }

        let overrides = [
            (Granularity::Day, &self.day_url),
            (Granularity::Week, &self.week_url),
            (Granularity::Month, &self.month_url),
        ];
        for (granularity, url) in overrides {
            if let Some(url) = url {
                config = config
                    .with_base_url(granularity, url)
                    .map_err(|e| format!("invalid {} feed URL {:?}: {}", granularity, url, e))?;
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.feed.timeout_secs, 30);
        assert!(config.feed.day_url.is_none());
        assert!(!config.display.sort);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load_if_exists(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.feed.timeout_secs, 30);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::load_from(&dir.path().join("config.toml")).unwrap_err();
        assert!(err.starts_with("failed to read config"));
    }

    #[test]
    fn partial_file_fills_defaults() {
        let file = write_config("[display]\nsort = true\n");
        let config = ClientConfig::load_from(file.path()).unwrap();

        assert!(config.display.sort);
        assert_eq!(config.feed.timeout_secs, 30);
        assert!(config.feed.user_agent.is_none());
    }

    #[test]
    fn feed_section() {
        let file = write_config(
            r#"
[feed]
timeout_secs = 5
user_agent = "test-agent"
day_url = "http://localhost:8080/idag/?tribe-bar-date="
"#,
        );
        let config = ClientConfig::load_from(file.path()).unwrap();
        let feed = config.feed.to_feed_config().unwrap();

        assert_eq!(feed.timeout, Duration::from_secs(5));
        assert_eq!(feed.user_agent, "test-agent");
        assert_eq!(
            feed.base_url(Granularity::Day),
            "http://localhost:8080/idag/?tribe-bar-date="
        );
        assert_eq!(
            feed.base_url(Granularity::Month),
            studentlund_feed::config::MONTH_FEED_URL
        );
    }

    #[test]
    fn invalid_toml_errors() {
        let file = write_config("[feed\ntimeout_secs = 5");
        let err = ClientConfig::load_from(file.path()).unwrap_err();
        assert!(err.starts_with("failed to parse config"));
    }

    #[test]
    fn invalid_feed_url_errors() {
        let settings = FeedSettings {
            week_url: Some("vecka".to_string()),
            ..FeedSettings::default()
        };
        let err = settings.to_feed_config().unwrap_err();
        assert!(err.contains("invalid week feed URL"));
    }

    #[test]
    fn serializes_to_toml() {
        let toml_str = toml::to_string_pretty(&ClientConfig::default()).unwrap();
        assert!(toml_str.contains("[feed]"));
        assert!(toml_str.contains("timeout_secs = 30"));
        assert!(toml_str.contains("[display]"));
    }
}
