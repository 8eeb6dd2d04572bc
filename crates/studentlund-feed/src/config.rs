//! Feed client configuration.

use std::fmt;
use std::time::Duration;

use chrono::NaiveDate;
use url::Url;

/// Day feed, completed with a `YYYY-MM-DD` date.
pub const DAY_FEED_URL: &str =
    "https://www.studentlund.se/event/idag/?ical=1&tribe_display=day&tribe-bar-date=";

/// Week feed, completed with a `YYYY-MM-DD` date.
pub const WEEK_FEED_URL: &str =
    "https://www.studentlund.se/event/vecka/?ical=1&tribe_display=week&tribe-bar-date=";

/// Month feed, completed with a `YYYY-MM-DD` date.
pub const MONTH_FEED_URL: &str =
    "https://www.studentlund.se/event/manad/?ical=1&tribe_display=month&tribe-bar-date=";

/// How much of the calendar a feed covers around its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Day,
    Week,
    Month,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [Self::Day, Self::Week, Self::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for [`FeedClient`](crate::FeedClient).
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Base URL of the day feed. The date is appended verbatim.
    pub day_url: String,
    pub week_url: String,
    pub month_url: String,

    /// Request timeout.
    pub timeout: Duration,

    /// User agent string.
    pub user_agent: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedConfig {
    /// Default timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Creates a configuration pointing at the public studentlund.se feeds.
    pub fn new() -> Self {
        Self {
            day_url: DAY_FEED_URL.to_string(),
            week_url: WEEK_FEED_URL.to_string(),
            month_url: MONTH_FEED_URL.to_string(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            user_agent: format!("studentlund/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Replaces the base URL for one granularity.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn with_base_url(
        mut self,
        granularity: Granularity,
        url: impl AsRef<str>,
    ) -> Result<Self, url::ParseError> {
        let url = url.as_ref();
        Url::parse(url)?;
        *self.base_url_mut(granularity) = url.to_string();
        Ok(self)
    }

    /// Returns the base URL for a granularity.
    pub fn base_url(&self, granularity: Granularity) -> &str {
        match granularity {
            Granularity::Day => &self.day_url,
            Granularity::Week => &self.week_url,
            Granularity::Month => &self.month_url,
        }
    }

    fn base_url_mut(&mut self, granularity: Granularity) -> &mut String {
        match granularity {
            Granularity::Day => &mut self.day_url,
            Granularity::Week => &mut self.week_url,
            Granularity::Month => &mut self.month_url,
        }
    }

    /// Builds the feed URL for a granularity and date.
    pub fn feed_url(&self, granularity: Granularity, date: NaiveDate) -> String {
        format!("{}{}", self.base_url(granularity), date.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 5).unwrap()
    }

    #[test]
    fn default_feed_urls() {
        let config = FeedConfig::default();
        assert_eq!(
            config.feed_url(Granularity::Day, date()),
            "https://www.studentlund.se/event/idag/?ical=1&tribe_display=day&tribe-bar-date=2025-02-05"
        );
        assert_eq!(
            config.feed_url(Granularity::Week, date()),
            "https://www.studentlund.se/event/vecka/?ical=1&tribe_display=week&tribe-bar-date=2025-02-05"
        );
        assert_eq!(
            config.feed_url(Granularity::Month, date()),
            "https://www.studentlund.se/event/manad/?ical=1&tribe_display=month&tribe-bar-date=2025-02-05"
        );
    }

    #[test]
    fn date_is_zero_padded() {
        let config = FeedConfig::default();
        let url = config.feed_url(Granularity::Day, NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());
        assert!(url.ends_with("tribe-bar-date=2025-01-03"));
    }

    #[test]
    fn defaults() {
        let config = FeedConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("studentlund/"));
    }

    #[test]
    fn builder_methods() {
        let config = FeedConfig::new()
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test-agent")
            .with_base_url(Granularity::Week, "http://127.0.0.1:1234/week?d=")
            .unwrap();

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(
            config.feed_url(Granularity::Week, date()),
            "http://127.0.0.1:1234/week?d=2025-02-05"
        );
        assert_eq!(config.base_url(Granularity::Day), DAY_FEED_URL);
    }

    #[test]
    fn invalid_base_url() {
        assert!(
            FeedConfig::new()
                .with_base_url(Granularity::Day, "not a url")
                .is_err()
        );
    }

    #[test]
    fn granularity_names() {
        let names: Vec<_> = Granularity::ALL.iter().map(|g| g.to_string()).collect();
        assert_eq!(names, ["day", "week", "month"]);
    }
}
