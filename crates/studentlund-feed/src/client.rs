//! HTTP client for the studentlund.se event feeds.

use chrono::{Local, NaiveDate};
use reqwest::{Client, Response};
use studentlund_core::Event;
use tracing::{debug, trace, warn};

use crate::config::{FeedConfig, Granularity};
use crate::error::{FeedError, FeedResult};
use crate::translate::translate;

/// Fetches and translates event feeds.
///
/// Every call performs one request and builds a fresh list of events.
/// Nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    config: FeedConfig,
}

impl FeedClient {
    /// Creates a new feed client with the given configuration.
    pub fn new(config: FeedConfig) -> FeedResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                FeedError::configuration(format!("failed to create HTTP client: {}", e))
                    .with_source(e)
            })?;

        Ok(Self { client, config })
    }

    /// Fetches the events of one feed around `date`.
    pub async fn get(&self, granularity: Granularity, date: NaiveDate) -> FeedResult<Vec<Event>> {
        let url = self.config.feed_url(granularity, date);
        debug!(%granularity, %date, "fetching feed");

        let body = self.fetch(&url).await?;
        let events = translate(&body).map_err(|e| e.with_url(&url))?;

        debug!(%granularity, count = events.len(), "fetched events");
        Ok(events)
    }

    pub async fn get_day(&self, date: NaiveDate) -> FeedResult<Vec<Event>> {
        self.get(Granularity::Day, date).await
    }

    pub async fn get_week(&self, date: NaiveDate) -> FeedResult<Vec<Event>> {
        self.get(Granularity::Week, date).await
    }

    pub async fn get_month(&self, date: NaiveDate) -> FeedResult<Vec<Event>> {
        self.get(Granularity::Month, date).await
    }

    /// Fetches today's events, using the local date.
    pub async fn get_current_day(&self) -> FeedResult<Vec<Event>> {
        self.get_day(today()).await
    }

    /// Fetches this week's events, using the local date.
    pub async fn get_current_week(&self) -> FeedResult<Vec<Event>> {
        self.get_week(today()).await
    }

    /// Fetches this month's events, using the local date.
    pub async fn get_current_month(&self) -> FeedResult<Vec<Event>> {
        self.get_month(today()).await
    }

    /// Returns the configuration.
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    async fn fetch(&self, url: &str) -> FeedResult<String> {
        trace!(url = %url, "sending request");

        let response = self.client.get(url).send().await.map_err(|e| {
            FeedError::fetch(format!("request failed: {}", e))
                .with_url(url)
                .with_source(e)
        })?;

        self.handle_response(url, response).await
    }

    async fn handle_response(&self, url: &str, response: Response) -> FeedResult<String> {
        let status = response.status();
        trace!(status = %status, "received response");

        if !status.is_success() {
            warn!(status = %status, url = %url, "unexpected response status");
            return Err(FeedError::fetch(format!("unexpected status {}", status)).with_url(url));
        }

        response.text().await.map_err(|e| {
            FeedError::fetch(format!("failed to read response: {}", e))
                .with_url(url)
                .with_source(e)
        })
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
