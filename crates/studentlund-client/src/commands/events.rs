//! Event listing commands.

use chrono::Local;
use studentlund_core::sort_chronologically;
use studentlund_feed::{FeedClient, Granularity};
use tracing::debug;

use crate::cli::FeedArgs;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::render::{render_json, render_text};

/// Fetches one feed and prints its events.
pub async fn show(
    granularity: Granularity,
    args: &FeedArgs,
    config: &ClientConfig,
) -> ClientResult<()> {
    let feed_config = config.feed.to_feed_config().map_err(ClientError::Config)?;
    let client = FeedClient::new(feed_config)?;

    let mut events = match args.date {
        Some(date) => client.get(granularity, date).await?,
        None => match granularity {
            Granularity::Day => client.get_current_day().await?,
            Granularity::Week => client.get_current_week().await?,
            Granularity::Month => client.get_current_month().await?,
        },
    };

    if args.sort || config.display.sort {
        debug!(count = events.len(), "sorting events");
        sort_chronologically(&mut events);
    }

    if args.json {
        println!("{}", render_json(&events)?);
    } else {
        print!("{}", render_text(&events, &Local));
    }

    Ok(())
}
