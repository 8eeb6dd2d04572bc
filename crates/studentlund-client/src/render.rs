//! Output rendering for event lists.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};
use studentlund_core::Event;

use crate::error::{ClientError, ClientResult};

/// Text shown when a feed has no events.
pub const NO_EVENTS_TEXT: &str = "No events";

/// Renders events as text blocks, with times shown in `tz`.
///
/// Each block has the time range and summary on the first line, followed
/// by the organizer and, when known, the location.
pub fn render_text<Tz>(events: &[Event], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if events.is_empty() {
        return format!("{}\n", NO_EVENTS_TEXT);
    }

    let mut out = String::new();
    for (i, event) in events.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{}  {}\n",
            time_range(event.date.start, event.date.end, tz),
            event.summary
        ));
        out.push_str(&format!("  {}\n", event.organizer.name));
        if !event.location.is_empty() {
            out.push_str(&format!("  {}\n", event.location));
        }
    }
    out
}

/// Renders events as pretty-printed JSON.
pub fn render_json(events: &[Event]) -> ClientResult<String> {
    serde_json::to_string_pretty(events)
        .map_err(|e| ClientError::Output(format!("failed to serialize events: {}", e)))
}

fn time_range<Tz>(start: DateTime<Utc>, end: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let start = start.with_timezone(tz);
    let end = end.with_timezone(tz);

    if start.date_naive() == end.date_naive() {
        format!("{} - {}", start.format("%Y-%m-%d %H:%M"), end.format("%H:%M"))
    } else {
        format!(
            "{} - {}",
            start.format("%Y-%m-%d %H:%M"),
            end.format("%Y-%m-%d %H:%M")
        )
    }
}
