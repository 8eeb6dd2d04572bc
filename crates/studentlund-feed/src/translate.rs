//! Translation of whole calendar documents into events.

use chrono::{DateTime, Utc};
use icalendar::parser::{read_calendar, unfold};
use studentlund_core::Event;
use tracing::debug;

use crate::entry::build_event_at;
use crate::error::{FeedError, FeedResult};
use crate::node::{CalendarNode, EVENT_COMPONENT};

/// Parses an iCalendar document and builds one event per `VEVENT`.
///
/// Events keep document order. Entries that cannot be attributed to an
/// organizer are dropped.
///
/// # Errors
///
/// Returns `ParseFailed` if the document is not a calendar, and
/// `OrganizerDecode` if any entry has an undecodable organizer name. In
/// the latter case no events are returned.
pub fn translate(document: &str) -> FeedResult<Vec<Event>> {
    let unfolded = unfold(document);

    if !unfolded
        .trim_start_matches(['\u{feff}', ' ', '\t', '\r', '\n'])
        .starts_with("BEGIN:")
    {
        return Err(FeedError::parse("document is not in iCalendar format"));
    }

    let calendar = read_calendar(&unfolded)
        .map_err(|e| FeedError::parse(format!("invalid calendar: {}", e)))?;

    let entries = calendar
        .components
        .iter()
        .filter(|component| component.name == EVENT_COMPONENT);

    translate_nodes(entries, Utc::now())
}

/// Builds events from already parsed entries.
///
/// Missing dates default to `now`.
pub fn translate_nodes<'a, N>(
    entries: impl IntoIterator<Item = &'a N>,
    now: DateTime<Utc>,
) -> FeedResult<Vec<Event>>
where
    N: CalendarNode + 'a,
{
    let mut events = Vec::new();
    let mut dropped = 0usize;

    for entry in entries {
        let event = build_event_at(entry, now)?;
        if event.organizer.name.is_empty() {
            debug!(id = %event.id, summary = %event.summary, "dropping event without organizer");
            dropped += 1;
            continue;
        }
        events.push(event);
    }

    debug!(events = events.len(), dropped, "translated feed entries");
    Ok(events)
}
