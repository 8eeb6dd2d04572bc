//! Builds normalized [`Event`]s from calendar entries.

use chrono::{DateTime, Utc};
use studentlund_core::{DateRange, Event};

use crate::error::FeedResult;
use crate::node::CalendarNode;
use crate::organizer::resolve_organizer;

/// Builds an event from a calendar entry, defaulting missing dates to now.
///
/// # Errors
///
/// Fails only if the organizer cannot be decoded.
pub fn build_event(entry: &dyn CalendarNode) -> FeedResult<Event> {
    build_event_at(entry, Utc::now())
}

/// Builds an event from a calendar entry, defaulting missing dates to `now`.
pub fn build_event_at(entry: &dyn CalendarNode, now: DateTime<Utc>) -> FeedResult<Event> {
    let organizer = resolve_organizer(entry)?;

    let date = DateRange::new(
        entry.prop_date("DTSTART", now),
        entry.prop_date("DTEND", now),
        entry.prop_date("LAST-MODIFIED", now),
    );

    // The feed escapes commas in addresses and leaves the backslashes in.
    let location = entry.prop_string("LOCATION", "").replace('\\', "");

    Ok(Event::new(entry.prop_string("UID", ""), date)
        .with_summary(entry.prop_string("SUMMARY", ""))
        .with_description(entry.prop_string("DESCRIPTION", "").trim())
        .with_url(entry.prop_string("URL", ""))
        .with_image_url(entry.prop_string("ATTACH", ""))
        .with_location(location)
        .with_organizer(organizer))
}
