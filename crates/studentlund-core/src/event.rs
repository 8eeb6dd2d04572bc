//! Event types for the student calendar feed.
//!
//! This module provides the normalized records produced from feed entries:
//! - [`Event`]: one calendar entry ready for display
//! - [`Organizer`]: the nation or person responsible for an entry
//! - [`DateRange`]: start, end and last-modified timestamps

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The organizer of an event.
///
/// An organizer with both fields empty is unresolved. There is no other
/// failure value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organizer {
    /// Display name, usually a nation such as "Lunds Nation".
    pub name: String,
    /// Contact email without any `MAILTO:` prefix.
    pub email: String,
}

impl Organizer {
    /// Creates an organizer with a name and email.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Creates an organizer known only by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }

    /// Returns true if neither a name nor an email could be resolved.
    pub fn is_unresolved(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }
}

/// The time range of an event.
///
/// Fields missing from the feed hold the time the entry was processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl DateRange {
    /// Creates a new date range.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, last_updated: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            last_updated,
        }
    }

    /// Creates a range where every field is the same instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self::new(instant, instant, instant)
    }

    /// Returns the duration of the range in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// A normalized event from the feed.
///
/// Built once per calendar entry and never mutated afterwards; every fetch
/// yields a fresh collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// The source `UID`, verbatim. Empty if the entry had none.
    pub id: String,
    pub summary: String,
    /// Description with surrounding whitespace trimmed.
    pub description: String,
    pub url: String,
    pub image_url: String,
    /// Location with escape backslashes removed.
    pub location: String,
    pub date: DateRange,
    pub organizer: Organizer,
}

impl Event {
    /// Creates an event with the given id and dates. Text fields start empty.
    pub fn new(id: impl Into<String>, date: DateRange) -> Self {
        Self {
            id: id.into(),
            summary: String::new(),
            description: String::new(),
            url: String::new(),
            image_url: String::new(),
            location: String::new(),
            date,
            organizer: Organizer::default(),
        }
    }

    /// Builder method to set the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method to set the event page URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Builder method to set the image URL.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Builder method to set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Builder method to set the organizer.
    pub fn with_organizer(mut self, organizer: Organizer) -> Self {
        self.organizer = organizer;
        self
    }
}
