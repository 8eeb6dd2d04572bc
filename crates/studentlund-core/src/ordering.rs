//! Chronological ordering of events.

use std::cmp::Ordering;

use crate::event::Event;

/// Compares two events by start time, then by end time.
///
/// Events starting at the same instant sort shorter-first. This is a total
/// order and can be passed to any `sort_by`.
pub fn chronological(a: &Event, b: &Event) -> Ordering {
    a.date
        .start
        .cmp(&b.date.start)
        .then_with(|| a.date.end.cmp(&b.date.end))
}

/// Sorts events in place with [`chronological`].
///
/// The sort is stable: events with identical start and end keep their
/// feed order.
pub fn sort_chronologically(events: &mut [Event]) {
    events.sort_by(chronological);
}
