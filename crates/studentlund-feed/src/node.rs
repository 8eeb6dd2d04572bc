//! Read-only view over parsed calendar entries.
//!
//! The normalization pipeline only needs named property lookups with
//! defaults, so it works against [`CalendarNode`] and [`PropertyNode`]
//! instead of a concrete parser type. The generic component tree from
//! `icalendar::parser` implements both.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use icalendar::parser::{Component, Property};
use icalendar::{CalendarDateTime, DatePerhapsTime};

/// Component name of calendar entries that become events.
pub const EVENT_COMPONENT: &str = "VEVENT";

/// A property that can carry parameters, such as `ORGANIZER;CN=...:MAILTO:...`.
pub trait PropertyNode {
    /// The raw property value.
    fn value(&self) -> &str;

    /// Returns the named parameter, or `default` if it is absent.
    fn parameter(&self, name: &str, default: &str) -> String;

    /// Returns true if the named parameter is present.
    fn has_parameter(&self, name: &str) -> bool;
}

/// A calendar entry with named, single-valued properties.
pub trait CalendarNode {
    /// Returns the named property as text, or `default` if it is absent.
    fn prop_string(&self, name: &str, default: &str) -> String;

    /// Returns the named property as a timestamp, or `default` if it is
    /// absent or not a date.
    fn prop_date(&self, name: &str, default: DateTime<Utc>) -> DateTime<Utc>;

    /// Returns the named property with its parameters.
    fn child_by_name(&self, name: &str) -> Option<&dyn PropertyNode>;
}

impl PropertyNode for Property<'_> {
    fn value(&self) -> &str {
        self.val.as_ref()
    }

    fn parameter(&self, name: &str, default: &str) -> String {
        self.params
            .iter()
            .find(|param| param.key == name)
            .and_then(|param| param.val.as_ref())
            .map(|val| val.to_string())
            .unwrap_or_else(|| default.to_string())
    }

    fn has_parameter(&self, name: &str) -> bool {
        self.params.iter().any(|param| param.key == name)
    }
}

impl CalendarNode for Component<'_> {
    fn prop_string(&self, name: &str, default: &str) -> String {
        self.find_prop(name)
            .map(|prop| prop.val.to_string())
            .unwrap_or_else(|| default.to_string())
    }

    fn prop_date(&self, name: &str, default: DateTime<Utc>) -> DateTime<Utc> {
        self.find_prop(name)
            .and_then(|prop| DatePerhapsTime::try_from(prop).ok())
            .map(to_utc)
            .unwrap_or(default)
    }

    fn child_by_name(&self, name: &str) -> Option<&dyn PropertyNode> {
        self.find_prop(name).map(|prop| prop as &dyn PropertyNode)
    }
}

/// Converts an iCalendar date or datetime to UTC.
///
/// All-day dates become midnight UTC. `TZID`-qualified times are resolved
/// in the IANA zone they name, taking the earlier instant when a local time
/// is ambiguous. Floating times, unknown zones and local times that fall in
/// a DST gap are read as UTC wall-clock time.
fn to_utc(dt: DatePerhapsTime) -> DateTime<Utc> {
    match dt {
        DatePerhapsTime::Date(date) => date.and_time(chrono::NaiveTime::MIN).and_utc(),
        DatePerhapsTime::DateTime(cdt) => match cdt {
            CalendarDateTime::Utc(dt) => dt,
            CalendarDateTime::Floating(naive) => Utc.from_utc_datetime(&naive),
            CalendarDateTime::WithTimezone { date_time, tzid } => tzid
                .trim_matches('"')
                .parse::<Tz>()
                .ok()
                .and_then(|tz| tz.from_local_datetime(&date_time).earliest())
                .map(|local| local.with_timezone(&Utc))
                .unwrap_or_else(|| Utc.from_utc_datetime(&date_time)),
        },
    }
}
