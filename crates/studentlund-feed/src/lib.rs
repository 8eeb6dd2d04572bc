//! studentlund.se event feeds.
//!
//! This crate turns the public iCalendar feeds into normalized events:
//!
//! - [`FeedClient`] - Fetches a day, week or month feed
//! - [`translate`] - Converts a calendar document into events
//! - [`build_event`] - Normalizes a single calendar entry
//! - [`resolve_organizer`] - Attributes an entry to a nation or organizer
//! - [`FeedError`] - Error types for feed operations
//!
//! # Pipeline
//!
//! ```text
//!  GET <base>YYYY-MM-DD
//!          │
//!          ▼
//!  ┌───────────────┐  icalendar::parser
//!  │ VCALENDAR     │──────────────────┐
//!  └───────────────┘                  ▼
//!                          ┌──────────────────┐
//!                          │ VEVENT component │  CalendarNode
//!                          └────────┬─────────┘
//!                                   ▼ build_event()
//!                          ┌──────────────────┐
//!                          │ Event            │  resolve_organizer()
//!                          └────────┬─────────┘
//!                                   ▼
//!                        drop entries without organizer
//! ```
//!
//! # Example
//!
//! ```ignore
//! use studentlund_feed::{FeedClient, FeedConfig};
//!
//! let client = FeedClient::new(FeedConfig::default())?;
//! for event in client.get_current_week().await? {
//!     println!("{} ({})", event.summary, event.organizer.name);
//! }
//! ```

pub mod client;
pub mod config;
pub mod entry;
pub mod error;
pub mod node;
pub mod organizer;
pub mod translate;

pub use client::FeedClient;
pub use config::{FeedConfig, Granularity};
pub use entry::{build_event, build_event_at};
pub use error::{FeedError, FeedErrorCode, FeedResult};
pub use node::{CalendarNode, PropertyNode};
pub use organizer::{ORGANIZER_STRATEGIES, OrganizerStrategy, resolve_organizer, strip_mailto};
pub use translate::{translate, translate_nodes};
