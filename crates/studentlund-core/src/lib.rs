//! Core types: events, organizers, nation names, ordering, tracing

pub mod event;
pub mod nation;
pub mod ordering;
pub mod tracing;

pub use event::{DateRange, Event, Organizer};
pub use nation::{resolve_nation, title_case};
pub use ordering::{chronological, sort_chronologically};
pub use crate::tracing::{init_tracing, TracingConfig, TracingError, TracingOutputFormat};
