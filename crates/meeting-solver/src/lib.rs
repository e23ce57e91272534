//! # meeting-solver
//!
//! Deterministic meeting-availability solver for a single day.
//!
//! Given the events already on attendees' calendars and a meeting request,
//! computes every time range in which the meeting fits. Times are minutes from
//! midnight on a `[0, 1440)` timeline.
//!
//! ## Quick start
//!
//! ```rust
//! use meeting_solver::{find_meeting_times, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new("standup", TimeRange::new(60, 120).unwrap(), ["alice"])];
//! let request = MeetingRequest::new(["alice"], 30);
//!
//! let slots = find_meeting_times(&events, &request);
//! assert_eq!(
//!     slots,
//!     vec![TimeRange::new(0, 60).unwrap(), TimeRange::new(120, 1440).unwrap()]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — `TimeRange` value type and day constants
//! - [`event`] — Fixed calendar commitments
//! - [`request`] — Meeting requests (mandatory/optional attendees, duration)
//! - [`freebusy`] — Merge busy ranges and invert them into free ranges
//! - [`query`] — `AvailabilitySolver` with optional-attendee fallback
//! - [`error`] — Error types

pub mod error;
pub mod event;
pub mod freebusy;
pub mod query;
pub mod request;
pub mod time_range;

pub use error::SchedulingError;
pub use event::Event;
pub use query::{find_meeting_times, AttendeePolicy, Availability, AvailabilitySolver};
pub use request::MeetingRequest;
pub use time_range::TimeRange;
