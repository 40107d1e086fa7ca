//! # meet-engine
//!
//! Mutual free-time computation across calendar owners, each with their own
//! time zone, working hours, and busy intervals.
//!
//! Every owner's calendar keeps busy data and working hours as wall-clock
//! readings in the owner's own zone. A query names an absolute time window
//! in whatever zone the caller wants answers read in. Free time per owner is
//! "inside working hours, inside the window, not busy"; mutual availability
//! is the intersection of every owner's free time.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{NaiveDateTime, NaiveTime};
//! use chrono_tz::America::Denver;
//! use meet_engine::projection::resolve_local;
//! use meet_engine::{mutual_availability, AvailabilityCalendar, Interval, IntervalSet};
//!
//! fn wall(s: &str) -> NaiveDateTime {
//!     s.parse().unwrap()
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let busy = IntervalSet::from_intervals([Interval::closed(
//!     wall("2020-07-01T10:00:00"),
//!     wall("2020-07-01T12:00:00"),
//! )?]);
//! let hours: Interval<NaiveTime> = Interval::open("09:00:00".parse()?, "17:00:00".parse()?)?;
//! let calendar = AvailabilityCalendar::new(Denver, busy, hours);
//!
//! let query = Interval::open(
//!     resolve_local(Denver, wall("2020-07-01T00:00:00")),
//!     resolve_local(Denver, wall("2020-07-02T00:00:00")),
//! )?;
//! let free = mutual_availability(&[calendar], &query)?;
//! assert_eq!(free.len(), 2); // 09:00-10:00 and 12:00-17:00
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — ranges with explicit open/closed endpoint bounds
//! - [`interval_set`] — canonical disjoint-interval sets and their algebra
//! - [`working_hours`] — recurring daily window → per-day intervals
//! - [`projection`] — wall-clock ↔ absolute-instant conversions per zone
//! - [`calendar`] — one owner's calendar and its free-time computation
//! - [`scheduler`] — intersection fold across owners
//! - [`provider`] — async free/busy fetch boundary
//! - [`request`] — serde request/response schema for integrators
//! - [`error`] — error types

pub mod calendar;
pub mod error;
pub mod interval;
pub mod interval_set;
pub mod projection;
pub mod provider;
pub mod request;
pub mod scheduler;
pub mod working_hours;

pub use calendar::AvailabilityCalendar;
pub use error::EngineError;
pub use interval::{Bound, Interval};
pub use interval_set::IntervalSet;
pub use provider::{
    fetch_availability, fetch_calendars, BusyProvider, OwnerRequest, OwnerSchedule, StaticProvider,
};
pub use request::{AvailabilityRequest, FreeInterval};
pub use scheduler::mutual_availability;
pub use working_hours::expand_working_hours;
