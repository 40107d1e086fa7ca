//! Serde-facing request and response schema for integrators.
//!
//! The engine itself works on typed intervals; this module is the surface an
//! HTTP route or CLI binds to. Busy intervals arrive closed on both ends,
//! the way calendar providers report free/busy periods, and the query window
//! defaults to open bounds. Zone identifiers are carried as strings and
//! validated here, before any computation starts.

use chrono::{DateTime, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::calendar::AvailabilityCalendar;
use crate::error::{EngineError, Result};
use crate::interval::{Bound, Interval};
use crate::interval_set::IntervalSet;
use crate::projection;
use crate::scheduler::mutual_availability;

/// Bound kinds for both endpoints of a range, as written in requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsSpec {
    #[default]
    Open,
    Closed,
    ClosedOpen,
    OpenClosed,
}

impl BoundsSpec {
    fn endpoint_bounds(self) -> (Bound, Bound) {
        match self {
            BoundsSpec::Open => (Bound::Open, Bound::Open),
            BoundsSpec::Closed => (Bound::Closed, Bound::Closed),
            BoundsSpec::ClosedOpen => (Bound::Closed, Bound::Open),
            BoundsSpec::OpenClosed => (Bound::Open, Bound::Closed),
        }
    }

    fn of(lower: Bound, upper: Bound) -> Self {
        match (lower, upper) {
            (Bound::Open, Bound::Open) => BoundsSpec::Open,
            (Bound::Closed, Bound::Closed) => BoundsSpec::Closed,
            (Bound::Closed, Bound::Open) => BoundsSpec::ClosedOpen,
            (Bound::Open, Bound::Closed) => BoundsSpec::OpenClosed,
        }
    }
}

fn parse_zone(zone: &str) -> Result<Tz> {
    zone.parse()
        .map_err(|_| EngineError::InvalidTimezone(zone.to_string()))
}

/// The query window: two wall-clock readings anchored in the display zone
/// the caller wants answers expressed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSpec {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub zone: String,
    #[serde(default)]
    pub bounds: BoundsSpec,
}

impl WindowSpec {
    /// Anchor the window in its zone. Inverted or empty windows are rejected
    /// here, before any calendar data is touched.
    pub fn to_range(&self) -> Result<Interval<DateTime<Tz>>> {
        let zone = parse_zone(&self.zone)?;
        let (lower_bound, upper_bound) = self.bounds.endpoint_bounds();
        Interval::new(
            projection::resolve_local(zone, self.start),
            lower_bound,
            projection::resolve_local(zone, self.end),
            upper_bound,
        )
        .map_err(|err| EngineError::InvalidQuery(err.to_string()))
    }
}

/// A recurring daily time-of-day window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeWindowSpec {
    pub start: NaiveTime,
    pub end: NaiveTime,
    #[serde(default)]
    pub bounds: BoundsSpec,
}

impl TimeWindowSpec {
    pub fn to_interval(&self) -> Result<Interval<NaiveTime>> {
        let (lower_bound, upper_bound) = self.bounds.endpoint_bounds();
        Interval::new(self.start, lower_bound, self.end, upper_bound)
    }
}

/// One busy period in the owner's wall clock, inclusive on both ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusySpec {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// One owner with schedule data supplied inline, no provider round-trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerSpec {
    pub id: String,
    pub zone: String,
    pub working_hours: TimeWindowSpec,
    #[serde(default)]
    pub busy: Vec<BusySpec>,
}

impl OwnerSpec {
    pub fn to_calendar(&self) -> Result<AvailabilityCalendar> {
        let zone = parse_zone(&self.zone)?;
        let mut busy = Vec::with_capacity(self.busy.len());
        for period in &self.busy {
            busy.push(Interval::closed(period.start, period.end)?);
        }
        Ok(AvailabilityCalendar::new(
            zone,
            IntervalSet::from_intervals(busy),
            self.working_hours.to_interval()?,
        ))
    }
}

/// A complete availability request, ready for a route or CLI to bind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    pub window: WindowSpec,
    pub owners: Vec<OwnerSpec>,
}

impl AvailabilityRequest {
    /// Validate the request and compute mutual availability.
    pub fn evaluate(&self) -> Result<Vec<FreeInterval>> {
        let range = self.window.to_range()?;
        let mut calendars = Vec::with_capacity(self.owners.len());
        for owner in &self.owners {
            calendars.push(owner.to_calendar()?);
        }
        let mutual = mutual_availability(&calendars, &range)?;
        Ok(mutual.iter().map(FreeInterval::from).collect())
    }
}

/// One mutually free interval, instants expressed in the caller's display
/// zone with explicit boundary kinds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreeInterval {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub bounds: BoundsSpec,
}

impl From<&Interval<DateTime<Tz>>> for FreeInterval {
    fn from(interval: &Interval<DateTime<Tz>>) -> Self {
        Self {
            start: interval.lower().clone(),
            end: interval.upper().clone(),
            bounds: BoundsSpec::of(interval.lower_bound(), interval.upper_bound()),
        }
    }
}
