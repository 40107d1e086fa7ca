//! One owner's calendar and its free-time computation.

use chrono::{DateTime, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::Result;
use crate::interval::Interval;
use crate::interval_set::IntervalSet;
use crate::projection;
use crate::working_hours::expand_working_hours;

/// A per-owner calendar. `busy` and `working_hours` are wall-clock readings
/// in `zone`; the zone only matters once free time is computed against a
/// query expressed in some other frame. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityCalendar {
    pub zone: Tz,
    pub busy: IntervalSet<NaiveDateTime>,
    pub working_hours: Interval<NaiveTime>,
}

impl AvailabilityCalendar {
    pub fn new(
        zone: Tz,
        busy: IntervalSet<NaiveDateTime>,
        working_hours: Interval<NaiveTime>,
    ) -> Self {
        Self {
            zone,
            busy,
            working_hours,
        }
    }

    /// Free time within `query`: inside working hours, inside the query
    /// window, and not busy.
    ///
    /// The returned intervals report wall-clock times in the zone the query
    /// was expressed in (the zone of its lower endpoint), even though busy
    /// and working-hours data live in the owner's own zone.
    pub fn free_range_set(
        &self,
        query: &Interval<DateTime<Tz>>,
    ) -> Result<IntervalSet<DateTime<Tz>>> {
        let display = query.lower().timezone();
        let local = projection::to_local(query, self.zone)?;
        let working = expand_working_hours(
            &self.working_hours,
            local.lower().date(),
            local.upper().date(),
        )?;
        let free = self
            .busy
            .complement_within(&local)
            .intersection(&working);
        Ok(projection::project_set(&free, self.zone, display))
    }
}
