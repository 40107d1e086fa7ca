//! Expansion of a recurring daily time-of-day window into per-day intervals.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::Result;
use crate::interval::Interval;
use crate::interval_set::IntervalSet;

/// Expand `window` over every calendar date in `[first_day, last_day]`.
///
/// Dates advance one calendar day at a time, never by adding 24 hours of
/// absolute time: across a daylight-saving transition a local day is not 24
/// absolute hours long, and stepping instants would drift off the local
/// midnight grid. Every generated day keeps the boundary kinds of the
/// recurring window.
pub fn expand_working_hours(
    window: &Interval<NaiveTime>,
    first_day: NaiveDate,
    last_day: NaiveDate,
) -> Result<IntervalSet<NaiveDateTime>> {
    let mut days = Vec::new();
    let mut day = first_day;
    while day <= last_day {
        days.push(Interval::new(
            day.and_time(*window.lower()),
            window.lower_bound(),
            day.and_time(*window.upper()),
            window.upper_bound(),
        )?);
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    Ok(IntervalSet::from_intervals(days))
}
