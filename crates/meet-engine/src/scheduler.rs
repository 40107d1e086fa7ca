//! Folding per-owner free time into one mutual-availability answer.

use chrono::DateTime;
use chrono_tz::Tz;

use crate::calendar::AvailabilityCalendar;
use crate::error::Result;
use crate::interval::Interval;
use crate::interval_set::IntervalSet;

/// Intersect every calendar's free time within `query`.
///
/// Intersection is commutative and associative, so calendar order cannot
/// change the answer, and one calendar with no free time empties the whole
/// result. An empty calendar list yields the empty set — a defined answer,
/// not an error.
pub fn mutual_availability(
    calendars: &[AvailabilityCalendar],
    query: &Interval<DateTime<Tz>>,
) -> Result<IntervalSet<DateTime<Tz>>> {
    let mut calendars = calendars.iter();
    let Some(first) = calendars.next() else {
        return Ok(IntervalSet::empty());
    };
    let mut mutual = first.free_range_set(query)?;
    for calendar in calendars {
        mutual = mutual.intersection(&calendar.free_range_set(query)?);
    }
    Ok(mutual)
}
