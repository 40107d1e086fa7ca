//! Conversions between an owner's wall-clock frame and absolute instants.
//!
//! Wall-clock readings do not map one-to-one onto instants: a fall-back
//! transition repeats an hour, a spring-forward transition skips one. The
//! policies here match what `java.time` zone resolution does — ambiguous
//! readings take the earlier offset, skipped readings shift forward — so
//! busy data recorded as local date-times stays stable across DST.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{EngineError, Result};
use crate::interval::Interval;
use crate::interval_set::IntervalSet;

/// Minute-granularity probes cover the largest gap in the tz database (a
/// whole skipped calendar day) with headroom.
const MAX_GAP_PROBES: u32 = 48 * 60;

/// Resolve a wall-clock reading in `zone` to an absolute instant.
///
/// Ambiguous readings (the repeated hour of a fall-back transition) resolve
/// to the earlier offset. Readings inside a spring-forward gap shift forward
/// to the first wall clock that exists again.
pub fn resolve_local(zone: Tz, local: NaiveDateTime) -> DateTime<Tz> {
    let mut probe = local;
    for _ in 0..MAX_GAP_PROBES {
        if let Some(resolved) = zone.from_local_datetime(&probe).earliest() {
            return resolved;
        }
        probe = probe + Duration::minutes(1);
    }
    zone.from_utc_datetime(&local)
}

/// Read an absolute range as wall-clock in `zone`.
///
/// Fails when the range collapses to an inverted wall-clock reading, which a
/// short range straddling a fall-back transition can produce.
pub fn to_local(range: &Interval<DateTime<Tz>>, zone: Tz) -> Result<Interval<NaiveDateTime>> {
    let lower = range.lower().with_timezone(&zone).naive_local();
    let upper = range.upper().with_timezone(&zone).naive_local();
    Interval::new(lower, range.lower_bound(), upper, range.upper_bound())
        .map_err(|err| EngineError::InvalidQuery(format!("range inverts when read in {zone}: {err}")))
}

/// Attach `zone` to every wall-clock endpoint of `set` — same readings, now
/// anchored to instants — then re-tag each instant to `display` without
/// moving it.
///
/// An interval swallowed whole by a spring-forward gap covers no instants and
/// is dropped.
pub fn project_set(
    set: &IntervalSet<NaiveDateTime>,
    zone: Tz,
    display: Tz,
) -> IntervalSet<DateTime<Tz>> {
    let mut projected = Vec::with_capacity(set.len());
    for interval in set {
        let lower = resolve_local(zone, *interval.lower()).with_timezone(&display);
        let upper = resolve_local(zone, *interval.upper()).with_timezone(&display);
        if let Ok(zoned) = Interval::new(lower, interval.lower_bound(), upper, interval.upper_bound())
        {
            projected.push(zoned);
        }
    }
    IntervalSet::from_intervals(projected)
}
