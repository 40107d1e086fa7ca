//! Tests for the mutual-availability fold across owners.

use chrono::{DateTime, NaiveDateTime, NaiveTime};
use chrono_tz::America::{Denver, New_York};
use chrono_tz::Tz;
use meet_engine::projection::resolve_local;
use meet_engine::{mutual_availability, AvailabilityCalendar, Interval, IntervalSet};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn wall(s: &str) -> NaiveDateTime {
    s.parse().unwrap()
}

fn time(s: &str) -> NaiveTime {
    s.parse().unwrap()
}

fn zoned(zone: Tz, s: &str) -> DateTime<Tz> {
    resolve_local(zone, wall(s))
}

fn busy_closed(periods: &[(&str, &str)]) -> IntervalSet<NaiveDateTime> {
    IntervalSet::from_intervals(
        periods
            .iter()
            .map(|(start, end)| Interval::closed(wall(start), wall(end)).unwrap()),
    )
}

fn hours_open(start: &str, end: &str) -> Interval<NaiveTime> {
    Interval::open(time(start), time(end)).unwrap()
}

fn open_in(zone: Tz, start: &str, end: &str) -> Interval<DateTime<Tz>> {
    Interval::open(zoned(zone, start), zoned(zone, end)).unwrap()
}

fn full_day_denver() -> Interval<DateTime<Tz>> {
    open_in(Denver, "2020-07-01T00:00:00", "2020-07-02T00:00:00")
}

// ── Edge cases ──────────────────────────────────────────────────────────────

#[test]
fn no_calendars_means_no_availability() {
    let mutual = mutual_availability(&[], &full_day_denver()).unwrap();
    assert!(mutual.is_empty());
}

#[test]
fn single_calendar_equals_its_own_free_set() {
    let calendar = AvailabilityCalendar::new(
        Denver,
        busy_closed(&[("2020-07-01T10:00:00", "2020-07-01T12:00:00")]),
        hours_open("09:00:00", "17:00:00"),
    );

    let query = full_day_denver();
    assert_eq!(
        mutual_availability(std::slice::from_ref(&calendar), &query).unwrap(),
        calendar.free_range_set(&query).unwrap()
    );
}

#[test]
fn identical_schedules_agree_with_either_free_set() {
    let build = || {
        AvailabilityCalendar::new(
            Denver,
            busy_closed(&[
                ("2020-07-01T10:00:00", "2020-07-01T11:00:00"),
                ("2020-07-01T12:00:00", "2020-07-01T13:00:00"),
            ]),
            hours_open("00:00:00", "23:59:59"),
        )
    };
    let (one, two) = (build(), build());

    let query = full_day_denver();
    assert_eq!(
        mutual_availability(&[one.clone(), two], &query).unwrap(),
        one.free_range_set(&query).unwrap()
    );
}

// ── Scenario ports ──────────────────────────────────────────────────────────

#[test]
fn differing_schedules_in_one_zone() {
    let one = AvailabilityCalendar::new(
        Denver,
        busy_closed(&[
            ("2020-07-01T08:30:00", "2020-07-01T08:55:00"),
            ("2020-07-01T10:00:00", "2020-07-01T12:00:00"),
        ]),
        hours_open("09:00:00", "17:00:00"),
    );
    let two = AvailabilityCalendar::new(
        Denver,
        busy_closed(&[
            ("2020-07-01T09:00:00", "2020-07-01T09:55:00"),
            ("2020-07-01T11:00:00", "2020-07-01T14:00:00"),
        ]),
        hours_open("09:00:00", "17:00:00"),
    );

    let mutual = mutual_availability(&[one, two], &full_day_denver()).unwrap();

    let expected = IntervalSet::from_intervals([
        open_in(Denver, "2020-07-01T09:55:00", "2020-07-01T10:00:00"),
        open_in(Denver, "2020-07-01T14:00:00", "2020-07-01T17:00:00"),
    ]);
    assert_eq!(mutual, expected);
}

#[test]
fn differing_zones_and_working_hours() {
    let denver_owner = AvailabilityCalendar::new(
        Denver,
        busy_closed(&[
            ("2020-07-01T08:30:00", "2020-07-01T08:55:00"),
            ("2020-07-01T10:00:00", "2020-07-01T12:00:00"),
        ]),
        hours_open("08:00:00", "18:00:00"),
    );
    let new_york_owner = AvailabilityCalendar::new(
        New_York,
        busy_closed(&[
            ("2020-07-01T09:00:00", "2020-07-01T09:55:00"),
            ("2020-07-01T11:00:00", "2020-07-01T14:00:00"),
        ]),
        hours_open("09:00:00", "17:00:00"),
    );

    let mutual =
        mutual_availability(&[denver_owner, new_york_owner], &full_day_denver()).unwrap();

    let expected = IntervalSet::from_intervals([
        open_in(Denver, "2020-07-01T08:00:00", "2020-07-01T08:30:00"),
        open_in(Denver, "2020-07-01T08:55:00", "2020-07-01T09:00:00"),
        open_in(Denver, "2020-07-01T12:00:00", "2020-07-01T15:00:00"),
    ]);
    assert_eq!(mutual, expected);
}

#[test]
fn differing_zones_afternoon_sub_range() {
    let denver_owner = AvailabilityCalendar::new(
        Denver,
        busy_closed(&[
            ("2020-07-01T08:30:00", "2020-07-01T08:55:00"),
            ("2020-07-01T10:00:00", "2020-07-01T12:00:00"),
        ]),
        hours_open("08:00:00", "18:00:00"),
    );
    let new_york_owner = AvailabilityCalendar::new(
        New_York,
        busy_closed(&[
            ("2020-07-01T09:00:00", "2020-07-01T09:55:00"),
            ("2020-07-01T11:00:00", "2020-07-01T14:00:00"),
        ]),
        hours_open("09:00:00", "17:00:00"),
    );

    let query = open_in(Denver, "2020-07-01T13:00:00", "2020-07-01T17:00:00");
    let mutual = mutual_availability(&[denver_owner, new_york_owner], &query).unwrap();

    let expected =
        IntervalSet::of(open_in(Denver, "2020-07-01T13:00:00", "2020-07-01T15:00:00"));
    assert_eq!(mutual, expected);
}

#[test]
fn calendar_order_does_not_change_the_answer() {
    let one = AvailabilityCalendar::new(
        Denver,
        busy_closed(&[("2020-07-01T10:00:00", "2020-07-01T12:00:00")]),
        hours_open("09:00:00", "17:00:00"),
    );
    let two = AvailabilityCalendar::new(
        New_York,
        busy_closed(&[("2020-07-01T13:00:00", "2020-07-01T14:00:00")]),
        hours_open("09:00:00", "17:00:00"),
    );

    let query = full_day_denver();
    assert_eq!(
        mutual_availability(&[one.clone(), two.clone()], &query).unwrap(),
        mutual_availability(&[two, one], &query).unwrap()
    );
}

#[test]
fn one_fully_busy_calendar_empties_the_aggregate() {
    let free_owner = AvailabilityCalendar::new(
        Denver,
        IntervalSet::empty(),
        hours_open("09:00:00", "17:00:00"),
    );
    let swamped_owner = AvailabilityCalendar::new(
        Denver,
        busy_closed(&[("2020-07-01T00:00:00", "2020-07-02T00:00:00")]),
        hours_open("09:00:00", "17:00:00"),
    );

    let mutual =
        mutual_availability(&[free_owner, swamped_owner], &full_day_denver()).unwrap();
    assert!(mutual.is_empty());
}
