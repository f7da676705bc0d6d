// ABOUTME: Period resolution and filtering for scoping statistics to a time window
// ABOUTME: Parses ISO-8601 record timestamps in the caller's time zone with `now` injected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Period Resolver and Filter
//!
//! [`resolve_period`] turns a [`PeriodType`] and the current moment into an
//! inclusive [`DateRange`]; [`filter_by_period`] keeps the records whose
//! timestamp falls inside it.
//!
//! All "local" arithmetic happens in the time zone of the `now` value the
//! caller passes in. Production code passes `Local::now()`; tests pass a
//! `FixedOffset` instant so results do not depend on the host machine.
//!
//! Records with a missing or malformed timestamp never match a window.

use std::cmp::Ordering;

use chrono::{
    DateTime, Datelike, Duration, LocalResult, Months, NaiveDate, NaiveDateTime, NaiveTime,
    TimeZone,
};
use tracing::trace;

use athlo_core::constants::time::{
    ALL_TIME_START_YEAR, MONTH_PERIOD_MONTHS, WEEK_PERIOD_DAYS, YEAR_PERIOD_MONTHS,
};
use athlo_core::models::{PeriodType, Timestamped};

/// Naive (offset-less) timestamp layouts accepted from the API. These are
/// interpreted as wall-clock time in the caller's zone.
const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Calendar date layout used by body measurements and weight history
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive `[start, end]` window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange<Tz: TimeZone> {
    /// First instant inside the window
    pub start: DateTime<Tz>,
    /// Last instant inside the window
    pub end: DateTime<Tz>,
}

impl<Tz: TimeZone> DateRange<Tz> {
    /// Whether `instant` lies inside the window, bounds included
    #[must_use]
    pub fn contains(&self, instant: &DateTime<Tz>) -> bool {
        self.start <= *instant && *instant <= self.end
    }

    /// Time zone the window was resolved in
    #[must_use]
    pub fn timezone(&self) -> Tz {
        self.start.timezone()
    }
}

/// Map a period token and the current moment to an inclusive window.
///
/// `end` is today at 23:59:59.999. `start` is today at midnight moved back by
/// seven days (`week`), one calendar month (`month`), one calendar year
/// (`year`), or with the year forced to 2000 (`all`). Month arithmetic clamps
/// to the last valid day, so March 31 minus a month is the end of February.
#[must_use]
pub fn resolve_period<Tz: TimeZone>(period: PeriodType, now: &DateTime<Tz>) -> DateRange<Tz> {
    let tz = now.timezone();
    let today = now.date_naive();

    let start_date = match period {
        PeriodType::Week => today - Duration::days(WEEK_PERIOD_DAYS),
        PeriodType::Month => today
            .checked_sub_months(Months::new(MONTH_PERIOD_MONTHS))
            .unwrap_or(today),
        PeriodType::Year => today
            .checked_sub_months(Months::new(YEAR_PERIOD_MONTHS))
            .unwrap_or(today),
        // 2000 is a leap year, so every month/day pair exists
        PeriodType::All => today.with_year(ALL_TIME_START_YEAR).unwrap_or(today),
    };

    DateRange {
        start: localize(&tz, start_of_day(start_date)),
        end: localize(&tz, end_of_day(today)),
    }
}

/// Keep the records whose timestamp lies inside `range`, in input order.
///
/// Missing and malformed timestamps are excluded rather than reported.
#[must_use]
pub fn filter_by_period<T, Tz>(records: &[T], range: &DateRange<Tz>) -> Vec<T>
where
    T: Timestamped + Clone,
    Tz: TimeZone,
{
    let tz = range.timezone();
    records
        .iter()
        .filter(|record| {
            record_timestamp(*record, &tz).is_some_and(|instant| range.contains(&instant))
        })
        .cloned()
        .collect()
}

/// Resolve `period` against `now` and filter `records` in one step
#[must_use]
pub fn filter_records_for_period<T, Tz>(
    records: &[T],
    period: PeriodType,
    now: &DateTime<Tz>,
) -> Vec<T>
where
    T: Timestamped + Clone,
    Tz: TimeZone,
{
    filter_by_period(records, &resolve_period(period, now))
}

/// Parse an API timestamp into the given time zone.
///
/// Accepts RFC 3339 with an offset (converted into `tz`), naive date-times
/// (taken as wall-clock time in `tz`) and bare `YYYY-MM-DD` dates (midnight in
/// `tz`). Returns `None` for anything else.
#[must_use]
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(tz));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .map(start_of_day)
        })
        .map(|naive| localize(tz, naive))
}

/// Parse the calendar-date part of an API date or timestamp, ignoring zones
#[must_use]
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NAIVE_DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
                .map(|naive| naive.date())
        })
}

/// Parsed timestamp of a record, or `None` when missing or malformed
pub(crate) fn record_timestamp<T, Tz>(record: &T, tz: &Tz) -> Option<DateTime<Tz>>
where
    T: Timestamped + ?Sized,
    Tz: TimeZone,
{
    let raw = record.timestamp()?;
    let parsed = parse_timestamp(raw, tz);
    if parsed.is_none() {
        trace!(timestamp = raw, "Ignoring record with unparseable timestamp");
    }
    parsed
}

/// Pair each record with its parsed timestamp and sort ascending.
///
/// The sort is stable; undated records keep their relative order after all
/// dated ones.
pub(crate) fn chronological<'a, T, Tz>(
    records: &'a [T],
    tz: &Tz,
) -> Vec<(Option<DateTime<Tz>>, &'a T)>
where
    T: Timestamped,
    Tz: TimeZone,
{
    sorted_by_timestamp(records, tz, Ordering::Less)
}

/// Pair each record with its parsed timestamp and sort newest first.
///
/// Undated records keep their relative order after all dated ones.
pub(crate) fn newest_first<'a, T, Tz>(
    records: &'a [T],
    tz: &Tz,
) -> Vec<(Option<DateTime<Tz>>, &'a T)>
where
    T: Timestamped,
    Tz: TimeZone,
{
    sorted_by_timestamp(records, tz, Ordering::Greater)
}

/// Stable sort on parsed timestamps. `earlier` is where an older record
/// lands relative to a newer one; undated records always go last.
fn sorted_by_timestamp<'a, T, Tz>(
    records: &'a [T],
    tz: &Tz,
    earlier: Ordering,
) -> Vec<(Option<DateTime<Tz>>, &'a T)>
where
    T: Timestamped,
    Tz: TimeZone,
{
    let mut dated: Vec<(Option<DateTime<Tz>>, &T)> = records
        .iter()
        .map(|record| (record_timestamp(record, tz), record))
        .collect();
    dated.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => match a.cmp(b) {
            Ordering::Less => earlier,
            Ordering::Greater => earlier.reverse(),
            Ordering::Equal => Ordering::Equal,
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    dated
}

/// Midnight at the start of `date`
pub(crate) fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// 23:59:59.999 on `date`
fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::days(1) - Duration::milliseconds(1)
}

/// Attach `tz` to a wall-clock time.
///
/// Ambiguous times (DST fall-back) take the earlier instant. Times inside a
/// DST gap move forward by an hour, and fall back to reading the wall clock as
/// UTC if that still does not exist.
pub(crate) fn localize<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(instant) | LocalResult::Ambiguous(instant, _) => instant,
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .unwrap_or_else(|| tz.from_utc_datetime(&naive)),
    }
}
