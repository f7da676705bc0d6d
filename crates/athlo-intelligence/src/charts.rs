// ABOUTME: Chart-series builder turning record snapshots into ordered label/value points
// ABOUTME: Time series, weekly buckets, top-N muscle groups, workout volume and weight history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Chart-Series Builder
//!
//! Every function allocates a fresh `Vec<ChartDataPoint>`; nothing is cached
//! between calls. Time-series charts sort ascending by start time; records
//! without a usable timestamp sort last and get an empty label.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone};
use tracing::debug;

use athlo_core::constants::charts::{MUSCLE_GROUP_TOP_N, WEEKLY_DISTANCE_BUCKETS};
use athlo_core::constants::time::SECONDS_PER_MINUTE;
use athlo_core::formatters::format_short_date;
use athlo_core::models::{
    ChartDataPoint, ExerciseHistory, RunningActivity, StrengthActivity, Timestamped,
    WeightRecord,
};

use crate::muscle_groups::ranked_muscle_groups;
use crate::period::{chronological, parse_calendar_date, record_timestamp};

/// Point for a dated record: short label plus the raw source timestamp
fn dated_point<Tz: TimeZone>(
    value: f64,
    instant: Option<&DateTime<Tz>>,
    record: &impl Timestamped,
) -> ChartDataPoint {
    let label = instant.map(format_short_date).unwrap_or_default();
    let point = ChartDataPoint::new(value, label);
    match record.timestamp() {
        Some(raw) => point.with_date(raw),
        None => point,
    }
}

/// One point per run, ascending by start time, value = distance (0 if unknown)
#[must_use]
pub fn distance_by_activity<Tz: TimeZone>(
    activities: &[RunningActivity],
    tz: &Tz,
) -> Vec<ChartDataPoint> {
    chronological(activities, tz)
        .into_iter()
        .map(|(instant, activity)| {
            dated_point(activity.distance.unwrap_or(0.0), instant.as_ref(), activity)
        })
        .collect()
}

/// Runs with a positive pace, ascending by start time, value = pace in minutes
#[must_use]
pub fn pace_by_activity<Tz: TimeZone>(
    activities: &[RunningActivity],
    tz: &Tz,
) -> Vec<ChartDataPoint> {
    chronological(activities, tz)
        .into_iter()
        .filter_map(|(instant, activity)| {
            activity
                .pace
                .filter(|pace| *pace > 0.0)
                .map(|pace| dated_point(pace / SECONDS_PER_MINUTE, instant.as_ref(), activity))
        })
        .collect()
}

/// Sunday that starts the calendar week containing `date`
#[must_use]
pub fn week_start_sunday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Total distance per Sunday-start week, chronological, last eight weeks only.
///
/// Weeks are computed from the local date of each run. Runs without a usable
/// start time cannot be placed in a week and are skipped.
#[must_use]
pub fn weekly_distance<Tz: TimeZone>(
    activities: &[RunningActivity],
    tz: &Tz,
) -> Vec<ChartDataPoint> {
    let mut weeks: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for activity in activities {
        let Some(instant) = record_timestamp(activity, tz) else {
            continue;
        };
        *weeks
            .entry(week_start_sunday(instant.date_naive()))
            .or_insert(0.0) += activity.distance.unwrap_or(0.0);
    }

    let skip = weeks.len().saturating_sub(WEEKLY_DISTANCE_BUCKETS);
    let points: Vec<ChartDataPoint> = weeks
        .into_iter()
        .skip(skip)
        .map(|(week, distance)| {
            ChartDataPoint::new(distance, format_short_date(&week))
                .with_date(week.format("%Y-%m-%d").to_string())
        })
        .collect();

    debug!(weeks = points.len(), dropped = skip, "Built weekly distance series");
    points
}

/// Muscle-group occurrence counts, most frequent first, at most six groups
#[must_use]
#[allow(clippy::cast_precision_loss)] // Safe: occurrence counts are small
pub fn muscle_group_distribution(activities: &[StrengthActivity]) -> Vec<ChartDataPoint> {
    ranked_muscle_groups(activities)
        .into_iter()
        .take(MUSCLE_GROUP_TOP_N)
        .map(|(group, count)| ChartDataPoint::new(count as f64, group))
        .collect()
}

/// Completed sets per session, ascending by start time
#[must_use]
pub fn workout_volume<Tz: TimeZone>(
    activities: &[StrengthActivity],
    tz: &Tz,
) -> Vec<ChartDataPoint> {
    chronological(activities, tz)
        .into_iter()
        .map(|(instant, activity)| {
            dated_point(
                f64::from(activity.total_sets.unwrap_or(0)),
                instant.as_ref(),
                activity,
            )
        })
        .collect()
}

/// One point per weight record, in input order
///
/// Labels fall back to the raw date string when it cannot be parsed.
#[must_use]
pub fn weight_history(records: &[WeightRecord]) -> Vec<ChartDataPoint> {
    records
        .iter()
        .map(|record| {
            let label = parse_calendar_date(&record.date)
                .map_or_else(|| record.date.clone(), |date| format_short_date(&date));
            ChartDataPoint::new(record.weight, label).with_date(record.date.clone())
        })
        .collect()
}

/// Load used per occurrence of an exercise, oldest first
///
/// Occurrences logged without a weight are skipped.
#[must_use]
pub fn exercise_progression<Tz: TimeZone>(
    history: &ExerciseHistory,
    tz: &Tz,
) -> Vec<ChartDataPoint> {
    chronological(&history.records, tz)
        .into_iter()
        .filter_map(|(instant, record)| {
            record
                .weight
                .map(|weight| dated_point(weight, instant.as_ref(), record))
        })
        .collect()
}
