// ABOUTME: Exercise progression history and weight-history projection from measurements
// ABOUTME: Newest-first exercise lookups and ascending, limited weight series for charting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{NaiveDate, TimeZone};
use tracing::debug;

use athlo_core::models::{
    BodyMeasurement, ExerciseHistory, ExerciseHistoryRecord, StrengthActivity, WeightRecord,
};

use crate::period::{newest_first, parse_calendar_date};

/// History of one exercise across sessions, newest first.
///
/// Names match case-insensitively. Each session contributes at most its first
/// matching log. Sessions without a start time are skipped. At most `limit`
/// records are returned.
#[must_use]
pub fn exercise_history<Tz: TimeZone>(
    activities: &[StrengthActivity],
    exercise_name: &str,
    limit: usize,
    tz: &Tz,
) -> ExerciseHistory {
    let wanted = exercise_name.to_lowercase();
    let records: Vec<ExerciseHistoryRecord> = newest_first(activities, tz)
        .into_iter()
        .filter_map(|(_, activity)| {
            let date = activity.start_time.as_ref()?;
            activity
                .exercises
                .iter()
                .find(|log| log.exercise_name.to_lowercase() == wanted)
                .map(|log| ExerciseHistoryRecord {
                    date: date.clone(),
                    weight: log.weight,
                    reps: log.reps_completed.clone(),
                    sets: log.sets_completed,
                    rpe: log.rpe,
                })
        })
        .take(limit)
        .collect();

    debug!(
        exercise = exercise_name,
        records = records.len(),
        "Built exercise history"
    );
    ExerciseHistory {
        exercise_name: exercise_name.to_owned(),
        records,
    }
}

/// Most recent occurrence of an exercise, used to prefill "last time" values
#[must_use]
pub fn previous_exercise_record<Tz: TimeZone>(
    activities: &[StrengthActivity],
    exercise_name: &str,
    tz: &Tz,
) -> Option<ExerciseHistoryRecord> {
    exercise_history(activities, exercise_name, 1, tz)
        .records
        .into_iter()
        .next()
}

/// Measurement with the newest date, if any carries a parseable date.
///
/// Dates are compared as full timestamps in `tz`, the same ordering
/// [`calculate_body_stats`](crate::stats::calculate_body_stats) uses for its
/// current values; ties keep the earlier entry.
#[must_use]
pub fn latest_measurement<'a, Tz: TimeZone>(
    measurements: &'a [BodyMeasurement],
    tz: &Tz,
) -> Option<&'a BodyMeasurement> {
    newest_first(measurements, tz)
        .into_iter()
        .find_map(|(date, measurement)| date.map(|_| measurement))
}

/// Project measurements into a date/weight series for charting.
///
/// Only measurements with a weight and a parseable date are kept, sorted by
/// date ascending. `limit` keeps the most recent entries; `None` or `Some(0)`
/// keeps all.
#[must_use]
pub fn weight_history_from_measurements(
    measurements: &[BodyMeasurement],
    limit: Option<usize>,
) -> Vec<WeightRecord> {
    let mut dated: Vec<(NaiveDate, WeightRecord)> = measurements
        .iter()
        .filter_map(|m| {
            let raw = m.date.as_ref()?;
            let weight = m.weight?;
            let date = parse_calendar_date(raw)?;
            Some((
                date,
                WeightRecord {
                    date: raw.clone(),
                    weight,
                },
            ))
        })
        .collect();
    dated.sort_by_key(|(date, _)| *date);

    let skip = limit
        .filter(|limit| *limit > 0)
        .map_or(0, |limit| dated.len().saturating_sub(limit));
    dated.into_iter().skip(skip).map(|(_, record)| record).collect()
}
