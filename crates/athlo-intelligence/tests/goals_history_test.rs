// ABOUTME: Tests for goal progress, exercise history lookups and weight-history projection
// ABOUTME: Uses a mid-week "now" to pin Monday week starts and capped percentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use athlo_core::models::{BodyMeasurement, StrengthActivity};
use athlo_intelligence::goals::{
    calculate_goal_progress, default_goal_progress, goal_period_start, GoalActivityType,
    GoalPeriod, GoalTarget, DEFAULT_GOALS,
};
use athlo_intelligence::history::{
    exercise_history, latest_measurement, previous_exercise_record,
    weight_history_from_measurements,
};
use chrono::{DateTime, FixedOffset};
use common::{assert_close, at, exercise, measurement, run, tz, workout};

/// Wednesday 2025-03-12 09:00 local
fn midweek() -> DateTime<FixedOffset> {
    at(2025, 3, 12, 9)
}

fn session(id: &str, start: Option<&str>, names: &[(&str, Option<f64>)]) -> StrengthActivity {
    StrengthActivity {
        exercises: names
            .iter()
            .map(|(name, weight)| exercise(name, *weight, 3))
            .collect(),
        ..workout(id, start, &["Chest"])
    }
}

#[test]
fn test_default_goals() {
    let texts: Vec<String> = DEFAULT_GOALS.iter().map(GoalTarget::display_text).collect();
    assert_eq!(texts, ["3x running per week", "4x strength per week"]);
}

#[test]
fn test_goal_period_start() {
    assert_eq!(goal_period_start(GoalPeriod::Weekly, &midweek()), at(2025, 3, 10, 0));
    assert_eq!(goal_period_start(GoalPeriod::Monthly, &midweek()), at(2025, 3, 1, 0));
    // Monday is its own week start
    assert_eq!(
        goal_period_start(GoalPeriod::Weekly, &at(2025, 3, 10, 23)),
        at(2025, 3, 10, 0)
    );
}

#[test]
fn test_weekly_running_progress_counts_from_monday() {
    let runs = vec![
        run("sunday", Some("2025-03-09T07:00:00"), Some(5.0)),
        run("monday", Some("2025-03-10T07:00:00"), Some(5.0)),
        run("tuesday", Some("2025-03-11T07:00:00"), Some(5.0)),
        run("undated", None, Some(5.0)),
    ];

    let progress = calculate_goal_progress(&DEFAULT_GOALS[0], &runs, &[], &midweek());
    assert_eq!(progress.current, 2);
    assert_eq!(progress.target, 3);
    assert_close(progress.percentage, 66.7);
    assert_eq!(progress.display_text, "3x running per week");
}

#[test]
fn test_progress_is_capped_at_100() {
    let workouts: Vec<StrengthActivity> = (10..=14)
        .map(|day| workout(&format!("w{day}"), Some(&format!("2025-03-{day}T06:00:00")), &[]))
        .collect();

    // 2025-03-14 is in the future relative to midweek but still counts
    let progress = calculate_goal_progress(&DEFAULT_GOALS[1], &[], &workouts, &midweek());
    assert_eq!(progress.current, 5);
    assert_close(progress.percentage, 100.0);
}

#[test]
fn test_monthly_goal() {
    let goal = GoalTarget {
        activity_type: GoalActivityType::Strength,
        target_frequency: 8,
        period: GoalPeriod::Monthly,
    };
    let workouts = vec![
        workout("feb", Some("2025-02-28T18:00:00"), &[]),
        workout("mar1", Some("2025-03-01T00:00:00"), &[]),
        workout("mar5", Some("2025-03-05T18:00:00"), &[]),
        workout("mar11", Some("2025-03-11T18:00:00"), &[]),
    ];

    let progress = calculate_goal_progress(&goal, &[], &workouts, &midweek());
    assert_eq!(progress.current, 3);
    assert_close(progress.percentage, 37.5);
    assert_eq!(progress.display_text, "8x strength per month");
}

#[test]
fn test_zero_target_reports_zero_percent() {
    let goal = GoalTarget {
        activity_type: GoalActivityType::Running,
        target_frequency: 0,
        period: GoalPeriod::Weekly,
    };
    let runs = vec![run("r", Some("2025-03-11T07:00:00"), None)];
    let progress = calculate_goal_progress(&goal, &runs, &[], &midweek());
    assert_eq!(progress.current, 1);
    assert_close(progress.percentage, 0.0);
}

#[test]
fn test_default_goal_progress_covers_every_goal() {
    let progress = default_goal_progress(&[], &[], &midweek());
    assert_eq!(progress.len(), DEFAULT_GOALS.len());
    for goal in &progress {
        assert_eq!(goal.current, 0);
        assert_close(goal.percentage, 0.0);
    }
}

#[test]
fn test_exercise_history_newest_first_and_case_insensitive() {
    let sessions = vec![
        session("a", Some("2025-03-01T18:00:00"), &[("Bench Press", Some(60.0))]),
        session("b", Some("2025-03-08T18:00:00"), &[("bench press", Some(65.0))]),
        session("c", Some("2025-03-05T18:00:00"), &[("Squat", Some(100.0))]),
        session("d", None, &[("Bench Press", Some(90.0))]),
        session(
            "e",
            Some("2025-03-04T18:00:00"),
            &[("BENCH PRESS", Some(62.5)), ("Bench Press", Some(40.0))],
        ),
    ];

    let history = exercise_history(&sessions, "Bench Press", 10, &tz());
    assert_eq!(history.exercise_name, "Bench Press");
    let weights: Vec<Option<f64>> = history.records.iter().map(|r| r.weight).collect();
    assert_eq!(weights, [Some(65.0), Some(62.5), Some(60.0)]);
    assert_eq!(history.records[0].date, "2025-03-08T18:00:00");
    assert_eq!(history.records[0].sets, 3);
    assert_eq!(history.records[0].reps, "10");
}

#[test]
fn test_exercise_history_limit() {
    let sessions: Vec<StrengthActivity> = (1..=5)
        .map(|day| {
            session(
                &format!("s{day}"),
                Some(&format!("2025-03-0{day}T18:00:00")),
                &[("Deadlift", Some(f64::from(day) * 10.0))],
            )
        })
        .collect();

    let history = exercise_history(&sessions, "deadlift", 2, &tz());
    let weights: Vec<Option<f64>> = history.records.iter().map(|r| r.weight).collect();
    assert_eq!(weights, [Some(50.0), Some(40.0)]);

    assert!(exercise_history(&sessions, "deadlift", 0, &tz()).records.is_empty());
    assert!(exercise_history(&sessions, "Row", 10, &tz()).records.is_empty());
}

#[test]
fn test_previous_exercise_record() {
    let sessions = vec![
        session("old", Some("2025-02-20T18:00:00"), &[("Squat", Some(95.0))]),
        session("new", Some("2025-03-02T18:00:00"), &[("Squat", Some(100.0))]),
    ];

    let previous = previous_exercise_record(&sessions, "squat", &tz());
    assert_eq!(previous.and_then(|r| r.weight), Some(100.0));
    assert!(previous_exercise_record(&sessions, "Lunge", &tz()).is_none());
}

#[test]
fn test_latest_measurement() {
    let measurements = vec![
        measurement("a", "2025-02-01", Some(73.0), None),
        measurement("b", "2025-03-01", Some(72.0), None),
        measurement("c", "not a date", Some(71.0), None),
        measurement("d", "2025-03-01T08:00:00", Some(71.5), None),
    ];

    // a timed entry on the same day is newer than the bare date
    assert_eq!(
        latest_measurement(&measurements, &tz()).map(|m| m.id.as_str()),
        Some("d")
    );
    assert!(latest_measurement(&[], &tz()).is_none());
}

#[test]
fn test_latest_measurement_ties_keep_first_and_skip_undated() {
    let measurements = vec![
        BodyMeasurement {
            date: None,
            ..measurement("undated", "", Some(90.0), None)
        },
        measurement("first", "2025-03-01", Some(72.0), None),
        measurement("second", "2025-03-01", Some(71.0), None),
    ];

    assert_eq!(
        latest_measurement(&measurements, &tz()).map(|m| m.id.as_str()),
        Some("first")
    );
    assert!(latest_measurement(&measurements[..1], &tz()).is_none());
}

#[test]
fn test_weight_history_projection_sorted_and_limited() {
    let measurements = vec![
        measurement("c", "2025-03-01", Some(72.0), None),
        measurement("a", "2025-01-01", Some(75.0), None),
        measurement("skip", "2025-02-10", None, Some(19.0)),
        BodyMeasurement {
            date: None,
            ..measurement("undated", "", Some(80.0), None)
        },
        measurement("b", "2025-02-01", Some(73.5), None),
    ];

    let all = weight_history_from_measurements(&measurements, None);
    let dates: Vec<&str> = all.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, ["2025-01-01", "2025-02-01", "2025-03-01"]);

    let recent = weight_history_from_measurements(&measurements, Some(2));
    let weights: Vec<f64> = recent.iter().map(|r| r.weight).collect();
    assert_eq!(weights, [73.5, 72.0]);

    // zero means no limit
    assert_eq!(weight_history_from_measurements(&measurements, Some(0)), all);
}
