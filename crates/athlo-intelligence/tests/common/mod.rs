// ABOUTME: Shared fixtures for statistics engine integration tests
// ABOUTME: Record builders and a fixed time zone / "now" so results are host independent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)] // each test binary uses a different subset

use athlo_core::models::{BodyMeasurement, ExerciseLog, RunningActivity, StrengthActivity};
use chrono::{DateTime, FixedOffset, TimeZone};

/// UTC-3, the app's home zone
pub fn tz() -> FixedOffset {
    FixedOffset::west_opt(3 * 3600).unwrap()
}

/// Wall-clock instant in the test zone
pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<FixedOffset> {
    tz().with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

/// Monday 2025-03-10 12:00 local
pub fn now() -> DateTime<FixedOffset> {
    at(2025, 3, 10, 12)
}

pub fn run(id: &str, start: Option<&str>, distance: Option<f64>) -> RunningActivity {
    RunningActivity {
        id: id.to_owned(),
        start_time: start.map(str::to_owned),
        distance,
        ..RunningActivity::default()
    }
}

pub fn paced_run(id: &str, start: &str, pace: Option<f64>) -> RunningActivity {
    RunningActivity {
        pace,
        ..run(id, Some(start), None)
    }
}

pub fn workout(id: &str, start: Option<&str>, groups: &[&str]) -> StrengthActivity {
    StrengthActivity {
        id: id.to_owned(),
        start_time: start.map(str::to_owned),
        muscle_groups_worked: groups.iter().map(|g| (*g).to_owned()).collect(),
        ..StrengthActivity::default()
    }
}

pub fn exercise(name: &str, weight: Option<f64>, sets: u32) -> ExerciseLog {
    ExerciseLog {
        exercise_name: name.to_owned(),
        muscle_group: "Chest".to_owned(),
        sets_completed: sets,
        reps_completed: "10".to_owned(),
        weight,
        ..ExerciseLog::default()
    }
}

pub fn measurement(id: &str, date: &str, weight: Option<f64>, body_fat: Option<f64>) -> BodyMeasurement {
    BodyMeasurement {
        id: id.to_owned(),
        date: Some(date.to_owned()),
        weight,
        body_fat_percentage: body_fat,
        ..BodyMeasurement::default()
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
