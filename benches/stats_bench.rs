// ABOUTME: Criterion benchmarks for period filtering, aggregation and chart shaping
// ABOUTME: Runs over deterministic synthetic running and strength histories of several sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the statistics engine.
//!
//! Every input is generated backwards from a fixed instant so runs are
//! comparable across machines and days.

#![allow(clippy::missing_docs_in_private_items, clippy::unwrap_used, missing_docs)]

use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use athlo::dashboard::{build_report, DataSnapshot};
use athlo_core::models::{
    BodyMeasurement, ExerciseLog, PeriodType, RunningActivity, StrengthActivity,
};
use athlo_intelligence::charts::{muscle_group_distribution, weekly_distance};
use athlo_intelligence::period::filter_records_for_period;
use athlo_intelligence::stats::{calculate_running_stats, calculate_strength_stats};

/// History sizes: a month of data, a year, several years
const SIZES: [usize; 3] = [30, 365, 2_000];

const MUSCLE_GROUPS: [&str; 8] = [
    "chest", "back", "legs", "shoulders", "biceps", "triceps", "core", "glutes",
];

fn now() -> DateTime<FixedOffset> {
    FixedOffset::west_opt(3 * 3600)
        .unwrap()
        .with_ymd_and_hms(2025, 3, 12, 9, 0, 0)
        .unwrap()
}

fn start_time(days_ago: usize) -> String {
    (now() - Duration::days(i64::try_from(days_ago).unwrap()))
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

#[allow(clippy::cast_precision_loss)]
fn generate_runs(count: usize) -> Vec<RunningActivity> {
    (0..count)
        .map(|index| {
            let mut run = RunningActivity {
                id: format!("run_{index}"),
                start_time: Some(start_time(index)),
                distance: Some(3.0 + (index % 15) as f64),
                duration: Some(1_200.0 + ((index * 137) % 4_000) as f64),
                ..RunningActivity::default()
            }
            .complete_metrics();
            // every tenth run keeps its pace but lost its distance
            if index % 10 == 0 {
                run.distance = None;
            }
            run
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn generate_workouts(count: usize) -> Vec<StrengthActivity> {
    (0..count)
        .map(|index| {
            let groups: Vec<String> = (0..3)
                .map(|offset| MUSCLE_GROUPS[(index + offset) % MUSCLE_GROUPS.len()].to_owned())
                .collect();
            let exercises = groups
                .iter()
                .map(|group| ExerciseLog {
                    exercise_name: format!("{group} press"),
                    muscle_group: group.clone(),
                    sets_completed: 3 + (index % 3) as u32,
                    reps_completed: "10".to_owned(),
                    weight: Some(20.0 + (index % 40) as f64),
                    ..ExerciseLog::default()
                })
                .collect();
            StrengthActivity {
                id: format!("workout_{index}"),
                start_time: Some(start_time(index * 2)),
                duration: Some(2_700.0 + ((index * 61) % 1_800) as f64),
                exercises,
                muscle_groups_worked: groups,
                ..StrengthActivity::default()
            }
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn generate_measurements(count: usize) -> Vec<BodyMeasurement> {
    (0..count)
        .map(|index| BodyMeasurement {
            id: format!("body_{index}"),
            date: Some(start_time(index * 7)[..10].to_owned()),
            weight: Some(80.0 - (index % 10) as f64 * 0.3),
            body_fat_percentage: Some(20.0),
            ..BodyMeasurement::default()
        })
        .collect()
}

fn bench_period_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("period_filter");
    let now = now();

    for count in SIZES {
        let runs = generate_runs(count);
        group.throughput(Throughput::Elements(count as u64));
        for period in [PeriodType::Week, PeriodType::Year] {
            group.bench_with_input(
                BenchmarkId::new(format!("filter_{period}"), count),
                &runs,
                |b, runs| b.iter(|| filter_records_for_period(black_box(runs), period, &now)),
            );
        }
    }
    group.finish();
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for count in SIZES {
        let runs = generate_runs(count);
        let workouts = generate_workouts(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("running_stats", count),
            &runs,
            |b, runs| b.iter(|| calculate_running_stats(black_box(runs))),
        );
        group.bench_with_input(
            BenchmarkId::new("strength_stats", count),
            &workouts,
            |b, workouts| b.iter(|| calculate_strength_stats(black_box(workouts))),
        );
    }
    group.finish();
}

fn bench_charts(c: &mut Criterion) {
    let mut group = c.benchmark_group("charts");
    let tz = now().timezone();

    for count in SIZES {
        let runs = generate_runs(count);
        let workouts = generate_workouts(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("weekly_distance", count),
            &runs,
            |b, runs| b.iter(|| weekly_distance(black_box(runs), &tz)),
        );
        group.bench_with_input(
            BenchmarkId::new("muscle_group_distribution", count),
            &workouts,
            |b, workouts| b.iter(|| muscle_group_distribution(black_box(workouts))),
        );
    }
    group.finish();
}

fn bench_full_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard_report");
    group.sample_size(50);
    let now = now();

    let snapshot = DataSnapshot {
        running: generate_runs(365),
        strength: generate_workouts(180),
        measurements: generate_measurements(52),
        weight_history: Vec::new(),
    };

    for period in PeriodType::ALL_PERIODS {
        group.bench_function(format!("report_{period}"), |b| {
            b.iter(|| build_report(black_box(&snapshot), period, &now));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_period_filter,
    bench_aggregation,
    bench_charts,
    bench_full_report
);
criterion_main!(benches);
