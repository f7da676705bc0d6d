// ABOUTME: Dashboard service composing API fetches with period filtering, stats and chart series
// ABOUTME: Fetches collections concurrently and produces serializable per-screen summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dashboard
//!
//! Data flows one way: fetch a [`DataSnapshot`], narrow it to the selected
//! period, then aggregate and shape charts from the same filtered slice.
//! Goal progress counts from the unfiltered collections because goal windows
//! (current week or month) are independent of the selected period. Body
//! statistics are always relative to `now`, never period-filtered.

use std::fmt::Display;

use chrono::{DateTime, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use athlo_core::errors::AppResult;
use athlo_core::models::{
    BodyMeasurement, ChartDataPoint, ExerciseHistory, ExerciseHistoryRecord, PeriodType,
    RunningActivity, StrengthActivity, WeightRecord,
};
use athlo_intelligence::charts::{
    distance_by_activity, exercise_progression, muscle_group_distribution, pace_by_activity,
    weekly_distance, weight_history, workout_volume,
};
use athlo_intelligence::goals::{default_goal_progress, GoalProgress};
use athlo_intelligence::history::latest_measurement;
use athlo_intelligence::period::filter_records_for_period;
use athlo_intelligence::stats::{
    calculate_body_stats, calculate_running_stats, calculate_strength_stats, BodyStats,
    RunningStats, StrengthStats,
};

use crate::client::AthloApiClient;

/// Raw collections as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSnapshot {
    /// Running activities
    pub running: Vec<RunningActivity>,
    /// Strength sessions
    pub strength: Vec<StrengthActivity>,
    /// Body measurements
    pub measurements: Vec<BodyMeasurement>,
    /// Weight history projection, ascending by date
    pub weight_history: Vec<WeightRecord>,
}

/// Running screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningSummary {
    /// Aggregates over the period
    pub stats: RunningStats,
    /// Distance per run
    pub distance_chart: Vec<ChartDataPoint>,
    /// Pace per run in minutes
    pub pace_chart: Vec<ChartDataPoint>,
    /// Distance per Sunday-start week
    pub weekly_distance: Vec<ChartDataPoint>,
}

/// Strength screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthSummary {
    /// Aggregates over the period
    pub stats: StrengthStats,
    /// Top muscle groups by session count
    pub muscle_groups: Vec<ChartDataPoint>,
    /// Sets per session
    pub volume_chart: Vec<ChartDataPoint>,
}

/// Body screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySummary {
    /// Current values and 30-day change
    pub stats: BodyStats,
    /// Newest measurement
    pub latest: Option<BodyMeasurement>,
    /// Weight over time
    pub weight_chart: Vec<ChartDataPoint>,
}

/// Progression of one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSummary {
    /// Records newest first
    pub history: ExerciseHistory,
    /// Most recent occurrence
    pub latest: Option<ExerciseHistoryRecord>,
    /// Weight over time, oldest first
    pub progression_chart: Vec<ChartDataPoint>,
}

/// Everything the home screen shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Selected period
    pub period: PeriodType,
    /// RFC 3339 timestamp of `now`
    pub generated_at: String,
    /// Running screen
    pub running: RunningSummary,
    /// Strength screen
    pub strength: StrengthSummary,
    /// Body screen
    pub body: BodySummary,
    /// Progress toward the fixed goals
    pub goals: Vec<GoalProgress>,
}

/// Summaries for the running screen
#[must_use]
pub fn summarize_running<Tz: TimeZone>(
    activities: &[RunningActivity],
    period: PeriodType,
    now: &DateTime<Tz>,
) -> RunningSummary {
    let tz = now.timezone();
    let in_period = filter_records_for_period(activities, period, now);
    RunningSummary {
        stats: calculate_running_stats(&in_period),
        distance_chart: distance_by_activity(&in_period, &tz),
        pace_chart: pace_by_activity(&in_period, &tz),
        weekly_distance: weekly_distance(&in_period, &tz),
    }
}

/// Summaries for the strength screen
#[must_use]
pub fn summarize_strength<Tz: TimeZone>(
    activities: &[StrengthActivity],
    period: PeriodType,
    now: &DateTime<Tz>,
) -> StrengthSummary {
    let in_period = filter_records_for_period(activities, period, now);
    StrengthSummary {
        stats: calculate_strength_stats(&in_period),
        muscle_groups: muscle_group_distribution(&in_period),
        volume_chart: workout_volume(&in_period, &now.timezone()),
    }
}

/// Summaries for the body screen
#[must_use]
pub fn summarize_body<Tz: TimeZone>(
    measurements: &[BodyMeasurement],
    weight_records: &[WeightRecord],
    now: &DateTime<Tz>,
) -> BodySummary {
    BodySummary {
        stats: calculate_body_stats(measurements, now),
        latest: latest_measurement(measurements, &now.timezone()).cloned(),
        weight_chart: weight_history(weight_records),
    }
}

/// Summary of one exercise's history
#[must_use]
pub fn summarize_exercise<Tz: TimeZone>(history: ExerciseHistory, tz: &Tz) -> ExerciseSummary {
    let progression_chart = exercise_progression(&history, tz);
    ExerciseSummary {
        latest: history.records.first().cloned(),
        history,
        progression_chart,
    }
}

/// Full report from an already-fetched snapshot
#[must_use]
pub fn build_report<Tz: TimeZone>(
    snapshot: &DataSnapshot,
    period: PeriodType,
    now: &DateTime<Tz>,
) -> DashboardReport
where
    Tz::Offset: Display,
{
    let report = DashboardReport {
        period,
        generated_at: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        running: summarize_running(&snapshot.running, period, now),
        strength: summarize_strength(&snapshot.strength, period, now),
        body: summarize_body(&snapshot.measurements, &snapshot.weight_history, now),
        goals: default_goal_progress(&snapshot.running, &snapshot.strength, now),
    };
    debug!(
        period = %period,
        runs = report.running.stats.total_activities,
        workouts = report.strength.stats.total_workouts,
        "Built dashboard report"
    );
    report
}

/// Fetches from the API and produces screen summaries
#[derive(Debug, Clone)]
pub struct DashboardService {
    client: AthloApiClient,
}

impl DashboardService {
    /// Wrap an authenticated client
    #[must_use]
    pub const fn new(client: AthloApiClient) -> Self {
        Self { client }
    }

    /// Underlying API client
    #[must_use]
    pub const fn client(&self) -> &AthloApiClient {
        &self.client
    }

    /// Fetch every collection concurrently
    ///
    /// # Errors
    ///
    /// Returns the first request error; partial results are discarded
    pub async fn fetch_snapshot(&self) -> AppResult<DataSnapshot> {
        let weight_limit = self.client.config().weight_history_limit;
        let (running, strength, measurements, weights) = tokio::try_join!(
            self.client.running_activities(),
            self.client.strength_activities(),
            self.client.body_measurements(),
            self.client.weight_history(weight_limit),
        )?;

        info!(
            runs = running.len(),
            workouts = strength.len(),
            measurements = measurements.len(),
            weights = weights.len(),
            "Fetched Athlo data snapshot"
        );
        Ok(DataSnapshot {
            running,
            strength,
            measurements,
            weight_history: weights,
        })
    }

    /// Full home-screen report
    ///
    /// # Errors
    ///
    /// Returns the first request error
    pub async fn report<Tz: TimeZone>(
        &self,
        period: PeriodType,
        now: &DateTime<Tz>,
    ) -> AppResult<DashboardReport>
    where
        Tz::Offset: Display + Sync,
    {
        let snapshot = self.fetch_snapshot().await?;
        Ok(build_report(&snapshot, period, now))
    }

    /// Running screen only
    ///
    /// # Errors
    ///
    /// Returns the request error
    pub async fn running<Tz: TimeZone>(
        &self,
        period: PeriodType,
        now: &DateTime<Tz>,
    ) -> AppResult<RunningSummary>
    where
        Tz::Offset: Sync,
    {
        let activities = self.client.running_activities().await?;
        Ok(summarize_running(&activities, period, now))
    }

    /// Strength screen only
    ///
    /// # Errors
    ///
    /// Returns the request error
    pub async fn strength<Tz: TimeZone>(
        &self,
        period: PeriodType,
        now: &DateTime<Tz>,
    ) -> AppResult<StrengthSummary>
    where
        Tz::Offset: Sync,
    {
        let activities = self.client.strength_activities().await?;
        Ok(summarize_strength(&activities, period, now))
    }

    /// Body screen only
    ///
    /// # Errors
    ///
    /// Returns the first request error
    pub async fn body<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> AppResult<BodySummary>
    where
        Tz::Offset: Sync,
    {
        let weight_limit = self.client.config().weight_history_limit;
        let (measurements, weights) = tokio::try_join!(
            self.client.body_measurements(),
            self.client.weight_history(weight_limit),
        )?;
        Ok(summarize_body(&measurements, &weights, now))
    }

    /// History and progression of one exercise
    ///
    /// # Errors
    ///
    /// Returns the request error
    pub async fn exercise<Tz: TimeZone + Sync>(
        &self,
        exercise_name: &str,
        limit: usize,
        tz: &Tz,
    ) -> AppResult<ExerciseSummary> {
        let history = self.client.exercise_history(exercise_name, limit).await?;
        Ok(summarize_exercise(history, tz))
    }
}
