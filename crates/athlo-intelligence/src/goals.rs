// ABOUTME: Progress toward fixed weekly/monthly activity-frequency targets
// ABOUTME: Targets are hardcoded constants shown on the home screen, never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Goal Progress
//!
//! A goal is "N sessions of a kind per week/month". Progress counts the
//! sessions started since the beginning of the current week (Monday) or
//! month, in the time zone of `now`.

use std::fmt;

use chrono::{DateTime, Datelike, Duration, TimeZone};
use serde::{Deserialize, Serialize};

use athlo_core::models::{RunningActivity, StrengthActivity, Timestamped};

use crate::period::{localize, record_timestamp, start_of_day};

/// Kind of session a goal counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalActivityType {
    /// Running activities
    Running,
    /// Strength sessions
    Strength,
}

impl fmt::Display for GoalActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => f.write_str("running"),
            Self::Strength => f.write_str("strength"),
        }
    }
}

/// Window a goal resets on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPeriod {
    /// Monday 00:00 to now
    Weekly,
    /// First of the month 00:00 to now
    Monthly,
}

impl GoalPeriod {
    /// Noun used in display text
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Weekly => "week",
            Self::Monthly => "month",
        }
    }
}

/// A fixed activity-frequency target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalTarget {
    /// Sessions counted
    pub activity_type: GoalActivityType,
    /// Sessions wanted per period
    pub target_frequency: u32,
    /// Reset window
    pub period: GoalPeriod,
}

impl GoalTarget {
    /// Human-readable form, e.g. `3x running per week`
    #[must_use]
    pub fn display_text(&self) -> String {
        format!(
            "{}x {} per {}",
            self.target_frequency,
            self.activity_type,
            self.period.noun()
        )
    }
}

/// Home-screen targets
pub const DEFAULT_GOALS: [GoalTarget; 2] = [
    GoalTarget {
        activity_type: GoalActivityType::Running,
        target_frequency: 3,
        period: GoalPeriod::Weekly,
    },
    GoalTarget {
        activity_type: GoalActivityType::Strength,
        target_frequency: 4,
        period: GoalPeriod::Weekly,
    },
];

/// Progress toward one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// The goal measured
    pub goal: GoalTarget,
    /// Display text of the goal
    pub display_text: String,
    /// Sessions counted so far in the current period
    pub current: usize,
    /// Sessions wanted
    pub target: u32,
    /// `current / target` as a percentage, capped at 100, one decimal
    pub percentage: f64,
}

/// Start of the goal's current window: Monday 00:00 or the 1st at 00:00
#[must_use]
pub fn goal_period_start<Tz: TimeZone>(period: GoalPeriod, now: &DateTime<Tz>) -> DateTime<Tz> {
    let today = now.date_naive();
    let first_day = match period {
        GoalPeriod::Weekly => {
            today - Duration::days(i64::from(today.weekday().num_days_from_monday()))
        }
        GoalPeriod::Monthly => today.with_day(1).unwrap_or(today),
    };
    localize(&now.timezone(), start_of_day(first_day))
}

/// Count sessions of the goal's kind started since the window opened
#[must_use]
#[allow(clippy::cast_precision_loss)] // Safe: session counts are small
pub fn calculate_goal_progress<Tz: TimeZone>(
    goal: &GoalTarget,
    running: &[RunningActivity],
    strength: &[StrengthActivity],
    now: &DateTime<Tz>,
) -> GoalProgress {
    let since = goal_period_start(goal.period, now);
    let current = match goal.activity_type {
        GoalActivityType::Running => count_since(running, &since),
        GoalActivityType::Strength => count_since(strength, &since),
    };

    let percentage = if goal.target_frequency == 0 {
        0.0
    } else {
        let raw = (current as f64 / f64::from(goal.target_frequency)) * 100.0;
        (raw.min(100.0) * 10.0).round() / 10.0
    };

    GoalProgress {
        goal: *goal,
        display_text: goal.display_text(),
        current,
        target: goal.target_frequency,
        percentage,
    }
}

/// Progress for every default goal
#[must_use]
pub fn default_goal_progress<Tz: TimeZone>(
    running: &[RunningActivity],
    strength: &[StrengthActivity],
    now: &DateTime<Tz>,
) -> Vec<GoalProgress> {
    DEFAULT_GOALS
        .iter()
        .map(|goal| calculate_goal_progress(goal, running, strength, now))
        .collect()
}

fn count_since<T: Timestamped, Tz: TimeZone>(records: &[T], since: &DateTime<Tz>) -> usize {
    let tz = since.timezone();
    records
        .iter()
        .filter(|record| record_timestamp(*record, &tz).is_some_and(|start| start >= *since))
        .count()
}
