// ABOUTME: Strength summary statistics: workout, set and exercise totals
// ABOUTME: Average duration over timed sessions and the most worked muscle group
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracing::debug;

use athlo_core::models::StrengthActivity;

use super::mean_or_zero;
use crate::muscle_groups::most_worked_muscle_group;

/// Summary statistics over a set of strength sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrengthStats {
    /// Number of sessions
    pub total_workouts: usize,
    /// Sum of completed sets
    pub total_sets: u64,
    /// Sum of exercises performed
    pub total_exercises: u64,
    /// Mean duration in seconds over sessions with a positive duration
    pub average_workout_duration: f64,
    /// Most frequent muscle group, first seen wins ties
    pub most_worked_muscle_group: Option<String>,
}

/// Compute strength statistics. Empty input gives zero counts and no group.
#[must_use]
pub fn calculate_strength_stats(activities: &[StrengthActivity]) -> StrengthStats {
    if activities.is_empty() {
        return StrengthStats::default();
    }

    let durations: Vec<f64> = activities
        .iter()
        .filter_map(|activity| activity.duration)
        .filter(|duration| *duration > 0.0)
        .collect();

    let stats = StrengthStats {
        total_workouts: activities.len(),
        total_sets: activities
            .iter()
            .map(|activity| u64::from(activity.total_sets.unwrap_or(0)))
            .sum(),
        total_exercises: activities
            .iter()
            .map(|activity| u64::from(activity.total_exercises.unwrap_or(0)))
            .sum(),
        average_workout_duration: mean_or_zero(&durations),
        most_worked_muscle_group: most_worked_muscle_group(activities),
    };

    debug!(
        workouts = stats.total_workouts,
        sets = stats.total_sets,
        top_group = stats.most_worked_muscle_group.as_deref().unwrap_or("-"),
        "Calculated strength stats"
    );
    stats
}
