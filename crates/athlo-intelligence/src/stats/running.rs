// ABOUTME: Running summary statistics: totals, averages, longest run and paces
// ABOUTME: Missing distances and durations count as zero, only positive paces are averaged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracing::debug;

use athlo_core::models::RunningActivity;

use super::mean_or_zero;

/// Summary statistics over a set of running activities
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunningStats {
    /// Sum of distances in km
    pub total_distance: f64,
    /// Sum of durations in seconds
    pub total_duration: f64,
    /// Number of activities, regardless of which fields they carry
    pub total_activities: usize,
    /// Mean distance over activities with a positive distance
    pub average_distance: f64,
    /// Largest single distance
    pub longest_run: f64,
    /// Mean of positive paces, seconds per km
    pub average_pace: f64,
    /// Smallest positive pace (lower is faster)
    pub fastest_pace: f64,
}

/// Compute running statistics. Empty input gives all zeros.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Safe: record counts are far below 2^52
pub fn calculate_running_stats(activities: &[RunningActivity]) -> RunningStats {
    if activities.is_empty() {
        return RunningStats::default();
    }

    let distances: Vec<f64> = activities
        .iter()
        .map(|activity| activity.distance.unwrap_or(0.0))
        .collect();
    let total_distance: f64 = distances.iter().sum();
    let total_duration: f64 = activities
        .iter()
        .map(|activity| activity.duration.unwrap_or(0.0))
        .sum();

    let with_distance = distances.iter().filter(|distance| **distance > 0.0).count();
    let average_distance = if with_distance == 0 {
        0.0
    } else {
        total_distance / with_distance as f64
    };

    let longest_run = distances.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let paces: Vec<f64> = activities
        .iter()
        .filter_map(|activity| activity.pace)
        .filter(|pace| *pace > 0.0)
        .collect();
    let fastest_pace = paces.iter().copied().reduce(f64::min).unwrap_or(0.0);

    let stats = RunningStats {
        total_distance,
        total_duration,
        total_activities: activities.len(),
        average_distance,
        longest_run,
        average_pace: mean_or_zero(&paces),
        fastest_pace,
    };

    debug!(
        activities = stats.total_activities,
        total_distance = stats.total_distance,
        paced = paces.len(),
        "Calculated running stats"
    );
    stats
}
