// ABOUTME: Body composition statistics: current weight and body fat with 30-day change
// ABOUTME: Zero readings count as absent when computing the change, matching the mobile app
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Duration, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::debug;

use athlo_core::constants::time::BODY_CHANGE_WINDOW_DAYS;
use athlo_core::models::BodyMeasurement;

use crate::period::newest_first;

/// Current body composition and its change over the last 30 days
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyStats {
    /// Weight from the most recent measurement, kg
    pub current_weight: Option<f64>,
    /// Body fat from the most recent measurement, percent
    pub current_body_fat: Option<f64>,
    /// Current weight minus the weight measured at least 30 days ago
    pub weight_change_30_days: Option<f64>,
    /// Current body fat minus the body fat measured at least 30 days ago
    pub body_fat_change_30_days: Option<f64>,
}

/// Compute body statistics relative to `now`.
///
/// The latest measurement is the one with the newest date; undated
/// measurements are never considered. The comparison
/// point is the newest measurement dated at or before `now - 30 days`. A
/// change is only reported when both readings are present and non-zero: a
/// stored `0.0` is indistinguishable from "not measured" in the app's data.
#[must_use]
pub fn calculate_body_stats<Tz: TimeZone>(
    measurements: &[BodyMeasurement],
    now: &DateTime<Tz>,
) -> BodyStats {
    let ordered = newest_first(measurements, &now.timezone());
    // undated measurements sort last, so an undated head means nothing is dated
    let Some((_, latest)) = ordered.first().filter(|(date, _)| date.is_some()) else {
        return BodyStats::default();
    };

    let cutoff = now.clone() - Duration::days(BODY_CHANGE_WINDOW_DAYS);
    let old_measurement = ordered
        .iter()
        .find(|(date, _)| date.as_ref().is_some_and(|date| *date <= cutoff))
        .map(|(_, measurement)| *measurement);

    let stats = BodyStats {
        current_weight: latest.weight,
        current_body_fat: latest.body_fat_percentage,
        weight_change_30_days: old_measurement
            .and_then(|old| change(latest.weight, old.weight)),
        body_fat_change_30_days: old_measurement
            .and_then(|old| change(latest.body_fat_percentage, old.body_fat_percentage)),
    };

    debug!(
        measurements = measurements.len(),
        has_baseline = old_measurement.is_some(),
        "Calculated body stats"
    );
    stats
}

/// Difference between two readings when both carry data
fn change(current: Option<f64>, previous: Option<f64>) -> Option<f64> {
    Some(reading(current)? - reading(previous)?)
}

/// A reading that counts as data: present, non-zero and not NaN
fn reading(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}
