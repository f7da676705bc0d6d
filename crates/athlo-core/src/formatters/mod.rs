// ABOUTME: Display formatters for paces, durations, distances and chart dates
// ABOUTME: Pure, total string rendering applied at render time and never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Display Formatters
//!
//! Every function here is total: non-positive and NaN inputs render a fixed
//! placeholder instead of failing.
//!
//! ```rust
//! use athlo_core::formatters::{format_distance, format_duration, format_pace};
//!
//! assert_eq!(format_pace(125.0), "2:05");
//! assert_eq!(format_duration(3661.0), "1:01:01");
//! assert_eq!(format_distance(5.27), "5.3");
//! ```

use chrono::{Datelike, NaiveDate};

use crate::constants::charts::{FULL_DATE_FORMAT, SHORT_DATE_FORMAT};
use crate::constants::display::{EMPTY_DISTANCE, EMPTY_DURATION, EMPTY_PACE};
use crate::constants::time::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Whether a value carries data under the "falsy means absent" policy
#[inline]
fn is_positive(value: f64) -> bool {
    value > 0.0
}

/// Render a pace in seconds per km as `M:SS`
///
/// Returns `--:--` when the pace is zero, negative or NaN.
#[must_use]
pub fn format_pace(seconds: f64) -> String {
    if !is_positive(seconds) {
        return EMPTY_PACE.to_owned();
    }
    let minutes = (seconds / SECONDS_PER_MINUTE).floor() as u64;
    let secs = (seconds % SECONDS_PER_MINUTE).floor() as u64;
    format!("{minutes}:{secs:02}")
}

/// Render a pace in seconds per km as `M:SS/km`, or `None` when absent
#[must_use]
pub fn format_pace_per_km(seconds: Option<f64>) -> Option<String> {
    seconds
        .filter(|s| is_positive(*s))
        .map(|s| format!("{}/km", format_pace(s)))
}

/// Render a duration in seconds as `H:MM:SS`, or `M:SS` under an hour
///
/// Returns `0:00` when the duration is zero, negative or NaN.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if !is_positive(seconds) {
        return EMPTY_DURATION.to_owned();
    }
    let hours = (seconds / SECONDS_PER_HOUR).floor() as u64;
    let minutes = ((seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE).floor() as u64;
    let secs = (seconds % SECONDS_PER_MINUTE).floor() as u64;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Render a distance in km with one decimal
///
/// Returns `0` when the distance is zero, negative or NaN.
#[must_use]
pub fn format_distance(km: f64) -> String {
    if !is_positive(km) {
        return EMPTY_DISTANCE.to_owned();
    }
    format!("{km:.1}")
}

/// Short chart label, `dd/MM`
#[must_use]
pub fn format_short_date<D: Datelike>(date: &D) -> String {
    NaiveDate::from_ymd_opt(date.year(), date.month(), date.day())
        .map(|d| d.format(SHORT_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Full display date, `dd/MM/yyyy`
#[must_use]
pub fn format_date<D: Datelike>(date: &D) -> String {
    NaiveDate::from_ymd_opt(date.year(), date.month(), date.day())
        .map(|d| d.format(FULL_DATE_FORMAT).to_string())
        .unwrap_or_default()
}
