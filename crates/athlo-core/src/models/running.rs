// ABOUTME: Running activity record with distance, duration and pace metrics
// ABOUTME: Derives the missing metric from the other two and computes average speed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::Timestamped;
use crate::constants::time::SECONDS_PER_HOUR;

/// A single running session as returned by `GET /activities/running`
///
/// # Examples
///
/// ```rust
/// use athlo_core::models::RunningActivity;
///
/// let run = RunningActivity {
///     distance: Some(10.0),
///     duration: Some(3600.0),
///     ..RunningActivity::default()
/// }
/// .complete_metrics();
///
/// assert_eq!(run.pace, Some(360.0));
/// assert_eq!(run.speed_kmh(), Some(10.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunningActivity {
    /// Unique identifier
    pub id: String,
    /// Start of the run, ISO-8601
    pub start_time: Option<String>,
    /// Optional title
    pub title: Option<String>,
    /// Distance in kilometers
    pub distance: Option<f64>,
    /// Duration in seconds
    pub duration: Option<f64>,
    /// Pace in seconds per kilometer; positive when present
    pub pace: Option<f64>,
    /// Steps per minute
    pub cadence: Option<u32>,
    /// Estimated calories burned
    pub calories: Option<u32>,
    /// Rate of perceived exertion (1-10)
    pub effort: Option<u8>,
    /// Average heart rate in BPM
    pub avg_heart_rate: Option<u32>,
    /// Free-form notes
    pub notes: Option<String>,
}

impl RunningActivity {
    /// Fill in the missing one of distance, duration and pace when the other
    /// two are present.
    ///
    /// - distance + duration gives pace (only when distance > 0)
    /// - pace + distance gives duration
    /// - pace + duration gives distance (only when pace > 0)
    ///
    /// Records with fewer than two metrics, or all three, are returned as-is.
    #[must_use]
    pub fn complete_metrics(mut self) -> Self {
        match (self.distance, self.duration, self.pace) {
            (Some(distance), Some(duration), None) if distance > 0.0 => {
                self.pace = Some(duration / distance);
            }
            (Some(distance), None, Some(pace)) => {
                self.duration = Some(pace * distance);
            }
            (None, Some(duration), Some(pace)) if pace > 0.0 => {
                self.distance = Some(duration / pace);
            }
            _ => {}
        }
        self
    }

    /// Average speed in km/h, when both distance and duration are usable
    #[must_use]
    pub fn speed_kmh(&self) -> Option<f64> {
        match (self.distance, self.duration) {
            (Some(distance), Some(duration)) if distance != 0.0 && duration > 0.0 => {
                Some(distance / (duration / SECONDS_PER_HOUR))
            }
            _ => None,
        }
    }
}

impl Timestamped for RunningActivity {
    fn timestamp(&self) -> Option<&str> {
        self.start_time.as_deref()
    }
}
