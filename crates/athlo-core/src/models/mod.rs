// ABOUTME: Record models returned by the Athlo REST API and consumed by the statistics engine
// ABOUTME: Re-exports running, strength and body records plus PeriodType and ChartDataPoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Records are immutable snapshots of what the API returned. Every nullable
//! field is modeled as `Option<_>`; the statistics engine substitutes defaults
//! at the aggregation boundary instead of the models doing it ad hoc.
//!
//! Timestamps are kept as the raw ISO-8601 strings the API produced. Parsing
//! happens where the comparison happens, so a malformed value only affects the
//! computation that needed it.

mod body;
mod chart;
mod period;
mod running;
mod strength;

pub use body::{BodyMeasurement, WeightRecord};
pub use chart::ChartDataPoint;
pub use period::PeriodType;
pub use running::RunningActivity;
pub use strength::{ExerciseHistory, ExerciseHistoryRecord, ExerciseLog, StrengthActivity};

/// A record that exposes an optional raw timestamp used for period filtering
/// and chronological ordering.
pub trait Timestamped {
    /// Raw ISO-8601 timestamp as returned by the API, if any
    fn timestamp(&self) -> Option<&str>;
}
