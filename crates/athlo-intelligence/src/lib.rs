// ABOUTME: Statistics engine for Athlo: period filtering, aggregation and chart shaping
// ABOUTME: Pure functions over API record snapshots with the current moment injected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Athlo Intelligence
//!
//! Computation layer behind the Athlo screens. Raw record collections flow
//! through the period filter, then into the aggregation engine and the
//! chart-series builder in parallel. Formatting is applied at render time by
//! `athlo_core::formatters`.
//!
//! Every function here is synchronous and side-effect free. Functions that
//! depend on "today" take `now` explicitly, and its time zone defines what
//! "local" means for day boundaries.
//!
//! ```rust
//! use athlo_core::models::{PeriodType, RunningActivity};
//! use athlo_intelligence::period::filter_records_for_period;
//! use athlo_intelligence::stats::calculate_running_stats;
//! use chrono::{FixedOffset, TimeZone};
//!
//! let tz = FixedOffset::west_opt(3 * 3600).unwrap();
//! let now = tz.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
//! let runs = vec![RunningActivity {
//!     id: "r1".into(),
//!     start_time: Some("2025-03-08T07:00:00".into()),
//!     distance: Some(5.0),
//!     ..RunningActivity::default()
//! }];
//!
//! let this_week = filter_records_for_period(&runs, PeriodType::Week, &now);
//! assert_eq!(calculate_running_stats(&this_week).total_distance, 5.0);
//! ```

/// Period resolution, timestamp parsing and window filtering
pub mod period;

/// Summary statistics for running, strength and body data
pub mod stats;

/// Chart-series builders
pub mod charts;

/// Insertion-ordered muscle-group tallies
pub mod muscle_groups;

/// Progress toward the fixed home-screen goals
pub mod goals;

/// Exercise history and weight-history projection
pub mod history;

pub use period::{filter_by_period, filter_records_for_period, resolve_period, DateRange};
pub use stats::{
    calculate_body_stats, calculate_running_stats, calculate_strength_stats, BodyStats,
    RunningStats, StrengthStats,
};
