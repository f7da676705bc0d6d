// ABOUTME: Aggregation engine computing summary statistics per training domain
// ABOUTME: Running, strength and body functions are total and return stable empty states
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Aggregation Engine
//!
//! Three independent pure functions, one per domain. None of them fail: an
//! empty input yields the domain's empty state (zeros for running and
//! strength, `None` for body), never NaN.
//!
//! Nullable record fields are defaulted here, at the aggregation boundary.

mod body;
mod running;
mod strength;

pub use body::{calculate_body_stats, BodyStats};
pub use running::{calculate_running_stats, RunningStats};
pub use strength::{calculate_strength_stats, StrengthStats};

/// Arithmetic mean, or 0 for an empty slice
#[allow(clippy::cast_precision_loss)] // Safe: record counts are far below 2^52
pub(crate) fn mean_or_zero(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
