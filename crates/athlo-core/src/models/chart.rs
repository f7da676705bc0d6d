// ABOUTME: ChartDataPoint value produced by the chart-series builder
// ABOUTME: Transient label/value pair with an optional source date, never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One point of a time-series or categorical chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    /// Plotted value
    pub value: f64,
    /// Axis or slice label
    pub label: String,
    /// Source date of the point, when it came from a dated record
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub date: Option<String>,
}

impl ChartDataPoint {
    /// Create a categorical point with no source date
    #[must_use]
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            date: None,
        }
    }

    /// Attach the source date
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}
