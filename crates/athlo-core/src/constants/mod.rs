// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for period windows, chart shaping, goals and API paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace.

/// Time arithmetic constants
pub mod time {
    /// Seconds in a minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    /// Seconds in an hour
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
    /// Days subtracted for the `week` period
    pub const WEEK_PERIOD_DAYS: i64 = 7;
    /// Months subtracted for the `month` period
    pub const MONTH_PERIOD_MONTHS: u32 = 1;
    /// Months subtracted for the `year` period
    pub const YEAR_PERIOD_MONTHS: u32 = 12;
    /// Sentinel year used as "beginning of time" by the `all` period
    pub const ALL_TIME_START_YEAR: i32 = 2000;
    /// Look-back window for body composition change
    pub const BODY_CHANGE_WINDOW_DAYS: i64 = 30;
}

/// Chart-series shaping limits
pub mod charts {
    /// Number of most recent weekly buckets kept by the weekly distance chart
    pub const WEEKLY_DISTANCE_BUCKETS: usize = 8;
    /// Number of muscle groups kept by the distribution chart
    pub const MUSCLE_GROUP_TOP_N: usize = 6;
    /// Label format for chart axes (`dd/MM`)
    pub const SHORT_DATE_FORMAT: &str = "%d/%m";
    /// Full date display format (`dd/MM/yyyy`)
    pub const FULL_DATE_FORMAT: &str = "%d/%m/%Y";
}

/// Display placeholders used by the formatters
pub mod display {
    /// Rendered when no usable pace exists
    pub const EMPTY_PACE: &str = "--:--";
    /// Rendered when no usable duration exists
    pub const EMPTY_DURATION: &str = "0:00";
    /// Rendered when no usable distance exists
    pub const EMPTY_DISTANCE: &str = "0";
}

/// History and pagination limits mirrored from the API
pub mod limits {
    /// Default number of records returned by exercise history
    pub const DEFAULT_EXERCISE_HISTORY_LIMIT: usize = 10;
    /// Default number of points returned by weight history
    pub const DEFAULT_WEIGHT_HISTORY_LIMIT: usize = 30;
    /// Largest page the running-activity listing accepts
    pub const MAX_PAGE_SIZE: u32 = 100;
}

/// REST API paths
pub mod endpoints {
    /// Login endpoint
    pub const AUTH_LOGIN: &str = "/auth/login";
    /// Token refresh endpoint
    pub const AUTH_REFRESH: &str = "/auth/refresh";
    /// Running activity collection
    pub const RUNNING_ACTIVITIES: &str = "/activities/running";
    /// Strength activity collection
    pub const STRENGTH_ACTIVITIES: &str = "/strength/activities";
    /// Exercise history prefix (exercise name appended)
    pub const STRENGTH_HISTORY: &str = "/strength/history";
    /// Body measurement collection
    pub const BODY_MEASUREMENTS: &str = "/body/measurements";
    /// Weight history projection
    pub const BODY_WEIGHT_HISTORY: &str = "/body/weight-history";
    /// Health check
    pub const HEALTH: &str = "/health";
}
