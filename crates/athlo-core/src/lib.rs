// ABOUTME: Core types and constants for the Athlo fitness statistics workspace
// ABOUTME: Foundation crate with record models, error handling, display formatters, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Athlo Core
//!
//! Foundation crate providing the record shapes returned by the Athlo REST API
//! and the small value types shared by the statistics engine and its callers.
//! Nothing in this crate performs I/O.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Chart limits, goal defaults, and time constants
//! - **models**: Running, strength and body records plus `PeriodType` and `ChartDataPoint`
//! - **formatters**: Pace, duration, distance and date display strings

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Record models consumed by the statistics engine
pub mod models;

/// Display formatters for paces, durations, distances and dates
pub mod formatters;
