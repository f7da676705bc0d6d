// ABOUTME: Main library entry point for the Athlo fitness statistics client
// ABOUTME: Wires configuration, logging and the REST client to the statistics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Athlo
//!
//! Client side of the Athlo fitness tracker: fetches running activities,
//! strength sessions and body measurements from the Athlo REST API and turns
//! them into period-scoped statistics, chart series and goal progress.
//!
//! ## Architecture
//!
//! - **`athlo_core`**: record models, errors, constants and display formatters
//! - **`athlo_intelligence`**: pure period filtering, aggregation and chart shaping
//! - **config**: environment-only settings (`ATHLO_*` variables)
//! - **logging**: `tracing` subscriber setup
//! - **client**: typed HTTP client with bearer authentication
//! - **dashboard**: concurrent fetch plus per-screen summaries
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use athlo::client::AthloApiClient;
//! use athlo::config::ClientConfig;
//! use athlo::dashboard::DashboardService;
//! use athlo_core::errors::AppResult;
//! use athlo_core::models::PeriodType;
//! use chrono::Local;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let client = AthloApiClient::new(ClientConfig::from_env()?)?;
//!     let report = DashboardService::new(client)
//!         .report(PeriodType::Month, &Local::now())
//!         .await?;
//!     println!("{} km this month", report.running.stats.total_distance);
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Athlo REST API client
pub mod client;

/// Dashboard service and screen summaries
pub mod dashboard;

pub use athlo_core::errors::{AppError, AppResult, ErrorCode};
pub use athlo_core::models::PeriodType;
