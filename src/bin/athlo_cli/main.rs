// ABOUTME: Athlo CLI - terminal dashboard for the Athlo fitness tracker API
// ABOUTME: Prints running, strength and body statistics, goal progress and exercise history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Log in and export the printed token
//! athlo-cli login --email me@example.com --password secret
//!
//! # Home dashboard for the last month
//! athlo-cli --period month dashboard
//!
//! # Running screen for the current year as JSON
//! athlo-cli --period year --json running
//!
//! # Last five bench press sessions
//! athlo-cli exercise "Bench Press" --limit 5
//!
//! # Check the backend is reachable
//! athlo-cli health
//! ```

mod commands;
mod helpers;

use std::env;

use anyhow::Result;
use clap::{Parser, Subcommand};
use chrono::Local;
use tracing::debug;

use athlo::client::AthloApiClient;
use athlo::config::ClientConfig;
use athlo::dashboard::DashboardService;
use athlo::logging::LoggingConfig;
use athlo_core::constants::limits::DEFAULT_EXERCISE_HISTORY_LIMIT;
use athlo_core::errors::AppError;
use athlo_core::models::PeriodType;

use commands::Output;

#[derive(Parser)]
#[command(
    name = "athlo-cli",
    version,
    about = "Athlo fitness statistics CLI",
    long_about = "Fetches your Athlo data and prints period statistics, chart series and goal progress."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// API base URL override
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Access token override
    #[arg(long, global = true)]
    token: Option<String>,

    /// Period to scope statistics to: week, month, year or all
    #[arg(long, short = 'p', global = true, default_value = "week", value_parser = parse_period)]
    period: PeriodType,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Goals plus running, strength and body summaries
    Dashboard,

    /// Running statistics and charts
    Running,

    /// Strength statistics and charts
    Strength,

    /// Body measurements and weight history
    Body,

    /// History of one exercise, newest first
    Exercise {
        /// Exercise name (case-insensitive)
        name: String,

        /// Maximum sessions to show
        #[arg(long, default_value_t = DEFAULT_EXERCISE_HISTORY_LIMIT)]
        limit: usize,
    },

    /// Exchange credentials for tokens
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Exchange a refresh token for a new token pair
    Refresh {
        /// Refresh token from a previous login
        refresh_token: String,
    },

    /// Check the backend is reachable
    Health,
}

fn parse_period(raw: &str) -> Result<PeriodType, AppError> {
    raw.trim().to_lowercase().parse()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    } else if env::var("RUST_LOG").is_err() {
        logging = logging.with_level("warn");
    }
    logging.init()?;

    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = cli.api_url.as_deref() {
        config = config.with_api_url(api_url)?;
    }
    if let Some(token) = cli.token {
        config = config.with_access_token(token);
    }
    debug!(api_url = %config.api_url, period = %cli.period, "Starting athlo-cli");

    let client = AthloApiClient::new(config)?;
    let output = Output { json: cli.json };
    let now = Local::now();

    match cli.command {
        Command::Login { email, password } => {
            commands::login(client, &email, &password, output).await?;
        }
        Command::Refresh { refresh_token } => {
            commands::refresh(client, &refresh_token, output).await?;
        }
        Command::Health => commands::health(&client, output).await?,
        Command::Dashboard => {
            let service = DashboardService::new(client);
            commands::dashboard(&service, cli.period, &now, output).await?;
        }
        Command::Running => {
            let service = DashboardService::new(client);
            commands::running(&service, cli.period, &now, output).await?;
        }
        Command::Strength => {
            let service = DashboardService::new(client);
            commands::strength(&service, cli.period, &now, output).await?;
        }
        Command::Body => {
            let service = DashboardService::new(client);
            commands::body(&service, &now, output).await?;
        }
        Command::Exercise { name, limit } => {
            let service = DashboardService::new(client);
            commands::exercise(&service, &name, limit, output).await?;
        }
    }

    Ok(())
}
