// ABOUTME: Command implementations for athlo-cli
// ABOUTME: Each command fetches through the dashboard service and prints text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::info;

use athlo::client::AthloApiClient;
use athlo::dashboard::DashboardService;
use athlo_core::models::PeriodType;

use crate::helpers::display::{
    display_body, display_exercise, display_report, display_running, display_strength,
    display_tokens,
};

/// Output mode shared by every command
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    fn emit<T: Serialize>(self, value: &T, render: impl FnOnce(&T)) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            render(value);
        }
        Ok(())
    }
}

/// Home screen: goals plus every summary
pub async fn dashboard(
    service: &DashboardService,
    period: PeriodType,
    now: &DateTime<Local>,
    output: Output,
) -> Result<()> {
    let report = service.report(period, now).await?;
    output.emit(&report, display_report)
}

/// Running screen
pub async fn running(
    service: &DashboardService,
    period: PeriodType,
    now: &DateTime<Local>,
    output: Output,
) -> Result<()> {
    let summary = service.running(period, now).await?;
    output.emit(&summary, |s| display_running(s, period))
}

/// Strength screen
pub async fn strength(
    service: &DashboardService,
    period: PeriodType,
    now: &DateTime<Local>,
    output: Output,
) -> Result<()> {
    let summary = service.strength(period, now).await?;
    output.emit(&summary, |s| display_strength(s, period))
}

/// Body screen
pub async fn body(service: &DashboardService, now: &DateTime<Local>, output: Output) -> Result<()> {
    let summary = service.body(now).await?;
    output.emit(&summary, display_body)
}

/// Exercise history
pub async fn exercise(
    service: &DashboardService,
    name: &str,
    limit: usize,
    output: Output,
) -> Result<()> {
    let summary = service.exercise(name, limit, &Local).await?;
    output.emit(&summary, display_exercise)
}

/// Log in and print the token pair
pub async fn login(
    mut client: AthloApiClient,
    email: &str,
    password: &str,
    output: Output,
) -> Result<()> {
    info!(email, "Logging in");
    let tokens = client.login(email, password).await?;
    output.emit(&tokens, display_tokens)
}

/// Rotate tokens
pub async fn refresh(mut client: AthloApiClient, refresh_token: &str, output: Output) -> Result<()> {
    let tokens = client.refresh(refresh_token).await?;
    output.emit(&tokens, display_tokens)
}

pub async fn health(client: &AthloApiClient, output: Output) -> Result<()> {
    let status = client.health().await?;
    output.emit(&status, |s| {
        println!("{} is {}", client.config().api_url, s.status);
    })
}
