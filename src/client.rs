// ABOUTME: HTTP client for the Athlo REST API with bearer authentication and pagination
// ABOUTME: Maps transport failures and non-success statuses onto AppError codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Athlo API client
//!
//! Thin typed wrapper over the backend routes. Every collection call returns
//! the raw records; filtering and aggregation happen in
//! `athlo_intelligence`.

use reqwest::{Client, ClientBuilder, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info, warn};
use url::Url;

use athlo_core::constants::endpoints;
use athlo_core::errors::{AppError, AppResult, ErrorCode};
use athlo_core::models::{
    BodyMeasurement, ExerciseHistory, RunningActivity, StrengthActivity, WeightRecord,
};

use crate::config::ClientConfig;

const SERVICE: &str = "Athlo API";

/// Access and refresh tokens issued by the auth routes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived JWT sent as the bearer token
    pub access_token: String,
    /// Long-lived token exchanged for a new pair
    pub refresh_token: String,
    /// Always `bearer`
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".into()
}

/// Backend health probe result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Reported status, `healthy` when the backend is up
    pub status: String,
    /// Backend version, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Client for the Athlo REST API
#[derive(Debug, Clone)]
pub struct AthloApiClient {
    http: Client,
    config: ClientConfig,
}

impl AthloApiClient {
    /// Build a client with the configured timeouts
    ///
    /// # Errors
    ///
    /// Returns an internal error if the TLS backend cannot be initialized
    pub fn new(config: ClientConfig) -> AppResult<Self> {
        let http = ClientBuilder::new()
            .timeout(config.http_timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(concat!("athlo/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::internal("failed to build HTTP client").with_source(e))?;
        Ok(Self { http, config })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Current bearer token, if any
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.config.access_token.as_deref()
    }

    /// Exchange credentials for tokens and keep the access token
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` on rejected credentials, or a transport error
    pub async fn login(&mut self, email: &str, password: &str) -> AppResult<TokenPair> {
        let request = self
            .http
            .post(self.url(endpoints::AUTH_LOGIN))
            .json(&LoginRequest { email, password });
        let tokens: TokenPair = self.send_json(request, endpoints::AUTH_LOGIN).await?;
        self.config.access_token = Some(tokens.access_token.clone());
        info!("Logged in to Athlo API");
        Ok(tokens)
    }

    /// Exchange a refresh token for a new pair and keep the new access token
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` when the refresh token is revoked or expired
    pub async fn refresh(&mut self, refresh_token: &str) -> AppResult<TokenPair> {
        let request = self
            .http
            .post(self.url(endpoints::AUTH_REFRESH))
            .json(&RefreshRequest { refresh_token });
        let tokens: TokenPair = self.send_json(request, endpoints::AUTH_REFRESH).await?;
        self.config.access_token = Some(tokens.access_token.clone());
        debug!("Refreshed Athlo API access token");
        Ok(tokens)
    }

    /// Probe the backend health route (no authentication)
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or unhealthy
    pub async fn health(&self) -> AppResult<HealthStatus> {
        let request = self.http.get(self.url(endpoints::HEALTH));
        self.send_json(request, endpoints::HEALTH).await
    }

    /// Every running activity, following `limit`/`offset` pages until a short page
    ///
    /// Records come back with missing distance, duration or pace derived
    /// from the other two.
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a token, or the first failing page's error
    pub async fn running_activities(&self) -> AppResult<Vec<RunningActivity>> {
        let activities: Vec<RunningActivity> =
            self.fetch_all_pages(endpoints::RUNNING_ACTIVITIES).await?;
        Ok(activities
            .into_iter()
            .map(RunningActivity::complete_metrics)
            .collect())
    }

    /// Every strength session, paged the same way as running activities
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a token, or the first failing page's error
    pub async fn strength_activities(&self) -> AppResult<Vec<StrengthActivity>> {
        self.fetch_all_pages(endpoints::STRENGTH_ACTIVITIES).await
    }

    /// Every body measurement
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a token, or the request's error
    pub async fn body_measurements(&self) -> AppResult<Vec<BodyMeasurement>> {
        let request = self.authorized_get(endpoints::BODY_MEASUREMENTS)?;
        self.send_json(request, endpoints::BODY_MEASUREMENTS).await
    }

    /// Most recent `limit` weight readings, ascending by date
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a token, or the request's error
    pub async fn weight_history(&self, limit: usize) -> AppResult<Vec<WeightRecord>> {
        let request = self
            .authorized_get(endpoints::BODY_WEIGHT_HISTORY)?
            .query(&[("limit", limit.to_string())]);
        self.send_json(request, endpoints::BODY_WEIGHT_HISTORY)
            .await
    }

    /// Server-side history of one exercise, newest first
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a token, or the request's error
    pub async fn exercise_history(
        &self,
        exercise_name: &str,
        limit: usize,
    ) -> AppResult<ExerciseHistory> {
        let mut url = Url::parse(&self.url(endpoints::STRENGTH_HISTORY)).map_err(|e| {
            AppError::new(ErrorCode::ConfigInvalid, "API URL cannot address a route")
                .with_source(e)
        })?;
        url.path_segments_mut()
            .map_err(|()| AppError::new(ErrorCode::ConfigInvalid, "API URL cannot be a base"))?
            .push(exercise_name);

        let token = self.bearer()?;
        let request = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(&[("limit", limit.to_string())]);
        self.send_json(request, endpoints::STRENGTH_HISTORY).await
    }

    async fn fetch_all_pages<T: DeserializeOwned>(&self, route: &str) -> AppResult<Vec<T>> {
        let page_size = self.config.page_size.max(1) as usize;
        let mut records = Vec::new();
        let mut offset: usize = 0;

        loop {
            let request = self.authorized_get(route)?.query(&[
                ("limit", page_size.to_string()),
                ("offset", offset.to_string()),
            ]);
            let page: Vec<T> = self.send_json(request, route).await?;
            let fetched = page.len();
            records.extend(page);
            debug!(route, offset, fetched, "Fetched page");

            if fetched < page_size {
                break;
            }
            offset += fetched;
        }

        Ok(records)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_url)
    }

    fn bearer(&self) -> AppResult<&str> {
        self.access_token().ok_or_else(AppError::auth_required)
    }

    fn authorized_get(&self, path: &str) -> AppResult<RequestBuilder> {
        let token = self.bearer()?;
        Ok(self.http.get(self.url(path)).bearer_auth(token))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        route: &str,
    ) -> AppResult<T> {
        let response = request.send().await.map_err(|e| transport_error(route, e))?;
        let response = check_status(response, route).await?;
        response.json::<T>().await.map_err(|e| {
            AppError::new(
                ErrorCode::SerializationError,
                format!("unexpected response body from {route}"),
            )
            .with_source(e)
        })
    }
}

fn transport_error(route: &str, error: reqwest::Error) -> AppError {
    warn!(route, error = %error, "Athlo API request failed");
    if error.is_timeout() || error.is_connect() {
        AppError::external_unavailable(SERVICE, format!("{route}: {error}")).with_source(error)
    } else {
        AppError::external_service(SERVICE, format!("{route}: {error}")).with_source(error)
    }
}

async fn check_status(response: Response, route: &str) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorBody>(&body).map_or(body, |parsed| parsed.detail);
    warn!(route, status = status.as_u16(), detail = %detail, "Athlo API returned an error");

    Err(match status {
        StatusCode::UNAUTHORIZED if is_expiry(&detail) => AppError::auth_expired(detail),
        StatusCode::UNAUTHORIZED => AppError::auth_invalid(if detail.is_empty() {
            "access token rejected".to_owned()
        } else {
            detail
        }),
        StatusCode::NOT_FOUND => AppError::not_found(route),
        _ => AppError::external_service(SERVICE, format!("HTTP {status}: {detail}")),
    }
    .with_details(json!({ "status": status.as_u16(), "route": route })))
}

/// The backend reports an expired refresh token as "... has expired"; the
/// access-token guard only says "invalid or expired", which stays `AuthInvalid`
fn is_expiry(detail: &str) -> bool {
    detail.to_ascii_lowercase().contains("has expired")
}
