// ABOUTME: Tests for environment-driven client configuration
// ABOUTME: Covers defaults, clamping, overrides and rejection of malformed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use athlo::config::environment::env_keys;
use athlo::config::{ClientConfig, Environment};
use athlo::ErrorCode;
use serial_test::serial;

const ALL_KEYS: [&str; 7] = [
    env_keys::API_URL,
    env_keys::ACCESS_TOKEN,
    env_keys::HTTP_TIMEOUT_SECS,
    env_keys::CONNECT_TIMEOUT_SECS,
    env_keys::PAGE_SIZE,
    env_keys::WEIGHT_HISTORY_LIMIT,
    env_keys::ENVIRONMENT,
];

fn clear_env() {
    for key in ALL_KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();

    let config = ClientConfig::from_env().unwrap();

    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.api_url, "http://localhost:8000");
    assert_eq!(config.access_token, None);
    assert_eq!(config.page_size, 100);
    assert_eq!(config.weight_history_limit, 30);
    assert_eq!(config.http_timeout(), Duration::from_secs(30));
    assert_eq!(config.connect_timeout(), Duration::from_secs(10));
}

#[test]
#[serial]
fn test_values_read_from_env() {
    clear_env();
    env::set_var(env_keys::API_URL, "https://api.athlo.app/v1/");
    env::set_var(env_keys::ACCESS_TOKEN, "  token-123  ");
    env::set_var(env_keys::HTTP_TIMEOUT_SECS, "5");
    env::set_var(env_keys::PAGE_SIZE, "25");
    env::set_var(env_keys::WEIGHT_HISTORY_LIMIT, "90");
    env::set_var(env_keys::ENVIRONMENT, "production");

    let config = ClientConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.api_url, "https://api.athlo.app/v1");
    assert_eq!(config.access_token.as_deref(), Some("token-123"));
    assert_eq!(config.http_timeout_secs, 5);
    assert_eq!(config.page_size, 25);
    assert_eq!(config.weight_history_limit, 90);
    assert!(config.environment.is_production());
}

#[test]
#[serial]
fn test_blank_values_fall_back_to_defaults() {
    clear_env();
    env::set_var(env_keys::ACCESS_TOKEN, "   ");
    env::set_var(env_keys::PAGE_SIZE, "");

    let config = ClientConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.access_token, None);
    assert_eq!(config.page_size, 100);
}

#[test]
#[serial]
fn test_page_size_is_clamped() {
    clear_env();
    env::set_var(env_keys::PAGE_SIZE, "500");
    let large = ClientConfig::from_env().unwrap();

    env::set_var(env_keys::PAGE_SIZE, "0");
    let zero = ClientConfig::from_env().unwrap();
    clear_env();

    assert_eq!(large.page_size, 100);
    assert_eq!(zero.page_size, 1);
}

#[test]
#[serial]
fn test_malformed_number_is_rejected() {
    clear_env();
    env::set_var(env_keys::WEIGHT_HISTORY_LIMIT, "thirty");

    let err = ClientConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains(env_keys::WEIGHT_HISTORY_LIMIT));
}

#[test]
#[serial]
fn test_zero_timeout_is_rejected() {
    clear_env();
    env::set_var(env_keys::CONNECT_TIMEOUT_SECS, "0");

    let err = ClientConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_non_http_url_is_rejected() {
    clear_env();
    env::set_var(env_keys::API_URL, "ftp://files.example.com");

    let err = ClientConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_unknown_environment_falls_back_to_development() {
    clear_env();
    env::set_var(env_keys::ENVIRONMENT, "staging");

    let config = ClientConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.environment, Environment::Development);
}

#[test]
fn test_builder_overrides() {
    let config = ClientConfig::for_url("http://127.0.0.1:9000/")
        .unwrap()
        .with_access_token("abc");

    assert_eq!(config.api_url, "http://127.0.0.1:9000");
    assert_eq!(config.access_token.as_deref(), Some("abc"));

    let moved = config.with_api_url("https://example.com").unwrap();
    assert_eq!(moved.api_url, "https://example.com");
    assert!(moved.with_api_url("nope").is_err());
}
