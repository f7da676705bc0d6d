// ABOUTME: Tests for pace, duration and distance display formatting
// ABOUTME: Covers placeholder rendering for absent values and zero padding rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use athlo_core::formatters::{format_distance, format_duration, format_pace, format_pace_per_km};

#[test]
fn test_format_pace_placeholder_for_non_positive() {
    assert_eq!(format_pace(0.0), "--:--");
    assert_eq!(format_pace(-5.0), "--:--");
}

#[test]
fn test_format_pace_pads_seconds_only() {
    assert_eq!(format_pace(125.0), "2:05");
    assert_eq!(format_pace(59.0), "0:59");
    assert_eq!(format_pace(600.0), "10:00");
}

#[test]
fn test_format_pace_per_km() {
    assert_eq!(format_pace_per_km(Some(330.0)).as_deref(), Some("5:30/km"));
    assert_eq!(format_pace_per_km(Some(0.0)), None);
    assert_eq!(format_pace_per_km(None), None);
}

#[test]
fn test_format_duration_with_hours() {
    assert_eq!(format_duration(3661.0), "1:01:01");
    assert_eq!(format_duration(7200.0), "2:00:00");
}

#[test]
fn test_format_duration_under_an_hour() {
    assert_eq!(format_duration(59.0), "0:59");
    assert_eq!(format_duration(1805.0), "30:05");
}

#[test]
fn test_format_duration_placeholder() {
    assert_eq!(format_duration(0.0), "0:00");
    assert_eq!(format_duration(-30.0), "0:00");
}

#[test]
fn test_format_distance() {
    assert_eq!(format_distance(0.0), "0");
    assert_eq!(format_distance(-1.0), "0");
    assert_eq!(format_distance(10.0), "10.0");
    assert_eq!(format_distance(21.0975), "21.1");
}
