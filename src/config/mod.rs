// ABOUTME: Configuration module root for the Athlo client
// ABOUTME: Environment-only settings, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable parsing and the client configuration type
pub mod environment;

pub use environment::{ClientConfig, Environment};
