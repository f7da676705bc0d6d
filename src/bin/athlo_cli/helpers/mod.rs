// ABOUTME: Helper modules for athlo-cli
// ABOUTME: Output rendering shared by every command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
