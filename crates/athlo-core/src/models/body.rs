// ABOUTME: Body measurement records (weight, body fat, circumferences) and weight history
// ABOUTME: WeightRecord is the denormalized date/weight projection used for charting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::Timestamped;

/// A single body measurement as returned by `GET /body/measurements`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurement {
    /// Unique identifier
    pub id: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: Option<String>,
    /// Weight in kg
    pub weight: Option<f64>,
    /// Body fat percentage
    pub body_fat_percentage: Option<f64>,
    /// Chest circumference in cm
    pub chest: Option<f64>,
    /// Waist circumference in cm
    pub waist: Option<f64>,
    /// Hips circumference in cm
    pub hips: Option<f64>,
    /// Left arm circumference in cm
    pub left_arm: Option<f64>,
    /// Right arm circumference in cm
    pub right_arm: Option<f64>,
    /// Left thigh circumference in cm
    pub left_thigh: Option<f64>,
    /// Right thigh circumference in cm
    pub right_thigh: Option<f64>,
    /// Left calf circumference in cm
    pub left_calf: Option<f64>,
    /// Right calf circumference in cm
    pub right_calf: Option<f64>,
    /// Neck circumference in cm
    pub neck: Option<f64>,
    /// Shoulder width in cm
    pub shoulders: Option<f64>,
    /// Free-form notes
    pub notes: Option<String>,
}

impl Timestamped for BodyMeasurement {
    fn timestamp(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

/// Date/weight pair from `GET /body/weight-history`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Weight in kg
    pub weight: f64,
}

impl Timestamped for WeightRecord {
    fn timestamp(&self) -> Option<&str> {
        Some(&self.date)
    }
}
