// ABOUTME: PeriodType selector for scoping statistics to week, month, year or all time
// ABOUTME: Closed enumeration with lowercase serde and strict string parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Coarse, named time window used to scope statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    /// Last seven days
    #[default]
    Week,
    /// Last calendar month
    Month,
    /// Last calendar year
    Year,
    /// Everything since the year 2000
    All,
}

impl PeriodType {
    /// Every period, in widening order
    pub const ALL_PERIODS: [Self; 4] = [Self::Week, Self::Month, Self::Year, Self::All];

    /// Lowercase token used on the wire and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::All => "all",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            "all" => Ok(Self::All),
            other => Err(AppError::invalid_input(format!(
                "unknown period '{other}', expected one of: week, month, year, all"
            ))),
        }
    }
}
