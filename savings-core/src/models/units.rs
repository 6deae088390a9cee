use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a unit selector value is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognised {kind} unit '{value}'")]
pub struct UnknownUnitError {
    pub kind: &'static str,
    pub value: String,
}

/// Period the entered working hours refer to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkingHoursUnit {
    #[default]
    PerDay,
    PerWeek,
}

impl WorkingHoursUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerDay => "perDay",
            Self::PerWeek => "perWeek",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PerDay => "per Day",
            Self::PerWeek => "per Week",
        }
    }

    /// Accepts `perDay`, `per_day`, `day` (and the week equivalents),
    /// ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_unit(s).as_str() {
            "perday" | "day" | "daily" => Some(Self::PerDay),
            "perweek" | "week" | "weekly" => Some(Self::PerWeek),
            _ => None,
        }
    }
}

impl FromStr for WorkingHoursUnit {
    type Err = UnknownUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownUnitError {
            kind: "working hours",
            value: s.to_string(),
        })
    }
}

impl fmt::Display for WorkingHoursUnit {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Period the entered gross wage refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GrossWageUnit {
    PerMonth,
    #[default]
    PerYear,
}

impl GrossWageUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerMonth => "perMonth",
            Self::PerYear => "perYear",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PerMonth => "per Month",
            Self::PerYear => "per Year",
        }
    }

    /// Accepts `perMonth`, `per_month`, `month` (and the year equivalents),
    /// ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_unit(s).as_str() {
            "permonth" | "month" | "monthly" => Some(Self::PerMonth),
            "peryear" | "year" | "yearly" | "annual" => Some(Self::PerYear),
            _ => None,
        }
    }
}

impl FromStr for GrossWageUnit {
    type Err = UnknownUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownUnitError {
            kind: "gross wage",
            value: s.to_string(),
        })
    }
}

impl fmt::Display for GrossWageUnit {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn normalize_unit(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
