//! Pet status classification.
//!
//! A threshold classifier over the live weight reading plus, when a
//! last-measurement sensor is configured, the validity of its timestamp.
//! The [`StatusMonitor`] keeps the previous report so the host only hears
//! about transitions.
//!
//! ## Check order
//!
//! 1. Weight: unavailable, zero, or at/above [`MAX_PLAUSIBLE_WEIGHT_KG`].
//! 2. Last measurement (only if configured): invalid format or absent.
//!
//! A last-measurement issue replaces a weight issue in the report; the
//! status is `problem` either way.

use core::fmt;

use log::{info, warn};
use serde::Serialize;

use crate::reading::{LastMeasurement, WeightReading};

/// Readings at or above this weight (kg) are implausible for a pet scale.
pub const MAX_PLAUSIBLE_WEIGHT_KG: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    #[default]
    Ok,
    Problem,
}

impl HealthStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Problem => "problem",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason attached to a `problem` status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Issue {
    WeightUnavailable,
    WeightLow,
    WeightHigh,
    LastTimeInvalidFormat,
    LastTimeUnavailable,
}

impl Issue {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightUnavailable => "weight_unavailable",
            Self::WeightLow => "weight_low",
            Self::WeightHigh => "weight_high",
            Self::LastTimeInvalidFormat => "last_time_invalid_format",
            Self::LastTimeUnavailable => "last_time_unavailable",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusReport {
    pub status: HealthStatus,
    pub issue: Option<Issue>,
}

impl StatusReport {
    pub const OK: Self = Self {
        status: HealthStatus::Ok,
        issue: None,
    };

    const fn problem(issue: Issue) -> Self {
        Self {
            status: HealthStatus::Problem,
            issue: Some(issue),
        }
    }
}

fn weight_issue(weight: WeightReading) -> Option<Issue> {
    match weight {
        WeightReading::Unavailable => Some(Issue::WeightUnavailable),
        WeightReading::Kg(kg) if kg <= 0.0 => Some(Issue::WeightLow),
        WeightReading::Kg(kg) if kg >= MAX_PLAUSIBLE_WEIGHT_KG => Some(Issue::WeightHigh),
        WeightReading::Kg(_) => None,
    }
}

fn last_time_issue(last: &LastMeasurement) -> Option<Issue> {
    match last {
        LastMeasurement::At(_) => None,
        LastMeasurement::InvalidFormat(_) => Some(Issue::LastTimeInvalidFormat),
        LastMeasurement::Unavailable => Some(Issue::LastTimeUnavailable),
    }
}

/// Classify one set of readings.  `last` is `None` when no last-measurement
/// sensor is configured.
pub fn evaluate(weight: WeightReading, last: Option<&LastMeasurement>) -> StatusReport {
    let issue = last.and_then(last_time_issue).or_else(|| weight_issue(weight));
    issue.map_or(StatusReport::OK, StatusReport::problem)
}

/// Tracks the latest report and logs issue transitions.
#[derive(Debug, Default)]
pub struct StatusMonitor {
    current: StatusReport,
}

impl StatusMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `report` and return the previous status if it changed.
    pub fn update(&mut self, report: StatusReport) -> Option<HealthStatus> {
        let previous = self.current;
        self.current = report;

        match (previous.issue, report.issue) {
            (old, Some(issue)) if old != Some(issue) => warn!("STATUS ISSUE SET: {issue}"),
            (Some(old), None) => info!("STATUS ISSUE CLEARED: {old}"),
            _ => {}
        }
        (report.status != previous.status).then_some(previous.status)
    }

    pub fn current(&self) -> StatusReport {
        self.current
    }

    pub fn has_problem(&self) -> bool {
        self.current.status == HealthStatus::Problem
    }
}
