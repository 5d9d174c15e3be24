//! Quality Classification
//!
//! Maps closure results onto the descriptive grades used in survey reports.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::closure::RelativePrecision;

/// Grade of a traverse by relative precision
///
/// Each band includes its lower threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecisionGrade {
    /// 1:5000 or better
    Engineering,
    /// 1:3000 or better
    Property,
    /// 1:1000 or better
    General,
    /// 1:500 or better
    Rough,
    Unacceptable,
}

impl PrecisionGrade {
    pub fn from_relative_precision(precision: RelativePrecision) -> Self {
        if precision.at_least(5000.0) {
            PrecisionGrade::Engineering
        } else if precision.at_least(3000.0) {
            PrecisionGrade::Property
        } else if precision.at_least(1000.0) {
            PrecisionGrade::General
        } else if precision.at_least(500.0) {
            PrecisionGrade::Rough
        } else {
            PrecisionGrade::Unacceptable
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PrecisionGrade::Engineering => "Engineering Grade (Excellent)",
            PrecisionGrade::Property => "Property Survey Grade (Good)",
            PrecisionGrade::General => "General Survey Grade (Acceptable)",
            PrecisionGrade::Rough => "Rough Survey (Poor)",
            PrecisionGrade::Unacceptable => "Unacceptable Precision",
        }
    }
}

impl fmt::Display for PrecisionGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// How tightly the traverse closes, by linear error in meters
///
/// Each band excludes its upper threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosureStatus {
    /// Under 1 cm
    Excellent,
    /// Under 10 cm
    WellClosed,
    /// Under 1 m
    Closed,
    /// Under 5 m
    PoorlyClosed,
    Open,
}

impl ClosureStatus {
    pub fn from_linear_error(linear_error: f64) -> Self {
        if linear_error < 0.01 {
            ClosureStatus::Excellent
        } else if linear_error < 0.1 {
            ClosureStatus::WellClosed
        } else if linear_error < 1.0 {
            ClosureStatus::Closed
        } else if linear_error < 5.0 {
            ClosureStatus::PoorlyClosed
        } else {
            ClosureStatus::Open
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ClosureStatus::Excellent => "Closed (Excellent)",
            ClosureStatus::WellClosed => "Well Closed",
            ClosureStatus::Closed => "Closed",
            ClosureStatus::PoorlyClosed => "Poorly Closed",
            ClosureStatus::Open => "Open/Not Closed",
        }
    }
}

impl fmt::Display for ClosureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Description of a relative precision value, e.g. "Rough Survey (Poor)"
pub fn precision_description(relative_precision: f64) -> &'static str {
    let precision = if relative_precision.is_infinite() {
        RelativePrecision::Infinite
    } else {
        RelativePrecision::Ratio(relative_precision)
    };
    PrecisionGrade::from_relative_precision(precision).description()
}

/// Description of a linear closure error, e.g. "Well Closed"
pub fn closure_status(linear_error: f64) -> &'static str {
    ClosureStatus::from_linear_error(linear_error).description()
}
