//! Traverse Closure Analysis
//!
//! A traverse that starts and ends on the same station should return to its
//! start point. Measurement error leaves a gap between the computed end
//! position and the start; this module measures it.
//!
//! Relative precision is the perimeter divided by the length of that gap,
//! usually quoted as `1:N`. A gap of exactly zero gives
//! [`RelativePrecision::Infinite`], which satisfies every standard.

mod standard;

pub use standard::AccuracyStandard;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Perimeter over linear misclosure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativePrecision {
    Ratio(f64),
    /// Linear error was exactly zero
    Infinite,
}

impl RelativePrecision {
    /// `Infinite` only for a linear error of exactly zero
    ///
    /// A NaN error yields a NaN ratio, which reaches no threshold.
    pub fn from_errors(perimeter: f64, linear_error: f64) -> Self {
        if linear_error == 0.0 {
            RelativePrecision::Infinite
        } else {
            RelativePrecision::Ratio(perimeter / linear_error)
        }
    }

    /// Ratio as a float, `f64::INFINITY` for a perfect closure
    pub fn value(self) -> f64 {
        match self {
            RelativePrecision::Ratio(ratio) => ratio,
            RelativePrecision::Infinite => f64::INFINITY,
        }
    }

    pub fn is_infinite(self) -> bool {
        matches!(self, RelativePrecision::Infinite)
    }

    /// Whether the precision reaches `threshold` (inclusive)
    pub fn at_least(self, threshold: f64) -> bool {
        match self {
            RelativePrecision::Ratio(ratio) => ratio >= threshold,
            RelativePrecision::Infinite => true,
        }
    }
}

impl fmt::Display for RelativePrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativePrecision::Ratio(ratio) => write!(f, "1:{:.0}", ratio),
            RelativePrecision::Infinite => write!(f, "1:∞"),
        }
    }
}

/// Misclosure of a computed traverse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosureAnalysis {
    /// End easting minus start easting
    pub closure_error_x: f64,
    /// End northing minus start northing
    pub closure_error_y: f64,
    /// Length of the misclosure vector
    pub linear_error: f64,
    /// Sum of measured distances
    pub perimeter: f64,
    pub relative_precision: RelativePrecision,
}

impl ClosureAnalysis {
    /// Analyze the gap between `start` and the arithmetic `end` of a traverse
    pub fn new(start: Vector2<f64>, end: Vector2<f64>, perimeter: f64) -> Self {
        let error = end - start;
        let linear_error = error.norm();

        ClosureAnalysis {
            closure_error_x: error.x,
            closure_error_y: error.y,
            linear_error,
            perimeter,
            relative_precision: RelativePrecision::from_errors(perimeter, linear_error),
        }
    }

    /// Check against a standard by name
    ///
    /// Recognized names are `engineering`, `property`, `general` and `rough`;
    /// anything else is judged against `general`.
    pub fn is_acceptable(&self, standard: &str) -> bool {
        self.meets(AccuracyStandard::from_name(standard))
    }

    pub fn meets(&self, standard: AccuracyStandard) -> bool {
        self.relative_precision
            .at_least(standard.min_relative_precision())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(error_x: f64, error_y: f64, perimeter: f64) -> ClosureAnalysis {
        ClosureAnalysis::new(
            Vector2::new(100.0, 200.0),
            Vector2::new(100.0 + error_x, 200.0 + error_y),
            perimeter,
        )
    }

    #[test]
    fn test_linear_error() {
        let closure = analysis(0.3, -0.4, 1000.0);
        assert!((closure.closure_error_x - 0.3).abs() < 1e-9);
        assert!((closure.closure_error_y + 0.4).abs() < 1e-9);
        assert!((closure.linear_error - 0.5).abs() < 1e-9);
        assert!((closure.relative_precision.value() - 2000.0).abs() < 1e-6);
    }

    #[test]
    fn test_perfect_closure_is_infinite() {
        let closure = analysis(0.0, 0.0, 154.56);
        assert_eq!(closure.linear_error, 0.0);
        assert_eq!(closure.relative_precision, RelativePrecision::Infinite);
        assert!(closure.relative_precision.value().is_infinite());
        for standard in AccuracyStandard::ALL {
            assert!(closure.meets(standard));
            assert!(closure.is_acceptable(standard.name()));
        }
        assert!(closure.is_acceptable("bogus_standard"));
    }

    #[test]
    fn test_nan_error_is_not_perfect() {
        let precision = RelativePrecision::from_errors(154.56, f64::NAN);
        assert!(!precision.is_infinite());
        assert!(precision.value().is_nan());
        assert!(!precision.at_least(500.0));

        let closure = analysis(f64::NAN, 0.0, 154.56);
        assert!(!closure.relative_precision.is_infinite());
        for standard in AccuracyStandard::ALL {
            assert!(!closure.meets(standard));
        }
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        // 1000 m perimeter, 0.2 m error -> exactly 1:5000
        let closure = ClosureAnalysis {
            closure_error_x: 0.2,
            closure_error_y: 0.0,
            linear_error: 0.2,
            perimeter: 1000.0,
            relative_precision: RelativePrecision::Ratio(5000.0),
        };
        assert!(closure.is_acceptable("engineering"));

        let closure = ClosureAnalysis {
            relative_precision: RelativePrecision::Ratio(4999.9),
            ..closure
        };
        assert!(!closure.is_acceptable("engineering"));
        assert!(closure.is_acceptable("property"));
    }

    #[test]
    fn test_unknown_standard_uses_general() {
        for ratio in [400.0, 999.0, 1000.0, 2500.0] {
            let closure = ClosureAnalysis {
                closure_error_x: 0.0,
                closure_error_y: 0.0,
                linear_error: 1.0,
                perimeter: ratio,
                relative_precision: RelativePrecision::Ratio(ratio),
            };
            assert_eq!(
                closure.is_acceptable("bogus_standard"),
                closure.is_acceptable("general")
            );
        }
    }

    #[test]
    fn test_relative_precision_display() {
        assert_eq!(RelativePrecision::Ratio(35081.56).to_string(), "1:35082");
        assert_eq!(RelativePrecision::Infinite.to_string(), "1:∞");
    }

    #[test]
    fn test_relative_precision_serde() {
        assert_eq!(
            serde_json::to_string(&RelativePrecision::Infinite).unwrap(),
            "\"infinite\""
        );
        assert_eq!(
            serde_json::to_string(&RelativePrecision::Ratio(1500.0)).unwrap(),
            "{\"ratio\":1500.0}"
        );
    }
}
