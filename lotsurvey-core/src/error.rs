//! Error types for traverse computation
//!
//! Every failure in this crate is a caller-correctable input problem.
//! Nothing is retried and no operation leaves a traverse half-updated.

use thiserror::Error;

/// Bearing string rejected by the parser
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BearingError {
    /// Text does not follow `<N|S> <deg>°<min>' <E|W>`
    #[error("invalid bearing format: '{0}'")]
    Malformed(String),

    #[error("degrees must be 0-90, got {0}")]
    DegreesOutOfRange(u32),

    #[error("minutes must be 0-59, got {0}")]
    MinutesOutOfRange(u32),

    /// Quadrant letters outside N/S followed by E/W
    #[error("invalid quadrant combination: {0} {1}")]
    InvalidQuadrant(char, char),
}

/// Measurement or state rejected by the traverse
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("distance must be positive, got {0}")]
    NonPositiveDistance(f64),

    #[error("polygon must have at least 3 sides, got {0}")]
    TooFewLines(usize),

    #[error("coordinates must be calculated first")]
    CoordinatesNotComputed,

    #[error("start coordinates must be finite, got ({0}, {1})")]
    NonFiniteStart(f64, f64),
}

/// Main error type for survey operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurveyError {
    #[error(transparent)]
    BearingFormat(#[from] BearingError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type alias for survey operations
pub type Result<T> = std::result::Result<T, SurveyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err: SurveyError = BearingError::DegreesOutOfRange(91).into();
        assert_eq!(err.to_string(), "degrees must be 0-90, got 91");

        let err: SurveyError = ValidationError::TooFewLines(2).into();
        assert_eq!(err.to_string(), "polygon must have at least 3 sides, got 2");
    }

    #[test]
    fn test_error_conversion_keeps_variant() {
        let err: SurveyError = ValidationError::CoordinatesNotComputed.into();
        assert!(matches!(
            err,
            SurveyError::Validation(ValidationError::CoordinatesNotComputed)
        ));
    }
}
