//! Bearing Conversion
//!
//! Parses quadrant bearings as written in field books and deed
//! descriptions (`S 45°05' E`) and converts them to azimuths measured
//! clockwise from north.
//!
//! # Example
//!
//! ```
//! use lotsurvey_core::bearing::{to_azimuth, Bearing};
//!
//! assert_eq!(to_azimuth("N 90°00' W").unwrap(), 270.0);
//!
//! let bearing: Bearing = "S 45°30' E".parse().unwrap();
//! assert_eq!(bearing.azimuth(), 134.5);
//! assert_eq!(bearing.to_string(), "S 45°30' E");
//! ```

mod quadrant;

pub use quadrant::{azimuth_for, EastWest, NorthSouth};

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::error::BearingError;

/// Largest angle off the meridian
pub const MAX_DEGREES: u32 = 90;

/// Largest minutes value
pub const MAX_MINUTES: u32 = 59;

static BEARING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([NS])\s+(\d{1,2})°(\d{1,2})'\s+([EW])$").expect("valid regex"));

/// A parsed quadrant bearing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bearing {
    pub north_south: NorthSouth,
    pub degrees: u32,
    pub minutes: u32,
    pub east_west: EastWest,
}

impl Bearing {
    /// Build a bearing, enforcing the degree and minute ranges
    pub fn new(
        north_south: NorthSouth,
        degrees: u32,
        minutes: u32,
        east_west: EastWest,
    ) -> Result<Self, BearingError> {
        if degrees > MAX_DEGREES {
            return Err(BearingError::DegreesOutOfRange(degrees));
        }
        if minutes > MAX_MINUTES {
            return Err(BearingError::MinutesOutOfRange(minutes));
        }
        Ok(Bearing {
            north_south,
            degrees,
            minutes,
            east_west,
        })
    }

    /// Parse `<N|S> <deg>°<min>' <E|W>`
    ///
    /// Surrounding whitespace is ignored; everything else must match exactly.
    pub fn parse(text: &str) -> Result<Self, BearingError> {
        let malformed = || BearingError::Malformed(text.to_string());

        let caps = BEARING_PATTERN.captures(text.trim()).ok_or_else(malformed)?;

        let first = caps[1].chars().next().ok_or_else(malformed)?;
        let degrees: u32 = caps[2].parse().map_err(|_| malformed())?;
        let minutes: u32 = caps[3].parse().map_err(|_| malformed())?;
        let second = caps[4].chars().next().ok_or_else(malformed)?;

        let north_south = NorthSouth::from_char(first)
            .ok_or(BearingError::InvalidQuadrant(first, second))?;
        let east_west =
            EastWest::from_char(second).ok_or(BearingError::InvalidQuadrant(first, second))?;

        Bearing::new(north_south, degrees, minutes, east_west)
    }

    /// Angle off the meridian in decimal degrees
    pub fn decimal_angle(&self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0
    }

    /// Azimuth in degrees clockwise from north, in [0, 360)
    pub fn azimuth(&self) -> f64 {
        azimuth_for(self.north_south, self.decimal_angle(), self.east_west)
    }
}

impl FromStr for Bearing {
    type Err = BearingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bearing::parse(s)
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}°{:02}' {}",
            self.north_south.as_char(),
            self.degrees,
            self.minutes,
            self.east_west.as_char()
        )
    }
}

/// Convert a bearing string to an azimuth in degrees
pub fn to_azimuth(bearing: &str) -> Result<f64, BearingError> {
    Bearing::parse(bearing).map(|b| b.azimuth())
}
