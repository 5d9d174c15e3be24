//! Quadrant letters of a surveyor's bearing
//!
//! A bearing is measured from the north or south meridian towards east or
//! west, so the first letter is always N/S and the second always E/W.

use serde::{Deserialize, Serialize};

/// Meridian the angle is measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NorthSouth {
    North,
    South,
}

impl NorthSouth {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(NorthSouth::North),
            'S' => Some(NorthSouth::South),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            NorthSouth::North => 'N',
            NorthSouth::South => 'S',
        }
    }
}

/// Direction the angle is turned towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EastWest {
    East,
    West,
}

impl EastWest {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'E' => Some(EastWest::East),
            'W' => Some(EastWest::West),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            EastWest::East => 'E',
            EastWest::West => 'W',
        }
    }
}

/// Azimuth (degrees clockwise from north) for a quadrant pair
///
/// | Quadrant | Azimuth   |
/// |----------|-----------|
/// | N, E     | d         |
/// | S, E     | 180 - d   |
/// | S, W     | 180 + d   |
/// | N, W     | 360 - d   |
///
/// The result is normalized into [0, 360), so `N 0°00' W` is 0 rather than 360.
pub fn azimuth_for(north_south: NorthSouth, decimal_angle: f64, east_west: EastWest) -> f64 {
    let azimuth = match (north_south, east_west) {
        (NorthSouth::North, EastWest::East) => decimal_angle,
        (NorthSouth::South, EastWest::East) => 180.0 - decimal_angle,
        (NorthSouth::South, EastWest::West) => 180.0 + decimal_angle,
        (NorthSouth::North, EastWest::West) => 360.0 - decimal_angle,
    };
    azimuth.rem_euclid(360.0)
}
