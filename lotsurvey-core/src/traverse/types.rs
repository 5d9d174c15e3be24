//! Traverse entity types

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A traverse station in the local East/North frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Easting in meters
    pub x: f64,
    /// Northing in meters
    pub y: f64,
    pub label: String,
}

impl Point {
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Point {
            x,
            y,
            label: label.into(),
        }
    }

    pub(crate) fn from_vector(v: Vector2<f64>, label: impl Into<String>) -> Self {
        Point::new(v.x, v.y, label)
    }

    pub fn as_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

/// One measured course: bearing as recorded, distance, derived azimuth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraverseLine {
    pub bearing: String,
    /// Horizontal distance in meters, always > 0
    pub distance: f64,
    /// Degrees clockwise from north
    pub azimuth: f64,
}

impl TraverseLine {
    /// Planar displacement produced by walking this line
    pub fn displacement(&self) -> Displacement {
        let azimuth_rad = self.azimuth.to_radians();
        Displacement {
            departure: self.distance * azimuth_rad.sin(),
            latitude: self.distance * azimuth_rad.cos(),
        }
    }
}

/// Change in position along one course
///
/// Azimuth 0° (north) is pure latitude, azimuth 90° (east) pure departure.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Displacement {
    /// Change in easting
    pub departure: f64,
    /// Change in northing
    pub latitude: f64,
}

impl Displacement {
    pub fn new(departure: f64, latitude: f64) -> Self {
        Displacement {
            departure,
            latitude,
        }
    }

    pub(crate) fn from_vector(v: Vector2<f64>) -> Self {
        Displacement::new(v.x, v.y)
    }

    pub fn as_vector(&self) -> Vector2<f64> {
        Vector2::new(self.departure, self.latitude)
    }

    pub fn length(&self) -> f64 {
        self.as_vector().norm()
    }
}

/// Per-course record handed to reporting and plotting code
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Label of the station the course leaves, e.g. "1"
    pub from: String,
    /// Label of the station the course arrives at; the last course returns to "1"
    pub to: String,
    pub bearing: String,
    pub distance: f64,
    pub azimuth: f64,
    pub departure: f64,
    pub latitude: f64,
}

impl Course {
    /// Line label in the usual `1-2` form
    pub fn label(&self) -> String {
        format!("{}-{}", self.from, self.to)
    }
}
