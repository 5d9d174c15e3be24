//! Traverse input records
//!
//! The shape in which field measurements arrive from a loader:
//!
//! ```json
//! {
//!   "name": "Sample Lot",
//!   "start": { "x": 0.0, "y": 0.0 },
//!   "lines": [
//!     { "bearing": "S 45°05' E", "distance": 41.10 },
//!     { "bearing": "S 38°41' W", "distance": 30.88 }
//!   ]
//! }
//! ```
//!
//! `name` and `start` are optional; the start defaults to the origin.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::summary::SurveyReport;
use crate::traverse::Traverse;

/// One bearing/distance measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineInput {
    pub bearing: String,
    pub distance: f64,
}

impl LineInput {
    pub fn new(bearing: impl Into<String>, distance: f64) -> Self {
        LineInput {
            bearing: bearing.into(),
            distance,
        }
    }
}

/// Coordinates of point 1
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StartPoint {
    pub x: f64,
    pub y: f64,
}

/// A lot as delivered by a loader
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TraverseInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub start: StartPoint,
    pub lines: Vec<LineInput>,
}

impl TraverseInput {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Add every line and compute coordinates from the start point
    pub fn to_traverse(&self) -> Result<Traverse> {
        let mut traverse = Traverse::new();
        for line in &self.lines {
            traverse.add_line(&line.bearing, line.distance)?;
        }
        traverse.compute_coordinates_from(self.start.x, self.start.y)?;
        Ok(traverse)
    }

    pub fn report(&self) -> Result<SurveyReport> {
        SurveyReport::build(self.name.as_deref(), &self.to_traverse()?)
    }
}
