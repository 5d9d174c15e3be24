//! Area Calculation
//!
//! Two independent ways of getting the enclosed area of a traverse:
//!
//! - **shoelace**: cross products of the absolute point coordinates
//! - **dmd**: double meridian distances built from course departures and
//!   latitudes
//!
//! Both describe the same closed polygon, so for any valid traverse they
//! agree to floating point rounding. [`AreaComparison`] reports how far
//! apart they actually are.
//!
//! # Example
//!
//! ```
//! use lotsurvey_core::area::{AreaCalculator, AreaMethod};
//! use lotsurvey_core::Traverse;
//!
//! let mut traverse = Traverse::from_lines([
//!     ("N 0°00' E", 10.0),
//!     ("N 90°00' E", 20.0),
//!     ("S 0°00' E", 10.0),
//!     ("S 90°00' W", 20.0),
//! ])
//! .unwrap();
//! traverse.compute_coordinates().unwrap();
//!
//! for method in AreaMethod::ALL {
//!     let area = method.calculator().calculate_area(&traverse).unwrap();
//!     assert!((area - 200.0).abs() < 1e-9);
//! }
//! ```

mod compare;
mod dmd;
mod shoelace;

pub use compare::{Agreement, AreaComparison};
pub use dmd::{dmd_area, DmdCalculator, DmdRow, DmdTable};
pub use shoelace::{shoelace_area, ShoelaceCalculator, ShoelaceTable, ShoelaceTerm};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::traverse::Traverse;

/// Strategy for computing the enclosed area of a traverse
pub trait AreaCalculator {
    fn method(&self) -> AreaMethod;

    /// Area in square meters
    ///
    /// Fails with `CoordinatesNotComputed` until the traverse has coordinates.
    fn calculate_area(&self, traverse: &Traverse) -> Result<f64>;
}

/// Available area methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaMethod {
    Shoelace,
    Dmd,
}

impl AreaMethod {
    pub const ALL: [AreaMethod; 2] = [AreaMethod::Shoelace, AreaMethod::Dmd];

    pub fn name(self) -> &'static str {
        match self {
            AreaMethod::Shoelace => "Shoelace",
            AreaMethod::Dmd => "DMD (Double Meridian Distance)",
        }
    }

    pub fn calculator(self) -> &'static dyn AreaCalculator {
        match self {
            AreaMethod::Shoelace => &ShoelaceCalculator,
            AreaMethod::Dmd => &DmdCalculator,
        }
    }
}

impl fmt::Display for AreaMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction the vertices run in the East/North frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

impl Winding {
    /// Positive signed area is counter-clockwise
    pub fn from_signed_area(signed_area: f64) -> Self {
        if signed_area < 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }
}
