//! Lot Survey Core Library
//!
//! Platform-independent computation of closed land survey traverses:
//! bearing parsing, coordinates, enclosed area by two independent methods,
//! and closure analysis. This crate performs no I/O; loaders and report
//! printers live in front-end crates and only call into the types here.
//!
//! # Modules
//!
//! - **bearing**: quadrant bearing parsing and azimuth conversion
//! - **traverse**: the measured lines and the coordinates derived from them
//! - **area**: shoelace and DMD area calculators, and their cross-check
//! - **closure**: misclosure and relative precision
//! - **quality**: precision grades and closure status
//! - **units**: area unit conversion
//! - **summary**: per-method summaries and the full lot report
//! - **input**: serde records for loaders
//!
//! # Example
//!
//! ```
//! use lotsurvey_core::{AreaMethod, Traverse};
//!
//! let mut traverse = Traverse::from_lines([
//!     ("S 45°05' E", 41.10),
//!     ("S 38°41' W", 30.88),
//!     ("N 58°17' W", 17.51),
//!     ("N 48°53' W", 28.47),
//!     ("N 48°29' E", 36.60),
//! ])
//! .unwrap();
//! traverse.compute_coordinates().unwrap();
//!
//! let summary = traverse.summary(AreaMethod::Dmd).unwrap();
//! assert_eq!(summary.num_sides, 5);
//! println!("{:.2} m², closure {}", summary.area.square_meters, summary.relative_precision);
//! ```

pub mod area;
pub mod bearing;
pub mod closure;
pub mod error;
pub mod input;
pub mod quality;
pub mod summary;
pub mod traverse;
pub mod units;

pub use area::{AreaCalculator, AreaComparison, AreaMethod, DmdCalculator, ShoelaceCalculator};
pub use bearing::{to_azimuth, Bearing};
pub use closure::{AccuracyStandard, ClosureAnalysis, RelativePrecision};
pub use error::{BearingError, Result, SurveyError, ValidationError};
pub use input::{LineInput, StartPoint, TraverseInput};
pub use quality::{ClosureStatus, PrecisionGrade};
pub use summary::{SurveyReport, SurveySummary};
pub use traverse::{Course, Displacement, Point, Traverse, TraverseLine};
pub use units::AreaUnits;
