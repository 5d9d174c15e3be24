//! Survey Summary and Report
//!
//! Read-only aggregations built fresh from a traverse each time they are
//! requested. [`SurveySummary`] is the per-method result; [`SurveyReport`]
//! bundles both methods with the geometry a plotting or printing front end
//! needs, so nothing has to be re-derived downstream.

use serde::Serialize;

use crate::area::{AreaCalculator, AreaComparison, AreaMethod, ShoelaceCalculator, Winding};
use crate::closure::{AccuracyStandard, RelativePrecision};
use crate::error::Result;
use crate::quality::{ClosureStatus, PrecisionGrade};
use crate::traverse::{Course, Point, Traverse};
use crate::units::AreaUnits;

/// Area, closure and quality of a traverse for one area method
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySummary {
    pub method: AreaMethod,
    pub area: AreaUnits,
    pub perimeter_m: f64,
    pub num_sides: usize,
    /// Linear misclosure in meters
    pub closure_error_m: f64,
    pub closure_error_x: f64,
    pub closure_error_y: f64,
    pub relative_precision: RelativePrecision,
    pub precision_grade: PrecisionGrade,
    pub closure_status: ClosureStatus,
    pub acceptable_general: bool,
    pub acceptable_property: bool,
}

impl SurveySummary {
    pub fn build(traverse: &Traverse, calculator: &dyn AreaCalculator) -> Result<Self> {
        let area = calculator.calculate_area(traverse)?;
        let closure = traverse.analyze_closure()?;

        Ok(SurveySummary {
            method: calculator.method(),
            area: AreaUnits::from_square_meters(area),
            perimeter_m: closure.perimeter,
            num_sides: traverse.len(),
            closure_error_m: closure.linear_error,
            closure_error_x: closure.closure_error_x,
            closure_error_y: closure.closure_error_y,
            relative_precision: closure.relative_precision,
            precision_grade: PrecisionGrade::from_relative_precision(closure.relative_precision),
            closure_status: ClosureStatus::from_linear_error(closure.linear_error),
            acceptable_general: closure.meets(AccuracyStandard::General),
            acceptable_property: closure.meets(AccuracyStandard::Property),
        })
    }
}

impl Traverse {
    /// Summary using the given area method
    pub fn summary(&self, method: AreaMethod) -> Result<SurveySummary> {
        SurveySummary::build(self, method.calculator())
    }
}

/// Everything a report or plot needs about one lot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub points: Vec<Point>,
    pub courses: Vec<Course>,
    pub winding: Winding,
    pub shoelace: SurveySummary,
    pub dmd: SurveySummary,
    pub comparison: AreaComparison,
}

impl SurveyReport {
    pub fn build(name: Option<&str>, traverse: &Traverse) -> Result<Self> {
        let shoelace = traverse.summary(AreaMethod::Shoelace)?;
        let dmd = traverse.summary(AreaMethod::Dmd)?;
        let comparison =
            AreaComparison::new(shoelace.area.square_meters, dmd.area.square_meters);

        log::debug!(
            "report {}: {} sides, {:.2} m², closure {}",
            name.unwrap_or("<unnamed>"),
            shoelace.num_sides,
            shoelace.area.square_meters,
            shoelace.relative_precision
        );

        Ok(SurveyReport {
            name: name.map(str::to_string),
            points: traverse.points()?.to_vec(),
            courses: traverse.courses()?,
            winding: ShoelaceCalculator.table(traverse)?.winding(),
            shoelace,
            dmd,
            comparison,
        })
    }
}
