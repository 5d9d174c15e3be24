//! Double Meridian Distance method
//!
//! Works on course differences (departures and latitudes) rather than
//! absolute coordinates, which makes it an independent check on the
//! shoelace result.
//!
//! ```text
//! dmd[i] = dmd[i-1] + departure[i-1] + departure[i]
//! area   = |sum(dmd[i] * latitude[i])| / 2
//! ```
//!
//! The departure sequence is circular: for the first course, `departure[i-1]`
//! is the departure of the last course and `dmd[i-1]` is zero.

use serde::Serialize;

use super::{AreaCalculator, AreaMethod};
use crate::error::Result;
use crate::traverse::{Displacement, Traverse};

/// One course of the DMD worksheet
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DmdRow {
    pub departure: f64,
    pub latitude: f64,
    pub dmd: f64,
    /// `dmd * latitude`
    pub double_area: f64,
}

/// Worked DMD computation, one row per course
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DmdTable {
    pub rows: Vec<DmdRow>,
}

impl DmdTable {
    pub fn from_courses(courses: &[Displacement]) -> Self {
        let n = courses.len();
        let mut rows = Vec::with_capacity(n);
        let mut previous_dmd = 0.0;

        for (i, course) in courses.iter().enumerate() {
            let previous_departure = courses[(i + n - 1) % n].departure;
            let dmd = previous_dmd + previous_departure + course.departure;
            rows.push(DmdRow {
                departure: course.departure,
                latitude: course.latitude,
                dmd,
                double_area: dmd * course.latitude,
            });
            previous_dmd = dmd;
        }

        DmdTable { rows }
    }

    pub fn double_area_sum(&self) -> f64 {
        self.rows.iter().map(|r| r.double_area).sum()
    }

    pub fn area(&self) -> f64 {
        self.double_area_sum().abs() / 2.0
    }
}

/// Enclosed area from a closed sequence of course displacements
pub fn dmd_area(courses: &[Displacement]) -> f64 {
    DmdTable::from_courses(courses).area()
}

/// Area from course departures and latitudes
///
/// Reads the closed-polygon courses of the traverse, so the result describes
/// the same polygon as the shoelace area.
#[derive(Debug, Clone, Copy, Default)]
pub struct DmdCalculator;

impl DmdCalculator {
    pub fn table(&self, traverse: &Traverse) -> Result<DmdTable> {
        Ok(DmdTable::from_courses(&traverse.closed_courses()?))
    }
}

impl AreaCalculator for DmdCalculator {
    fn method(&self) -> AreaMethod {
        AreaMethod::Dmd
    }

    fn calculate_area(&self, traverse: &Traverse) -> Result<f64> {
        Ok(self.table(traverse)?.area())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle() {
        // 10 north, 20 east, 10 south, 20 west
        let courses = [
            Displacement::new(0.0, 10.0),
            Displacement::new(20.0, 0.0),
            Displacement::new(0.0, -10.0),
            Displacement::new(-20.0, 0.0),
        ];
        let table = DmdTable::from_courses(&courses);
        let dmds: Vec<f64> = table.rows.iter().map(|r| r.dmd).collect();

        // first course picks up the last departure
        assert_eq!(dmds, vec![-20.0, 0.0, 20.0, 0.0]);
        assert_eq!(table.double_area_sum(), -400.0);
        assert_eq!(table.area(), 200.0);
    }

    #[test]
    fn test_starting_course_does_not_matter() {
        let courses = [
            Displacement::new(3.0, 4.0),
            Displacement::new(-7.0, 1.0),
            Displacement::new(1.0, -6.0),
            Displacement::new(3.0, 1.0),
        ];
        let expected = dmd_area(&courses);
        for shift in 1..courses.len() {
            let mut rotated = courses.to_vec();
            rotated.rotate_left(shift);
            assert!((dmd_area(&rotated) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_triangle() {
        // (0,0) -> (4,0) -> (0,3) -> (0,0)
        let courses = [
            Displacement::new(4.0, 0.0),
            Displacement::new(-4.0, 3.0),
            Displacement::new(0.0, -3.0),
        ];
        assert_eq!(dmd_area(&courses), 6.0);
    }

    #[test]
    fn test_empty() {
        assert_eq!(dmd_area(&[]), 0.0);
    }
}
