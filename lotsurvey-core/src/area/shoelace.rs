//! Shoelace (surveyor's) formula over traverse coordinates

use serde::Serialize;

use super::{AreaCalculator, AreaMethod, Winding};
use crate::error::Result;
use crate::traverse::{Point, Traverse};

/// Cross products for one vertex and its successor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoelaceTerm {
    pub label: String,
    /// `x_i * y_{i+1}`
    pub forward: f64,
    /// `x_{i+1} * y_i`
    pub backward: f64,
}

/// Worked shoelace computation, one row per vertex
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShoelaceTable {
    pub terms: Vec<ShoelaceTerm>,
}

impl ShoelaceTable {
    /// Build the table over `points`, the last vertex pairing with the first
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let terms = (0..n)
            .map(|i| {
                let p = &points[i];
                let q = &points[(i + 1) % n];
                ShoelaceTerm {
                    label: p.label.clone(),
                    forward: p.x * q.y,
                    backward: q.x * p.y,
                }
            })
            .collect();
        ShoelaceTable { terms }
    }

    pub fn forward_sum(&self) -> f64 {
        self.terms.iter().map(|t| t.forward).sum()
    }

    pub fn backward_sum(&self) -> f64 {
        self.terms.iter().map(|t| t.backward).sum()
    }

    /// Twice the signed area; positive when the vertices run counter-clockwise
    pub fn signed_double_area(&self) -> f64 {
        self.terms.iter().map(|t| t.forward - t.backward).sum()
    }

    pub fn area(&self) -> f64 {
        self.signed_double_area().abs() / 2.0
    }

    pub fn winding(&self) -> Winding {
        Winding::from_signed_area(self.signed_double_area())
    }
}

/// Enclosed area of the polygon through `points`
///
/// Treats the point list as closed: the last point connects back to the
/// first regardless of where the measured traverse actually ended.
pub fn shoelace_area(points: &[Point]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y;
        sum -= points[j].x * points[i].y;
    }
    sum.abs() / 2.0
}

/// Area from absolute coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct ShoelaceCalculator;

impl ShoelaceCalculator {
    pub fn table(&self, traverse: &Traverse) -> Result<ShoelaceTable> {
        Ok(ShoelaceTable::from_points(traverse.points()?))
    }
}

impl AreaCalculator for ShoelaceCalculator {
    fn method(&self) -> AreaMethod {
        AreaMethod::Shoelace
    }

    fn calculate_area(&self, traverse: &Traverse) -> Result<f64> {
        Ok(shoelace_area(traverse.points()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(side: f64) -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0, "1"),
            Point::new(side, 0.0, "2"),
            Point::new(side, side, "3"),
            Point::new(0.0, side, "4"),
        ]
    }

    #[test]
    fn test_square_area() {
        assert_eq!(shoelace_area(&square(5.0)), 25.0);
    }

    #[test]
    fn test_winding_does_not_change_area() {
        let mut points = square(5.0);
        let ccw = ShoelaceTable::from_points(&points);
        points.reverse();
        let cw = ShoelaceTable::from_points(&points);

        assert_eq!(ccw.winding(), Winding::CounterClockwise);
        assert_eq!(cw.winding(), Winding::Clockwise);
        assert_eq!(ccw.area(), cw.area());
        assert_eq!(ccw.signed_double_area(), -cw.signed_double_area());
    }

    #[test]
    fn test_translation_invariant() {
        let shifted: Vec<Point> = square(5.0)
            .into_iter()
            .map(|p| Point::new(p.x + 1000.0, p.y - 250.0, p.label))
            .collect();
        assert!((shoelace_area(&shifted) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_table_matches_area() {
        let points = vec![
            Point::new(0.0, 0.0, "1"),
            Point::new(4.0, 0.0, "2"),
            Point::new(0.0, 3.0, "3"),
        ];
        let table = ShoelaceTable::from_points(&points);
        assert_eq!(table.terms.len(), 3);
        assert_eq!(table.terms[1].label, "2");
        assert_eq!(table.terms[1].forward, 12.0);
        assert_eq!(table.forward_sum() - table.backward_sum(), 12.0);
        assert_eq!(table.area(), 6.0);
        assert_eq!(table.area(), shoelace_area(&points));
    }

    #[test]
    fn test_calculator_requires_coordinates() {
        let traverse = Traverse::from_lines([
            ("N 0°00' E", 10.0),
            ("S 45°00' E", 10.0),
            ("S 45°00' W", 10.0),
        ])
        .unwrap();
        assert!(ShoelaceCalculator.calculate_area(&traverse).is_err());
    }
}
