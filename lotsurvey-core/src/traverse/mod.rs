//! Closed Traverse Model
//!
//! A [`Traverse`] owns the ordered bearing/distance measurements of a lot
//! boundary and the coordinates derived from them. Area calculators and the
//! closure analysis read from it; nothing else mutates it.
//!
//! Coordinates are accumulated strictly in input order. Point 1 is the start
//! position and point *k* is the start plus the displacements of lines
//! 1..k-1. The position reached after the last line is kept apart from
//! point 1 because the difference between the two is the misclosure.
//!
//! # Example
//!
//! ```
//! use lotsurvey_core::Traverse;
//!
//! let mut traverse = Traverse::new();
//! traverse.add_line("N 0°00' E", 10.0).unwrap();
//! traverse.add_line("N 90°00' E", 20.0).unwrap();
//! traverse.add_line("S 0°00' E", 10.0).unwrap();
//! traverse.add_line("S 90°00' W", 20.0).unwrap();
//!
//! let points = traverse.compute_coordinates().unwrap();
//! assert_eq!(points.len(), 4);
//! assert_eq!(points[1].label, "2");
//! ```

mod types;

pub use types::{Course, Displacement, Point, TraverseLine};

use nalgebra::Vector2;

use crate::bearing::to_azimuth;
use crate::closure::ClosureAnalysis;
use crate::error::{Result, ValidationError};

/// Fewest lines that enclose an area
pub const MIN_LINES: usize = 3;

/// Coordinates derived from the current line list
#[derive(Debug, Clone)]
struct Geometry {
    points: Vec<Point>,
    displacements: Vec<Displacement>,
    final_position: Vector2<f64>,
}

/// Ordered traverse measurements and their derived coordinates
#[derive(Debug, Clone, Default)]
pub struct Traverse {
    lines: Vec<TraverseLine>,
    geometry: Option<Geometry>,
}

impl Traverse {
    pub fn new() -> Self {
        Traverse::default()
    }

    /// Build a traverse from `(bearing, distance)` pairs
    ///
    /// Stops at the first rejected measurement.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut traverse = Traverse::new();
        for (bearing, distance) in lines {
            traverse.add_line(bearing.as_ref(), distance)?;
        }
        Ok(traverse)
    }

    /// Append a measured line
    ///
    /// The distance must be a positive, finite number of meters. On error the
    /// line list is left unchanged. Coordinates computed before this call no
    /// longer describe the traverse and are discarded.
    pub fn add_line(&mut self, bearing: &str, distance: f64) -> Result<()> {
        if !(distance.is_finite() && distance > 0.0) {
            return Err(ValidationError::NonPositiveDistance(distance).into());
        }
        let azimuth = to_azimuth(bearing)?;

        log::trace!(
            "line {}: {} {:.3} m -> azimuth {:.4}",
            self.lines.len() + 1,
            bearing,
            distance,
            azimuth
        );

        self.lines.push(TraverseLine {
            bearing: bearing.to_string(),
            distance,
            azimuth,
        });
        self.geometry = None;
        Ok(())
    }

    pub fn lines(&self) -> &[TraverseLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all measured distances
    pub fn perimeter(&self) -> f64 {
        self.lines.iter().map(|l| l.distance).sum()
    }

    /// Compute coordinates starting from the origin
    pub fn compute_coordinates(&mut self) -> Result<&[Point]> {
        self.compute_coordinates_from(0.0, 0.0)
    }

    /// Compute coordinates starting from `(start_x, start_y)`
    ///
    /// Fails if fewer than [`MIN_LINES`] lines were added or the start is not
    /// a finite coordinate, in which case any earlier result stays in place.
    pub fn compute_coordinates_from(&mut self, start_x: f64, start_y: f64) -> Result<&[Point]> {
        let n = self.lines.len();
        if n < MIN_LINES {
            return Err(ValidationError::TooFewLines(n).into());
        }
        if !(start_x.is_finite() && start_y.is_finite()) {
            return Err(ValidationError::NonFiniteStart(start_x, start_y).into());
        }

        let mut points = Vec::with_capacity(n);
        let mut displacements = Vec::with_capacity(n);
        let mut position = Vector2::new(start_x, start_y);

        points.push(Point::from_vector(position, "1"));
        for (i, line) in self.lines.iter().enumerate() {
            let displacement = line.displacement();
            position += displacement.as_vector();
            displacements.push(displacement);

            if i + 1 < n {
                points.push(Point::from_vector(position, (i + 2).to_string()));
            }
        }

        log::debug!(
            "computed {} points, final position ({:.4}, {:.4})",
            points.len(),
            position.x,
            position.y
        );

        let geometry = self.geometry.insert(Geometry {
            points,
            displacements,
            final_position: position,
        });
        Ok(&geometry.points)
    }

    pub fn has_coordinates(&self) -> bool {
        self.geometry.is_some()
    }

    fn geometry(&self) -> Result<&Geometry> {
        self.geometry
            .as_ref()
            .ok_or_else(|| ValidationError::CoordinatesNotComputed.into())
    }

    /// Stations 1..n, one per line
    pub fn points(&self) -> Result<&[Point]> {
        Ok(&self.geometry()?.points)
    }

    /// Measured displacement of every line, in traverse order
    pub fn displacements(&self) -> Result<&[Displacement]> {
        Ok(&self.geometry()?.displacements)
    }

    /// Arithmetic position reached after the last line
    pub fn final_position(&self) -> Result<(f64, f64)> {
        let end = self.geometry()?.final_position;
        Ok((end.x, end.y))
    }

    /// Courses of the closed polygon through the computed points
    ///
    /// Lines 1..n-1 keep their measured displacement. The last course runs
    /// from point n back to point 1, which differs from the measured last
    /// line by exactly the misclosure.
    pub fn closed_courses(&self) -> Result<Vec<Displacement>> {
        let geometry = self.geometry()?;
        let n = geometry.displacements.len();

        let mut courses = geometry.displacements[..n - 1].to_vec();
        let first = geometry.points[0].as_vector();
        let last = geometry.points[n - 1].as_vector();
        courses.push(Displacement::from_vector(first - last));
        Ok(courses)
    }

    /// Per-course bearing, azimuth and measured displacement
    pub fn courses(&self) -> Result<Vec<Course>> {
        let geometry = self.geometry()?;
        let n = geometry.points.len();

        Ok(self
            .lines
            .iter()
            .zip(&geometry.displacements)
            .enumerate()
            .map(|(i, (line, d))| Course {
                from: geometry.points[i].label.clone(),
                to: geometry.points[(i + 1) % n].label.clone(),
                bearing: line.bearing.clone(),
                distance: line.distance,
                azimuth: line.azimuth,
                departure: d.departure,
                latitude: d.latitude,
            })
            .collect())
    }

    /// Compare the arithmetic end position with the start point
    pub fn analyze_closure(&self) -> Result<ClosureAnalysis> {
        let geometry = self.geometry()?;
        Ok(ClosureAnalysis::new(
            geometry.points[0].as_vector(),
            geometry.final_position,
            self.perimeter(),
        ))
    }
}
