//! Plain-text lot reports

use std::io::{self, Write};

use lotsurvey_core::area::Winding;
use lotsurvey_core::{AreaMethod, SurveyReport, SurveySummary};

const RULE: &str = "============================================================";

/// Write a report for the selected area methods
pub fn write_report<W: Write>(
    out: &mut W,
    report: &SurveyReport,
    methods: &[AreaMethod],
) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "LOT SURVEY: {}", report.name.as_deref().unwrap_or("Unnamed lot"))?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Number of lines: {}", report.courses.len())?;
    writeln!(out, "Total perimeter: {:.2} m", report.shoelace.perimeter_m)?;
    writeln!(
        out,
        "Traversed:       {}",
        match report.winding {
            Winding::Clockwise => "clockwise",
            Winding::CounterClockwise => "counter-clockwise",
        }
    )?;

    write_courses(out, report)?;
    write_points(out, report)?;

    for method in methods {
        let summary = match method {
            AreaMethod::Shoelace => &report.shoelace,
            AreaMethod::Dmd => &report.dmd,
        };
        write_summary(out, summary)?;
    }

    if methods.len() > 1 {
        let comparison = &report.comparison;
        writeln!(out)?;
        writeln!(out, "--- Method comparison ---")?;
        writeln!(out, "Shoelace area:   {:.4} m²", comparison.shoelace)?;
        writeln!(out, "DMD area:        {:.4} m²", comparison.dmd)?;
        writeln!(
            out,
            "Difference:      {:.6} m² ({:.6}%)",
            comparison.difference, comparison.difference_percent
        )?;
        writeln!(out, "{}", comparison.agreement)?;
    }

    writeln!(out, "{}", RULE)?;
    Ok(())
}

fn write_courses<W: Write>(out: &mut W, report: &SurveyReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{:<7} {:<14} {:>10} {:>9} {:>11} {:>11}",
        "Course", "Bearing", "Distance", "Azimuth", "Departure", "Latitude"
    )?;
    for course in &report.courses {
        writeln!(
            out,
            "{:<7} {:<14} {:>10.2} {:>9.4} {:>11.4} {:>11.4}",
            course.label(),
            course.bearing,
            course.distance,
            course.azimuth,
            course.departure,
            course.latitude
        )?;
    }
    Ok(())
}

fn write_points<W: Write>(out: &mut W, report: &SurveyReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{:<7} {:>12} {:>12}", "Point", "X (m)", "Y (m)")?;
    for point in &report.points {
        writeln!(out, "{:<7} {:>12.4} {:>12.4}", point.label, point.x, point.y)?;
    }
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, summary: &SurveySummary) -> io::Result<()> {
    let area = &summary.area;
    writeln!(out)?;
    writeln!(out, "--- {} ---", summary.method)?;
    writeln!(out, "Area:            {:.2} m²", area.square_meters)?;
    writeln!(out, "                 {:.6} hectares", area.hectares)?;
    writeln!(out, "                 {:.6} acres", area.acres)?;
    writeln!(out, "                 {:.2} ft²", area.square_feet)?;
    writeln!(
        out,
        "Closure error:   {:.4} m (x {:.4}, y {:.4})",
        summary.closure_error_m, summary.closure_error_x, summary.closure_error_y
    )?;
    writeln!(out, "Precision:       {}", summary.relative_precision)?;
    writeln!(out, "Grade:           {}", summary.precision_grade)?;
    writeln!(out, "Status:          {}", summary.closure_status)?;
    writeln!(
        out,
        "Acceptable for general survey:  {}",
        yes_no(summary.acceptable_general)
    )?;
    writeln!(
        out,
        "Acceptable for property survey: {}",
        yes_no(summary.acceptable_property)
    )?;
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    fn render(methods: &[AreaMethod]) -> String {
        let report = demo::sample_lot().report().unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &report, methods).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_both_methods() {
        let text = render(&AreaMethod::ALL);
        assert!(text.contains("LOT SURVEY: Sample Lot"));
        assert!(text.contains("Number of lines: 8"));
        assert!(text.contains("Total perimeter: 308.50 m"));
        assert!(text.contains("--- Shoelace ---"));
        assert!(text.contains("--- DMD (Double Meridian Distance) ---"));
        assert!(text.contains("Area:            4091.61 m²"));
        assert!(text.contains("--- Method comparison ---"));
        assert!(text.contains("Methods produce identical results"));
        assert!(text.contains("8-1"));
    }

    #[test]
    fn test_report_single_method() {
        let text = render(&[AreaMethod::Dmd]);
        assert!(!text.contains("--- Shoelace ---"));
        assert!(text.contains("--- DMD (Double Meridian Distance) ---"));
        assert!(!text.contains("Method comparison"));
        assert!(text.contains("Acceptable for property survey: yes"));
    }
}
