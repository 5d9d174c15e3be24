//! Command line definition and dispatch

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::io::Write;
use std::path::PathBuf;

use lotsurvey_core::{to_azimuth, AreaMethod, StartPoint, SurveyReport, TraverseInput};

use crate::{demo, load, render};

#[derive(Parser, Debug)]
#[command(name = "lotsurvey")]
#[command(author, version, about = "Closed traverse area and closure computation", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute coordinates, area and closure for a lot file
    Compute {
        /// Traverse file, JSON or CSV (bearing,distance)
        file: PathBuf,
        /// Area method to report
        #[arg(short, long, value_enum, default_value_t = MethodArg::Both)]
        method: MethodArg,
        /// Print JSON instead of a text report
        #[arg(long)]
        json: bool,
        /// Easting of point 1, overrides the file
        #[arg(long, allow_hyphen_values = true)]
        start_x: Option<f64>,
        /// Northing of point 1, overrides the file
        #[arg(long, allow_hyphen_values = true)]
        start_y: Option<f64>,
    },
    /// Convert quadrant bearings to azimuths
    Azimuth {
        /// Bearings such as "S 45°05' E"
        #[arg(required = true)]
        bearings: Vec<String>,
    },
    /// Run the built-in sample lots
    Demo {
        /// Print JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Shoelace,
    Dmd,
    Both,
}

impl MethodArg {
    pub fn methods(self) -> Vec<AreaMethod> {
        match self {
            MethodArg::Shoelace => vec![AreaMethod::Shoelace],
            MethodArg::Dmd => vec![AreaMethod::Dmd],
            MethodArg::Both => AreaMethod::ALL.to_vec(),
        }
    }
}

/// Execute a command, writing its output to `out`
pub fn run<W: Write>(command: &Commands, out: &mut W) -> Result<()> {
    match command {
        Commands::Compute {
            file,
            method,
            json,
            start_x,
            start_y,
        } => {
            let mut input = load::load_traverse(file)?;
            if start_x.is_some() || start_y.is_some() {
                input.start = StartPoint {
                    x: start_x.unwrap_or(input.start.x),
                    y: start_y.unwrap_or(input.start.y),
                };
            }
            let report = build_report(&input)
                .with_context(|| format!("unable to compute {}", file.display()))?;

            if *json {
                write_json(out, &report, *method)?;
            } else {
                render::write_report(out, &report, &method.methods())?;
            }
        }
        Commands::Azimuth { bearings } => {
            for bearing in bearings {
                let azimuth =
                    to_azimuth(bearing).with_context(|| format!("bearing '{}'", bearing))?;
                writeln!(out, "{}\t{:.4}°", bearing.trim(), azimuth)?;
            }
        }
        Commands::Demo { json } => {
            let mut reports = Vec::new();
            for input in demo::all() {
                reports.push(build_report(&input)?);
            }

            if *json {
                serde_json::to_writer_pretty(&mut *out, &reports)?;
                writeln!(out)?;
            } else {
                for report in &reports {
                    render::write_report(out, report, &AreaMethod::ALL)?;
                    writeln!(out)?;
                }
            }
        }
    }
    Ok(())
}

fn build_report(input: &TraverseInput) -> Result<SurveyReport> {
    let report = input.report()?;
    log::info!(
        "{}: {} sides, {:.2} m², closure {}",
        report.name.as_deref().unwrap_or("lot"),
        report.courses.len(),
        report.shoelace.area.square_meters,
        report.shoelace.relative_precision
    );
    Ok(report)
}

fn write_json<W: Write>(out: &mut W, report: &SurveyReport, method: MethodArg) -> Result<()> {
    match method {
        MethodArg::Shoelace => serde_json::to_writer_pretty(&mut *out, &report.shoelace)?,
        MethodArg::Dmd => serde_json::to_writer_pretty(&mut *out, &report.dmd)?,
        MethodArg::Both => serde_json::to_writer_pretty(&mut *out, report)?,
    }
    writeln!(out)?;
    Ok(())
}
