use std::fs;
use std::path::PathBuf;

use approx::assert_relative_eq;
use tempfile::TempDir;

use lotsurvey_cli::{run, Commands, MethodArg};

const SAMPLE_LOT_CSV: &str = "\
# Sample lot, field book 12
bearing,distance
S 45°05' E,33.28
S 46°29' W,36.6
S 48°53' E,28.47
S 58°17' E,17.51
S 38°41' W,36.79
N 54°11' W,20.0
N 46°20' W,63.99
N 46°30' E,71.86
";

const RECTANGLE_JSON: &str = r#"{
  "name": "Rectangle",
  "start": { "x": 100.0, "y": 200.0 },
  "lines": [
    { "bearing": "N 0°00' E", "distance": 10 },
    { "bearing": "N 90°00' E", "distance": 20 },
    { "bearing": "S 0°00' E", "distance": 10 },
    { "bearing": "S 90°00' W", "distance": 20 }
  ]
}"#;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn compute(file: PathBuf, method: MethodArg, json: bool) -> anyhow::Result<String> {
    let command = Commands::Compute {
        file,
        method,
        json,
        start_x: None,
        start_y: None,
    };
    let mut out = Vec::new();
    run(&command, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_compute_csv_text_report() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "sample_lot.csv", SAMPLE_LOT_CSV);

    let text = compute(path, MethodArg::Both, false).unwrap();
    assert!(text.contains("LOT SURVEY: sample_lot"));
    assert!(text.contains("Number of lines: 8"));
    assert!(text.contains("Area:            4091.61 m²"));
    assert!(text.contains("Precision:       1:35082"));
    assert!(text.contains("Methods produce identical results"));
}

#[test]
fn test_compute_json_report() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "rectangle.json", RECTANGLE_JSON);

    let output = compute(path, MethodArg::Both, true).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["name"], "Rectangle");
    assert_eq!(json["points"][0]["x"], 100.0);
    assert_eq!(json["points"][1]["y"], 210.0);
    assert_relative_eq!(
        json["shoelace"]["area"]["squareMeters"].as_f64().unwrap(),
        200.0,
        epsilon = 1e-9
    );
    assert_eq!(json["comparison"]["agreement"], "identical");
}

#[test]
fn test_compute_single_method_json() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "rectangle.json", RECTANGLE_JSON);

    let output = compute(path, MethodArg::Dmd, true).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["method"], "dmd");
    assert_eq!(json["numSides"], 4);
    assert_eq!(json["closureStatus"], "excellent");
}

#[test]
fn test_start_override() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "rectangle.json", RECTANGLE_JSON);

    let command = Commands::Compute {
        file: path,
        method: MethodArg::Both,
        json: true,
        start_x: Some(-50.0),
        start_y: None,
    };
    let mut out = Vec::new();
    run(&command, &mut out).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(json["points"][0]["x"], -50.0);
    assert_eq!(json["points"][0]["y"], 200.0);
}

#[test]
fn test_bad_bearing_in_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "bad.csv",
        "N 0°00' E,10\nN 91°00' E,20\nS 0°00' E,10\n",
    );

    let err = compute(path, MethodArg::Both, false).unwrap_err();
    assert!(err.to_string().starts_with("unable to compute"));
    assert_eq!(
        err.root_cause().to_string(),
        "degrees must be 0-90, got 91"
    );
}

#[test]
fn test_non_finite_start_override() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "rectangle.json", RECTANGLE_JSON);

    let command = Commands::Compute {
        file: path,
        method: MethodArg::Both,
        json: true,
        start_x: Some(f64::NAN),
        start_y: None,
    };
    let mut out = Vec::new();
    let err = run(&command, &mut out).unwrap_err();

    assert!(err.to_string().starts_with("unable to compute"));
    assert!(err
        .root_cause()
        .to_string()
        .starts_with("start coordinates must be finite"));
    assert!(out.is_empty());
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = compute(dir.path().join("nope.json"), MethodArg::Both, false).unwrap_err();
    assert!(err.to_string().starts_with("unable to read"));
}

#[test]
fn test_demo_json() {
    let mut out = Vec::new();
    run(&Commands::Demo { json: true }, &mut out).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

    let reports = json.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["name"], "Five-Sided Lot");
    assert_eq!(reports[0]["shoelace"]["precisionGrade"], "unacceptable");
    assert_eq!(reports[1]["dmd"]["precisionGrade"], "engineering");
}
