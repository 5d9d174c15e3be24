//! Traverse file loading
//!
//! Two formats are accepted:
//!
//! - JSON, deserialized straight into [`TraverseInput`]
//! - CSV with one `bearing,distance` row per line. A header row, blank lines
//!   and `#` comments are skipped; the lot takes its name from the file stem.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use lotsurvey_core::{LineInput, TraverseInput};

/// Load a traverse file, picking the format from the extension
///
/// Anything that is not `.csv` is read as JSON.
pub fn load_traverse(path: &Path) -> Result<TraverseInput> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("unable to read {}", path.display()))?;

    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let mut input = if is_csv {
        parse_csv(&text).with_context(|| format!("invalid CSV in {}", path.display()))?
    } else {
        TraverseInput::from_json(&text)
            .with_context(|| format!("invalid JSON in {}", path.display()))?
    };

    if input.name.is_none() {
        input.name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());
    }

    log::debug!(
        "loaded {} lines from {}",
        input.lines.len(),
        path.display()
    );
    Ok(input)
}

/// Parse `bearing,distance` rows
pub fn parse_csv(text: &str) -> Result<TraverseInput> {
    let mut lines = Vec::new();

    for (index, row) in text.lines().enumerate() {
        let row_number = index + 1;
        let row = row.trim();
        if row.is_empty() || row.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = row.split(',').map(|f| f.trim().trim_matches('"')).collect();
        if fields.len() != 2 {
            bail!(
                "row {}: expected 2 fields (bearing,distance), got {}",
                row_number,
                fields.len()
            );
        }

        let distance = match fields[1].parse::<f64>() {
            Ok(distance) => distance,
            Err(_) if lines.is_empty() && is_header(&fields) => {
                log::trace!("skipping header row {}", row_number);
                continue;
            }
            Err(e) => bail!("row {}: invalid distance '{}': {}", row_number, fields[1], e),
        };

        lines.push(LineInput::new(fields[0], distance));
    }

    Ok(TraverseInput {
        lines,
        ..Default::default()
    })
}

fn is_header(fields: &[&str]) -> bool {
    fields[0].eq_ignore_ascii_case("bearing")
}
