//! Built-in demonstration lots

use lotsurvey_core::{LineInput, TraverseInput};

/// Five-sided lot from the original survey plot
pub fn five_sided_lot() -> TraverseInput {
    lot(
        "Five-Sided Lot",
        &[
            ("S 45°05' E", 41.10),
            ("S 38°41' W", 30.88),
            ("N 58°17' W", 17.51),
            ("N 48°53' W", 28.47),
            ("N 48°29' E", 36.60),
        ],
    )
}

/// Eight-sided sample lot
pub fn sample_lot() -> TraverseInput {
    lot(
        "Sample Lot",
        &[
            ("S 45°05' E", 33.28),
            ("S 46°29' W", 36.6),
            ("S 48°53' E", 28.47),
            ("S 58°17' E", 17.51),
            ("S 38°41' W", 36.79),
            ("N 54°11' W", 20.0),
            ("N 46°20' W", 63.99),
            ("N 46°30' E", 71.86),
        ],
    )
}

pub fn all() -> Vec<TraverseInput> {
    vec![five_sided_lot(), sample_lot()]
}

fn lot(name: &str, lines: &[(&str, f64)]) -> TraverseInput {
    TraverseInput {
        name: Some(name.to_string()),
        lines: lines
            .iter()
            .map(|&(bearing, distance)| LineInput::new(bearing, distance))
            .collect(),
        ..Default::default()
    }
}
