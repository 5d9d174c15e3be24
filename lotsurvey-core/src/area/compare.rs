//! Cross-check of the shoelace and DMD areas

use serde::Serialize;
use std::fmt;

use super::{AreaCalculator, DmdCalculator, ShoelaceCalculator};
use crate::error::Result;
use crate::traverse::Traverse;

/// How closely the two methods agree, by absolute difference in m²
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Agreement {
    /// Under 0.01 m²
    Identical,
    /// Under 0.1 m²
    NearlyIdentical,
    /// Under 1 m²
    Similar,
    Significant,
}

impl Agreement {
    pub fn from_difference(difference: f64) -> Self {
        if difference < 0.01 {
            Agreement::Identical
        } else if difference < 0.1 {
            Agreement::NearlyIdentical
        } else if difference < 1.0 {
            Agreement::Similar
        } else {
            Agreement::Significant
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Agreement::Identical => "Methods produce identical results",
            Agreement::NearlyIdentical => {
                "Methods produce nearly identical results (excellent verification)"
            }
            Agreement::Similar => "Methods produce similar results (acceptable verification)",
            Agreement::Significant => "Significant difference - review calculations",
        }
    }
}

impl fmt::Display for Agreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Shoelace and DMD areas side by side
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaComparison {
    pub shoelace: f64,
    pub dmd: f64,
    /// Absolute difference in m²
    pub difference: f64,
    /// Difference relative to the shoelace area, 0 when that area is 0
    pub difference_percent: f64,
    pub agreement: Agreement,
}

impl AreaComparison {
    pub fn new(shoelace: f64, dmd: f64) -> Self {
        let difference = (shoelace - dmd).abs();
        let difference_percent = if shoelace > 0.0 {
            difference / shoelace * 100.0
        } else {
            0.0
        };
        AreaComparison {
            shoelace,
            dmd,
            difference,
            difference_percent,
            agreement: Agreement::from_difference(difference),
        }
    }

    /// Run both calculators over a computed traverse
    pub fn from_traverse(traverse: &Traverse) -> Result<Self> {
        let shoelace = ShoelaceCalculator.calculate_area(traverse)?;
        let dmd = DmdCalculator.calculate_area(traverse)?;

        let comparison = AreaComparison::new(shoelace, dmd);
        log::debug!(
            "area check: shoelace {:.4} m², dmd {:.4} m², diff {:.6} m²",
            shoelace,
            dmd,
            comparison.difference
        );
        Ok(comparison)
    }

    /// True unless the difference calls for a review
    pub fn is_verified(&self) -> bool {
        self.agreement != Agreement::Significant
    }
}
