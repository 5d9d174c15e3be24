//! Named accuracy standards for traverse closure

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum relative precision required by a class of survey
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyStandard {
    /// 1:5000
    Engineering,
    /// 1:3000
    Property,
    /// 1:1000
    #[default]
    General,
    /// 1:500
    Rough,
}

impl AccuracyStandard {
    pub const ALL: [AccuracyStandard; 4] = [
        AccuracyStandard::Engineering,
        AccuracyStandard::Property,
        AccuracyStandard::General,
        AccuracyStandard::Rough,
    ];

    /// Look up a standard by name
    ///
    /// Unknown names fall back to [`AccuracyStandard::General`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "engineering" => AccuracyStandard::Engineering,
            "property" => AccuracyStandard::Property,
            "general" => AccuracyStandard::General,
            "rough" => AccuracyStandard::Rough,
            _ => AccuracyStandard::default(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AccuracyStandard::Engineering => "engineering",
            AccuracyStandard::Property => "property",
            AccuracyStandard::General => "general",
            AccuracyStandard::Rough => "rough",
        }
    }

    /// Required perimeter / linear error ratio
    pub fn min_relative_precision(self) -> f64 {
        match self {
            AccuracyStandard::Engineering => 5000.0,
            AccuracyStandard::Property => 3000.0,
            AccuracyStandard::General => 1000.0,
            AccuracyStandard::Rough => 500.0,
        }
    }
}

impl fmt::Display for AccuracyStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
