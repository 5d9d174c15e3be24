//! Area Unit Conversion
//!
//! Plain constant multiplications from square meters. Nothing is rounded
//! here; rounding belongs to whoever prints the number.

use serde::{Deserialize, Serialize};

pub const M2_TO_ACRE: f64 = 0.000247105;
pub const M2_TO_HECTARE: f64 = 0.0001;
pub const M2_TO_FT2: f64 = 10.7639;

pub fn sqm_to_acres(area_m2: f64) -> f64 {
    area_m2 * M2_TO_ACRE
}

pub fn sqm_to_hectares(area_m2: f64) -> f64 {
    area_m2 * M2_TO_HECTARE
}

pub fn sqm_to_sqft(area_m2: f64) -> f64 {
    area_m2 * M2_TO_FT2
}

/// One area expressed in every reported unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaUnits {
    pub square_meters: f64,
    pub hectares: f64,
    pub acres: f64,
    pub square_feet: f64,
}

impl AreaUnits {
    pub fn from_square_meters(area_m2: f64) -> Self {
        AreaUnits {
            square_meters: area_m2,
            hectares: sqm_to_hectares(area_m2),
            acres: sqm_to_acres(area_m2),
            square_feet: sqm_to_sqft(area_m2),
        }
    }
}
