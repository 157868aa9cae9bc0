//! Data Transfer Objects for footprint endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::footprint::AnnualFootprint;

/// Form fields of the annual calculator. Values stay raw strings so that
/// blanks and non-numbers can be told apart.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnnualFootprintForm {
    pub electricity: Option<String>,
    pub car_distance: Option<String>,
    pub flights: Option<String>,
    pub diet: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnualFootprintResponse {
    pub breakdown: AnnualFootprint,
    /// kg CO2e per year.
    pub total: f64,
    pub total_tons: f64,
}

impl From<AnnualFootprint> for AnnualFootprintResponse {
    fn from(breakdown: AnnualFootprint) -> Self {
        Self {
            total: breakdown.total,
            total_tons: breakdown.total_tons(),
            breakdown,
        }
    }
}
