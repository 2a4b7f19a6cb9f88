//! Ecosystem sequestration predictor.
//!
//! The NGO-side mirror of the emission engine: ecosystem inputs go through a
//! fixed formula to a predicted annual CO₂ uptake, a credit count, and a
//! categorical restoration recommendation. Unlike the emission path this one
//! validates first — all four fields must be present before any arithmetic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MANGROVE_RESTORATION: &str = "Mangrove Restoration";
pub const SEAGRASS_CONSERVATION: &str = "Seagrass Conservation";
pub const MIXED_COASTAL: &str = "Mixed Coastal Ecosystem";

/// CO₂ uptake per tree, per year.
const CO2_PER_TREE: f64 = 0.25;

/// Area contribution per hectare.
const AREA_FACTOR: f64 = 2.5;

/// Rainfall contribution is rainfall/100, capped here.
const RAINFALL_BONUS_CAP: f64 = 15.0;

/// Credits granted per unit of predicted CO₂ (rounded up).
const CREDIT_RATIO: f64 = 0.1;

/// Raised when a required ecosystem field is absent. The predictor checks
/// fields in declaration order and reports the first one missing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required field: {0}")]
pub struct MissingFieldError(pub &'static str);

/// Restoration site description. A field left at its default counts as
/// missing; the predictor refuses to guess.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct EcosystemInput {
    /// Soil classification ("alluvial", "coastal", ...).
    pub soil_type: Option<String>,

    /// Trees planted or planned.
    pub trees_count: u64,

    /// Site area, hectares.
    pub area_size: f64,

    /// Annual rainfall, mm.
    pub rainfall: f64,
}

/// One complete prediction, superseded wholesale by the next invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    /// Predicted uptake per year, rounded.
    pub predicted_co2: u64,

    /// Credits the project can claim.
    pub credits_needed: u64,

    /// Suggested restoration program for the soil type.
    pub recommended_ecosystem: String,
}

fn soil_bonus(soil_type: &str) -> f64 {
    if soil_type.eq_ignore_ascii_case("alluvial") {
        1.2
    } else if soil_type.eq_ignore_ascii_case("coastal") {
        1.1
    } else {
        1.0
    }
}

fn recommended_ecosystem(soil_type: &str) -> &'static str {
    if soil_type.eq_ignore_ascii_case("alluvial") {
        MANGROVE_RESTORATION
    } else if soil_type.eq_ignore_ascii_case("coastal") {
        SEAGRASS_CONSERVATION
    } else {
        MIXED_COASTAL
    }
}

/// Predict annual sequestration for a restoration site.
///
/// # Errors
///
/// Returns [`MissingFieldError`] if any of the four fields is absent
/// (unselected soil type, or a zero count/area/rainfall). Nothing is
/// computed in that case.
pub fn predict_sequestration(
    input: &EcosystemInput,
) -> Result<PredictionResult, MissingFieldError> {
    let soil = crate::calculator::inputs::selection(&input.soil_type)
        .ok_or(MissingFieldError("soil_type"))?;
    if input.trees_count == 0 {
        return Err(MissingFieldError("trees_count"));
    }
    if input.area_size <= 0.0 {
        return Err(MissingFieldError("area_size"));
    }
    if input.rainfall <= 0.0 {
        return Err(MissingFieldError("rainfall"));
    }

    let base_co2 = input.trees_count as f64 * CO2_PER_TREE;
    let area_bonus = input.area_size * AREA_FACTOR;
    let rainfall_bonus = (input.rainfall / 100.0).min(RAINFALL_BONUS_CAP);

    let predicted_co2 = ((base_co2 + area_bonus + rainfall_bonus) * soil_bonus(soil)).round() as u64;
    let credits_needed = (predicted_co2 as f64 * CREDIT_RATIO).ceil() as u64;

    Ok(PredictionResult {
        predicted_co2,
        credits_needed,
        recommended_ecosystem: recommended_ecosystem(soil).to_string(),
    })
}
