//! Ideal-weight calculator.
//!
//! Scales the current weight by the body-condition percentage for the
//! species: a thin animal's ideal weight is above its current weight, an
//! overweight animal's is below.  Results are rounded to 2 decimals.

use crate::error::{CalcError, Result};
use crate::profile::{BodyCondition, Species, parse_body_condition_index};
use crate::tables::{ideal_weight_percentage, ideal_weight_scale};

/// Round half away from zero to `decimals` places.
///
/// Values too large to scale have no fractional digits left and come back
/// unchanged.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Ideal weight for a typed body condition.
pub fn ideal_weight_for(weight_kg: f64, condition: BodyCondition, species: Species) -> f64 {
    round_to(weight_kg * ideal_weight_scale(condition, species), 2)
}

/// Ideal weight from raw host values.
pub fn try_ideal_weight(weight_kg: Option<f64>, label: &str, species: &str) -> Result<f64> {
    let weight = weight_kg.ok_or_else(|| CalcError::missing("weight"))?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(CalcError::unparsable("weight", weight.to_string()));
    }

    let index = parse_body_condition_index(label)?;
    if species.is_empty() {
        return Err(CalcError::missing("animal_type"));
    }
    let species: Species = species.parse()?;
    let percentage = ideal_weight_percentage(index, species)
        .ok_or_else(|| CalcError::unknown_key("morphology index", index.to_string()))?;

    let ideal = weight * percentage;
    if !ideal.is_finite() {
        return Err(CalcError::unparsable("weight", weight.to_string()));
    }
    Ok(round_to(ideal, 2))
}

/// Host-facing calculator: `None` when the weight is absent, the label has
/// no leading index in 1–9, or the species is unknown.
pub fn ideal_weight(weight_kg: Option<f64>, label: &str, species: &str) -> Option<f64> {
    try_ideal_weight(weight_kg, label, species)
        .inspect_err(|e| e.log("ideal weight"))
        .ok()
}
