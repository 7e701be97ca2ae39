//! Daily energy-need calculator.
//!
//! ```text
//!   breed × life stage × activity × reproductive × morphology × environment
//!     × (temperament | appetite)                    = combined factor
//!
//!   cat:            100 × ideal^0.667
//!   dog (< 21 kg):  120 × ideal^0.75                = base kcal/day
//!   dog (≥ 21 kg):  156 × ideal^0.667
//!
//!   energy need = round(combined factor × base)
//! ```
//!
//! The base formula is keyed on the ideal weight, never the raw reading.
//! No clamping is applied to the result: a need beyond `u32::MAX` kcal is
//! an error, not a saturated value.

use serde::Serialize;

use crate::config::PetConfig;
use crate::error::{CalcError, Result};
use crate::profile::{AttributeProfile, LifeStage, Species, SpeciesTraits};
use crate::tables::{
    activity_factor, appetite_factor, body_condition_factor, environment_factor,
    life_stage_factor, reproductive_factor, temperament_factor,
};

/// Ideal weight (kg) at which dogs switch to the large-dog formula.
pub const DOG_BREAKPOINT_KG: f64 = 21.0;

/// Number of factors in the combined multiplier.
const FACTOR_COUNT: usize = 7;

/// Base metabolic energy in kcal/day.
pub fn base_energy(species: Species, ideal_weight_kg: f64) -> f64 {
    match species {
        Species::Cat => 100.0 * ideal_weight_kg.powf(0.667),
        Species::Dog if ideal_weight_kg < DOG_BREAKPOINT_KG => 120.0 * ideal_weight_kg.powf(0.75),
        Species::Dog => 156.0 * ideal_weight_kg.powf(0.667),
    }
}

/// One factor that went into the combined multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorTerm {
    pub table: &'static str,
    pub key: &'static str,
    pub factor: f64,
}

/// The combined multiplier and its breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedFactor {
    pub value: f64,
    pub terms: heapless::Vec<FactorTerm, FACTOR_COUNT>,
}

/// Result of a successful energy computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyEstimate {
    /// Daily energy need, rounded to whole kcal.
    pub kcal: u32,
    /// Unscaled base energy (kcal/day).
    pub base_kcal: f64,
    pub factor: CombinedFactor,
}

/// Multiply every attribute factor for `profile` at `stage`.
///
/// The life-stage factor comes from the species' own table; a stage key
/// from the other species is an error.
pub fn combined_factor(profile: &AttributeProfile, stage: LifeStage) -> Result<CombinedFactor> {
    let species = profile.species();
    let (trait_table, trait_key, trait_factor) = match profile.traits {
        SpeciesTraits::Cat { temperament } => (
            "temperament",
            temperament.as_str(),
            temperament_factor(temperament),
        ),
        SpeciesTraits::Dog { appetite } => {
            ("appetite", appetite.as_str(), appetite_factor(appetite))
        }
    };

    let terms: [FactorTerm; FACTOR_COUNT] = [
        FactorTerm {
            table: "breed",
            key: profile.breed.as_str(),
            factor: profile.breed.factor(),
        },
        FactorTerm {
            table: "life stage",
            key: stage.as_str(),
            factor: life_stage_factor(species, stage)?,
        },
        FactorTerm {
            table: "activity",
            key: profile.activity.as_str(),
            factor: activity_factor(profile.activity),
        },
        FactorTerm {
            table: "reproductive",
            key: profile.reproductive.as_str(),
            factor: reproductive_factor(profile.reproductive),
        },
        FactorTerm {
            table: "morphology",
            key: profile.body_condition.as_str(),
            factor: body_condition_factor(profile.body_condition),
        },
        FactorTerm {
            table: "living environment",
            key: profile.environment.as_str(),
            factor: environment_factor(profile.environment),
        },
        FactorTerm {
            table: trait_table,
            key: trait_key,
            factor: trait_factor,
        },
    ];

    Ok(CombinedFactor {
        value: terms.iter().map(|t| t.factor).product(),
        terms: terms.into_iter().collect(),
    })
}

/// Energy need for a validated profile.
pub fn try_energy_need(
    profile: &AttributeProfile,
    stage: LifeStage,
    ideal_weight_kg: f64,
) -> Result<EnergyEstimate> {
    if !ideal_weight_kg.is_finite() || ideal_weight_kg < 0.0 {
        return Err(CalcError::unparsable(
            "ideal weight",
            ideal_weight_kg.to_string(),
        ));
    }

    let factor = combined_factor(profile, stage)?;
    let base_kcal = base_energy(profile.species(), ideal_weight_kg);
    let kcal = (factor.value * base_kcal).round();
    if !(0.0..=f64::from(u32::MAX)).contains(&kcal) {
        return Err(CalcError::unparsable("energy need", kcal.to_string()));
    }

    Ok(EnergyEstimate {
        kcal: kcal as u32,
        base_kcal,
        factor,
    })
}

/// Host-facing calculator over a validated profile.
pub fn energy_need(profile: &AttributeProfile, stage: LifeStage, ideal_weight_kg: f64) -> Option<u32> {
    try_energy_need(profile, stage, ideal_weight_kg)
        .inspect_err(|e| e.log("energy need"))
        .ok()
        .map(|estimate| estimate.kcal)
}

/// Energy need straight from a config layer.
///
/// Applies the required-field gate first: every attribute the species
/// needs must be present.  An unknown upstream life stage or ideal weight
/// makes the result unknown too.
pub fn try_energy_need_from_config(
    config: &PetConfig,
    stage: Option<LifeStage>,
    ideal_weight_kg: Option<f64>,
) -> Result<EnergyEstimate> {
    let profile = AttributeProfile::from_config(config)?;
    let stage = stage.ok_or_else(|| CalcError::missing("life stage"))?;
    let ideal = ideal_weight_kg.ok_or_else(|| CalcError::missing("ideal weight"))?;
    try_energy_need(&profile, stage, ideal)
}

pub fn energy_need_from_config(
    config: &PetConfig,
    stage: Option<LifeStage>,
    ideal_weight_kg: Option<f64>,
) -> Option<u32> {
    try_energy_need_from_config(config, stage, ideal_weight_kg)
        .inspect_err(|e| e.log("energy need"))
        .ok()
        .map(|estimate| estimate.kcal)
}
