//! Pet attribute profile.
//!
//! The profile is assembled once from the host's config entry and never
//! mutated; a changed setup builds a new profile.  Species-specific fields
//! live in [`SpeciesTraits`], so a cat can never carry an appetite and a dog
//! can never be missing one.

pub mod attributes;
pub mod species;

pub use attributes::{
    Activity, Appetite, BodyCondition, Breed, Environment, LifeStage, Reproductive, Temperament,
    parse_body_condition_index,
};
pub use species::Species;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigKey, PetConfig};
use crate::error::{CalcError, Result};
use crate::life_stage::parse_birth_date;

/// The field that only one species carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "animal_type", rename_all = "lowercase")]
pub enum SpeciesTraits {
    Dog { appetite: Appetite },
    Cat { temperament: Temperament },
}

impl SpeciesTraits {
    pub const fn species(self) -> Species {
        match self {
            Self::Dog { .. } => Species::Dog,
            Self::Cat { .. } => Species::Cat,
        }
    }
}

/// Validated, immutable set of categorical attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeProfile {
    pub birth_date: NaiveDate,
    pub breed: Breed,
    pub reproductive: Reproductive,
    pub activity: Activity,
    pub environment: Environment,
    pub body_condition: BodyCondition,
    #[serde(flatten)]
    pub traits: SpeciesTraits,
}

impl AttributeProfile {
    pub const fn species(&self) -> Species {
        self.traits.species()
    }

    /// Validate a config entry into a profile.
    ///
    /// Fields are checked in a fixed order and the first failure is
    /// returned: an absent field is [`CalcError::MissingInput`], a key the
    /// factor tables do not know is [`CalcError::UnknownKey`].
    pub fn from_config(config: &PetConfig) -> Result<Self> {
        let species: Species = require(config, ConfigKey::AnimalType)?.parse()?;
        let activity = require(config, ConfigKey::Activity)?.parse()?;
        let breed = require(config, ConfigKey::Breed)?.parse()?;
        let birth_date = parse_birth_date(require(config, ConfigKey::Birthday)?)?;
        let environment = require(config, ConfigKey::LivingEnvironment)?.parse()?;
        let reproductive = require(config, ConfigKey::Reproductive)?.parse()?;
        let body_condition = require(config, ConfigKey::Morphology)?.parse()?;
        let traits = match species {
            Species::Cat => SpeciesTraits::Cat {
                temperament: require(config, ConfigKey::Temperament)?.parse()?,
            },
            Species::Dog => SpeciesTraits::Dog {
                appetite: require(config, ConfigKey::Appetite)?.parse()?,
            },
        };

        Ok(Self {
            birth_date,
            breed,
            reproductive,
            activity,
            environment,
            body_condition,
            traits,
        })
    }
}

fn require(config: &PetConfig, key: ConfigKey) -> Result<&str> {
    config
        .get(key)
        .ok_or_else(|| CalcError::missing(key.as_str()))
}
