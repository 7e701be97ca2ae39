//! Pet configuration entry
//!
//! The host keeps two layers per pet: `data`, written once by the setup
//! flow, and `options`, editable afterwards.  A non-empty option always
//! wins over the data layer.  Every field is an optional string here;
//! validation into typed attributes happens in
//! [`AttributeProfile::from_config`](crate::profile::AttributeProfile::from_config).

use serde::{Deserialize, Serialize};

/// Names of the configurable fields, as stored by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    Name,
    AnimalType,
    Breed,
    Birthday,
    Reproductive,
    Activity,
    LivingEnvironment,
    Morphology,
    Appetite,
    Temperament,
    WeightSensor,
    LastTimeSensor,
}

impl ConfigKey {
    pub const ALL: [Self; 12] = [
        Self::Name,
        Self::AnimalType,
        Self::Breed,
        Self::Birthday,
        Self::Reproductive,
        Self::Activity,
        Self::LivingEnvironment,
        Self::Morphology,
        Self::Appetite,
        Self::Temperament,
        Self::WeightSensor,
        Self::LastTimeSensor,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::AnimalType => "animal_type",
            Self::Breed => "breed",
            Self::Birthday => "birthday",
            Self::Reproductive => "reproductive",
            Self::Activity => "activity",
            Self::LivingEnvironment => "living_environment",
            Self::Morphology => "morphology",
            Self::Appetite => "appetite",
            Self::Temperament => "temperament",
            Self::WeightSensor => "weight",
            Self::LastTimeSensor => "last_measurement_time",
        }
    }
}

/// One layer of a pet's configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetConfig {
    // --- Identity ---
    /// Display name of the pet.
    pub name: Option<String>,
    /// `dog` or `cat`.
    pub animal_type: Option<String>,
    pub breed: Option<String>,
    /// Birth date, `YYYY-MM-DD`.
    pub birthday: Option<String>,

    // --- Attributes ---
    pub reproductive: Option<String>,
    pub activity: Option<String>,
    pub living_environment: Option<String>,
    /// Body-condition label, e.g. `5_ideal`.
    pub morphology: Option<String>,
    /// Dogs only.
    pub appetite: Option<String>,
    /// Cats only.
    pub temperament: Option<String>,

    // --- Sensors ---
    /// Entity id of the weight sensor (kg).
    #[serde(rename = "weight")]
    pub weight_sensor: Option<String>,
    /// Entity id of the last-measurement timestamp sensor.
    #[serde(rename = "last_measurement_time")]
    pub last_time_sensor: Option<String>,
}

impl PetConfig {
    fn slot(&self, key: ConfigKey) -> &Option<String> {
        match key {
            ConfigKey::Name => &self.name,
            ConfigKey::AnimalType => &self.animal_type,
            ConfigKey::Breed => &self.breed,
            ConfigKey::Birthday => &self.birthday,
            ConfigKey::Reproductive => &self.reproductive,
            ConfigKey::Activity => &self.activity,
            ConfigKey::LivingEnvironment => &self.living_environment,
            ConfigKey::Morphology => &self.morphology,
            ConfigKey::Appetite => &self.appetite,
            ConfigKey::Temperament => &self.temperament,
            ConfigKey::WeightSensor => &self.weight_sensor,
            ConfigKey::LastTimeSensor => &self.last_time_sensor,
        }
    }

    fn slot_mut(&mut self, key: ConfigKey) -> &mut Option<String> {
        match key {
            ConfigKey::Name => &mut self.name,
            ConfigKey::AnimalType => &mut self.animal_type,
            ConfigKey::Breed => &mut self.breed,
            ConfigKey::Birthday => &mut self.birthday,
            ConfigKey::Reproductive => &mut self.reproductive,
            ConfigKey::Activity => &mut self.activity,
            ConfigKey::LivingEnvironment => &mut self.living_environment,
            ConfigKey::Morphology => &mut self.morphology,
            ConfigKey::Appetite => &mut self.appetite,
            ConfigKey::Temperament => &mut self.temperament,
            ConfigKey::WeightSensor => &mut self.weight_sensor,
            ConfigKey::LastTimeSensor => &mut self.last_time_sensor,
        }
    }

    /// The value for `key`, with an empty string treated as absent.
    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        self.slot(key).as_deref().filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, key: ConfigKey, value: Option<String>) {
        *self.slot_mut(key) = value.filter(|v| !v.is_empty());
    }
}

/// A pet's stored configuration: setup data plus editable options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigEntry {
    pub data: PetConfig,
    pub options: PetConfig,
}

impl ConfigEntry {
    pub fn new(data: PetConfig, options: PetConfig) -> Self {
        Self { data, options }
    }

    /// Effective value for `key`: the option if set, else the setup data.
    pub fn option(&self, key: ConfigKey) -> Option<&str> {
        self.options.get(key).or_else(|| self.data.get(key))
    }

    /// Collapse both layers into the effective configuration.
    pub fn merged(&self) -> PetConfig {
        let mut merged = PetConfig::default();
        for key in ConfigKey::ALL {
            merged.set(key, self.option(key).map(str::to_owned));
        }
        merged
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
