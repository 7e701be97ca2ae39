//! Mock host ports for integration tests.
//!
//! `MockReader` serves sensor states from a map; `RecordingSink` keeps
//! every emitted event so tests can assert on the full history.

use std::collections::HashMap;

use chrono::NaiveDate;
use petscale::adapters::time::FixedClock;
use petscale::app::events::{PetMetrics, ScaleEvent};
use petscale::app::ports::{MetricsSink, ReadingPort};
use petscale::config::{ConfigEntry, PetConfig};
use petscale::status::HealthStatus;

pub const WEIGHT_SENSOR: &str = "sensor.pet_weight";
pub const LAST_TIME_SENSOR: &str = "sensor.pet_last_weighed";

// ── MockReader ───────────────────────────────────────────────

#[derive(Default)]
pub struct MockReader {
    states: HashMap<String, String>,
}

#[allow(dead_code)]
impl MockReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, entity_id: &str, state: &str) -> Self {
        self.set(entity_id, state);
        self
    }

    pub fn set(&mut self, entity_id: &str, state: &str) {
        self.states.insert(entity_id.to_owned(), state.to_owned());
    }

    pub fn remove(&mut self, entity_id: &str) {
        self.states.remove(entity_id);
    }
}

impl ReadingPort for MockReader {
    fn read_state(&self, entity_id: &str) -> Option<String> {
        self.states.get(entity_id).cloned()
    }
}

// ── RecordingSink ────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<ScaleEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_metrics(&self) -> Option<&PetMetrics> {
        self.events.iter().rev().find_map(|e| match e {
            ScaleEvent::MetricsUpdated(m) => Some(m),
            _ => None,
        })
    }

    pub fn status_changes(&self) -> Vec<(HealthStatus, HealthStatus)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ScaleEvent::StatusChanged { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }
}

impl MetricsSink for RecordingSink {
    fn emit(&mut self, event: &ScaleEvent) {
        self.events.push(event.clone());
    }
}

// ── Fixtures ─────────────────────────────────────────────────

pub fn clock() -> FixedClock {
    FixedClock::new(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
}

/// Neutral adult cat: every factor is 1.0.
#[allow(dead_code)]
pub fn cat_entry() -> ConfigEntry {
    ConfigEntry::new(
        PetConfig {
            name: Some("Mia".into()),
            animal_type: Some("cat".into()),
            breed: Some("mixed_breed_or_other_breed".into()),
            birthday: Some("2020-03-15".into()),
            reproductive: Some("intact".into()),
            activity: Some("normal".into()),
            temperament: Some("normal".into()),
            ..PetConfig::default()
        },
        PetConfig {
            living_environment: Some("indoors".into()),
            morphology: Some("5_ideal".into()),
            weight_sensor: Some(WEIGHT_SENSOR.into()),
            ..PetConfig::default()
        },
    )
}

/// Neutral adult dog: every factor is 1.0.
#[allow(dead_code)]
pub fn dog_entry() -> ConfigEntry {
    ConfigEntry::new(
        PetConfig {
            name: Some("Rex".into()),
            animal_type: Some("dog".into()),
            breed: Some("mixed_breed_or_other_breed".into()),
            birthday: Some("2020-03-15".into()),
            reproductive: Some("intact".into()),
            activity: Some("normal".into()),
            appetite: Some("normal".into()),
            ..PetConfig::default()
        },
        PetConfig {
            living_environment: Some("indoors".into()),
            morphology: Some("5_ideal".into()),
            weight_sensor: Some(WEIGHT_SENSOR.into()),
            ..PetConfig::default()
        },
    )
}
