//! Outbound events.
//!
//! The [`PetScaleService`](super::service::PetScaleService) emits these
//! through the [`MetricsSink`](super::ports::MetricsSink) port.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::profile::{LifeStage, Species};
use crate::status::{HealthStatus, Issue};

/// Structured events emitted by the service.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleEvent {
    /// The service has started for the named pet.
    Started {
        name: Option<String>,
        species: Option<Species>,
    },

    /// A refresh produced a fresh set of metrics.
    MetricsUpdated(PetMetrics),

    /// The pet's status flipped between `ok` and `problem`.
    StatusChanged { from: HealthStatus, to: HealthStatus },
}

/// Everything computed in one refresh.  `None` means unknown.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PetMetrics {
    pub name: Option<String>,
    pub animal_type: Option<Species>,
    /// Current weight in kg.
    pub weight: Option<f64>,
    /// Ideal weight in kg, 2 decimals.
    pub ideal_weight: Option<f64>,
    /// Body-condition label as configured.
    pub body_type: Option<String>,
    pub life_stage: Option<LifeStage>,
    /// Daily energy need in kcal.
    pub energy_need: Option<u32>,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<Issue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_measurement_time: Option<DateTime<FixedOffset>>,
}

impl PetMetrics {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
