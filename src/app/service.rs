//! Pet scale service: the hexagonal core.
//!
//! [`PetScaleService`] owns the validated profile and status monitor for
//! one pet.  All host interaction flows through port traits passed at call
//! sites, so the service is testable with mock adapters.
//!
//! ```text
//!  ReadingPort ──▶ ┌──────────────────────────────┐ ──▶ MetricsSink
//!                  │       PetScaleService         │
//!    ClockPort ──▶ │ life stage · ideal · energy   │
//!                  └──────────────────────────────┘
//! ```
//!
//! Every refresh recomputes all metrics from scratch.  Only the last
//! parsed measurement timestamp and the previous status survive between
//! refreshes.

use anyhow::{Context, bail};
use chrono::{DateTime, FixedOffset};
use log::{debug, error, info};

use crate::config::{ConfigEntry, ConfigKey, PetConfig};
use crate::energy::energy_need;
use crate::ideal_weight::ideal_weight;
use crate::life_stage::classify_life_stage;
use crate::profile::{AttributeProfile, Species};
use crate::reading::{LastMeasurement, WeightReading};
use crate::status::{self, StatusMonitor};

use super::commands::ScaleCommand;
use super::events::{PetMetrics, ScaleEvent};
use super::ports::{ClockPort, MetricsSink, ReadingPort};

// ───────────────────────────────────────────────────────────────
// PetScaleService
// ───────────────────────────────────────────────────────────────

pub struct PetScaleService {
    entry: ConfigEntry,
    /// Effective configuration (options over data).
    config: PetConfig,
    weight_sensor: String,
    last_time_sensor: Option<String>,
    /// `None` when the attributes are incomplete; energy need is then unknown.
    profile: Option<AttributeProfile>,
    monitor: StatusMonitor,
    last_time: Option<DateTime<FixedOffset>>,
    last_metrics: Option<PetMetrics>,
    refresh_count: u64,
}

impl PetScaleService {
    /// Validate a config entry and build the service.
    ///
    /// Fails only when no weight sensor is configured.  Incomplete or
    /// unknown attributes are logged and leave the energy need unknown.
    pub fn setup(entry: ConfigEntry) -> anyhow::Result<Self> {
        let config = entry.merged();

        let Some(weight_sensor) = config.get(ConfigKey::WeightSensor).map(str::to_owned) else {
            error!("Missing weight sensor entity in config entry");
            bail!("no weight sensor configured");
        };
        let last_time_sensor = config.get(ConfigKey::LastTimeSensor).map(str::to_owned);

        let profile = AttributeProfile::from_config(&config)
            .inspect_err(|e| e.log("profile"))
            .ok();

        info!(
            "PetScale setup: name={} weight_sensor={} last_time_sensor={} profile={}",
            config.get(ConfigKey::Name).unwrap_or("-"),
            weight_sensor,
            last_time_sensor.as_deref().unwrap_or("-"),
            if profile.is_some() { "complete" } else { "incomplete" },
        );

        Ok(Self {
            entry,
            config,
            weight_sensor,
            last_time_sensor,
            profile,
            monitor: StatusMonitor::new(),
            last_time: None,
            last_metrics: None,
            refresh_count: 0,
        })
    }

    /// Parse a JSON config entry and build the service.
    pub fn setup_from_json(json: &str) -> anyhow::Result<Self> {
        let entry = ConfigEntry::from_json(json).context("parsing config entry")?;
        Self::setup(entry)
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce the service and run the first refresh.
    pub fn start(
        &mut self,
        reader: &impl ReadingPort,
        clock: &impl ClockPort,
        sink: &mut impl MetricsSink,
    ) {
        sink.emit(&ScaleEvent::Started {
            name: self.config.name.clone(),
            species: self.species(),
        });
        info!("PetScaleService started");
        self.refresh(reader, clock, sink);
    }

    // ── Per-update orchestration ──────────────────────────────

    /// Read the sensors and recompute every metric.
    pub fn refresh(
        &mut self,
        reader: &impl ReadingPort,
        clock: &impl ClockPort,
        sink: &mut impl MetricsSink,
    ) -> &PetMetrics {
        self.refresh_count += 1;

        // 1. Readings
        let weight = WeightReading::from_optional_state(reader.read_state(&self.weight_sensor).as_deref());
        let last = self
            .last_time_sensor
            .as_deref()
            .map(|id| LastMeasurement::from_optional_state(reader.read_state(id).as_deref()));
        if let Some(at) = last.as_ref().and_then(LastMeasurement::at) {
            self.last_time = Some(*at);
        }

        // 2. Derived metrics
        let species = self.config.get(ConfigKey::AnimalType).unwrap_or_default();
        let body_type = self.config.get(ConfigKey::Morphology);
        let life_stage = classify_life_stage(
            species,
            self.config.get(ConfigKey::Birthday),
            clock.today(),
            weight.kg(),
        );
        let ideal = ideal_weight(weight.kg(), body_type.unwrap_or_default(), species);
        let energy = match (&self.profile, life_stage, ideal) {
            (Some(profile), Some(stage), Some(ideal)) => energy_need(profile, stage, ideal),
            _ => None,
        };
        debug!(
            "metrics: weight={:?} ideal={ideal:?} stage={life_stage:?} energy={energy:?}",
            weight.kg()
        );

        // 3. Status
        let report = status::evaluate(weight, last.as_ref());
        if let Some(from) = self.monitor.update(report) {
            info!("Status {from} -> {}", report.status);
            sink.emit(&ScaleEvent::StatusChanged {
                from,
                to: report.status,
            });
        }

        let metrics = PetMetrics {
            name: self.config.name.clone(),
            animal_type: self.species(),
            weight: weight.kg(),
            ideal_weight: ideal,
            body_type: body_type.map(str::to_owned),
            life_stage,
            energy_need: energy,
            status: report.status,
            issue: report.issue,
            last_measurement_time: self.last_time,
        };
        sink.emit(&ScaleEvent::MetricsUpdated(metrics.clone()));
        self.last_metrics.insert(metrics)
    }

    // ── Command handling ──────────────────────────────────────

    /// Process a host command.  A rejected option update leaves the
    /// current setup untouched.
    pub fn handle_command(
        &mut self,
        cmd: ScaleCommand,
        reader: &impl ReadingPort,
        clock: &impl ClockPort,
        sink: &mut impl MetricsSink,
    ) -> anyhow::Result<()> {
        match cmd {
            ScaleCommand::Refresh => {
                self.refresh(reader, clock, sink);
            }
            ScaleCommand::UpdateOptions(options) => {
                let entry = ConfigEntry::new(self.entry.data.clone(), options);
                *self = Self::setup(entry).context("applying updated options")?;
                info!("Options updated, profile rebuilt");
                self.refresh(reader, clock, sink);
            }
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn last_metrics(&self) -> Option<&PetMetrics> {
        self.last_metrics.as_ref()
    }

    /// Most recent successfully parsed measurement timestamp.
    pub fn last_measurement(&self) -> Option<DateTime<FixedOffset>> {
        self.last_time
    }

    pub fn profile(&self) -> Option<&AttributeProfile> {
        self.profile.as_ref()
    }

    pub fn config(&self) -> &PetConfig {
        &self.config
    }

    /// Entity ids the host should watch for changes.
    pub fn monitored_sensors(&self) -> impl Iterator<Item = &str> {
        core::iter::once(self.weight_sensor.as_str()).chain(self.last_time_sensor.as_deref())
    }

    /// Refreshes run since setup.
    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    fn species(&self) -> Option<Species> {
        self.config.get(ConfigKey::AnimalType)?.parse().ok()
    }
}
