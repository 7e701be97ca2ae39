//! Integration tests for the readings → calculators → sink pipeline.

use petscale::app::commands::ScaleCommand;
use petscale::app::events::ScaleEvent;
use petscale::app::service::PetScaleService;
use petscale::config::{ConfigEntry, PetConfig};
use petscale::profile::{LifeStage, Species};
use petscale::status::{HealthStatus, Issue};

use crate::mock_ports::{
    LAST_TIME_SENSOR, MockReader, RecordingSink, WEIGHT_SENSOR, cat_entry, clock, dog_entry,
};

fn started(entry: ConfigEntry, reader: &MockReader) -> (PetScaleService, RecordingSink) {
    let mut service = PetScaleService::setup(entry).unwrap();
    let mut sink = RecordingSink::new();
    service.start(reader, &clock(), &mut sink);
    (service, sink)
}

// ── Happy paths ──────────────────────────────────────────────

#[test]
fn start_announces_then_publishes_metrics() {
    let reader = MockReader::new().with(WEIGHT_SENSOR, "4.0");
    let (_, sink) = started(cat_entry(), &reader);

    assert_eq!(
        sink.events[0],
        ScaleEvent::Started {
            name: Some("Mia".into()),
            species: Some(Species::Cat),
        }
    );
    assert!(matches!(sink.events[1], ScaleEvent::MetricsUpdated(_)));
    assert!(sink.status_changes().is_empty(), "a healthy pet starts ok");
}

#[test]
fn neutral_cat_metrics() {
    let reader = MockReader::new().with(WEIGHT_SENSOR, "4.0");
    let (service, sink) = started(cat_entry(), &reader);

    let m = service.last_metrics().unwrap();
    assert_eq!(m.weight, Some(4.0));
    assert_eq!(m.ideal_weight, Some(4.0));
    assert_eq!(m.body_type.as_deref(), Some("5_ideal"));
    assert_eq!(m.life_stage, Some(LifeStage::Adult));
    assert_eq!(m.energy_need, Some(252));
    assert_eq!(m.status, HealthStatus::Ok);
    assert_eq!(m.issue, None);
    assert_eq!(sink.last_metrics(), Some(m));
}

#[test]
fn dog_formulas_switch_at_breakpoint() {
    let mut reader = MockReader::new().with(WEIGHT_SENSOR, "10");
    let (mut service, mut sink) = started(dog_entry(), &reader);
    assert_eq!(service.last_metrics().unwrap().energy_need, Some(675));

    reader.set(WEIGHT_SENSOR, "30");
    let m = service.refresh(&reader, &clock(), &mut sink);
    assert_eq!(m.energy_need, Some(1508));
}

#[test]
fn overweight_dog_uses_ideal_weight() {
    let mut entry = dog_entry();
    entry.options.morphology = Some("7_overweight".into());
    let reader = MockReader::new().with(WEIGHT_SENSOR, "10");
    let (service, _) = started(entry, &reader);

    let m = service.last_metrics().unwrap();
    assert_eq!(m.ideal_weight, Some(8.0));
    // 0.9 × 120 × 8^0.75
    assert_eq!(m.energy_need, Some(514));
}

#[test]
fn puppy_stage_follows_current_weight() {
    let mut entry = dog_entry();
    entry.data.birthday = Some("2024-12-15".into());
    let mut reader = MockReader::new().with(WEIGHT_SENSOR, "8");
    let (mut service, mut sink) = started(entry, &reader);

    let m = service.last_metrics().unwrap();
    assert_eq!(m.life_stage, Some(LifeStage::PuppyLow5To7));
    assert_eq!(m.energy_need, Some(742));

    reader.set(WEIGHT_SENSOR, "12");
    let m = service.refresh(&reader, &clock(), &mut sink);
    assert_eq!(m.life_stage, Some(LifeStage::Puppy20From6To9));
    assert_eq!(m.energy_need, Some(1006));

    reader.set(WEIGHT_SENSOR, "22");
    let m = service.refresh(&reader, &clock(), &mut sink);
    assert_eq!(m.life_stage, Some(LifeStage::Puppy35From3To6));
    assert_eq!(m.energy_need, Some(1962));
}

// ── Degraded inputs ──────────────────────────────────────────

#[test]
fn unavailable_weight_makes_weight_metrics_unknown() {
    let mut reader = MockReader::new().with(WEIGHT_SENSOR, "4.0");
    let (mut service, mut sink) = started(cat_entry(), &reader);

    reader.set(WEIGHT_SENSOR, "unavailable");
    let m = service.refresh(&reader, &clock(), &mut sink).clone();
    assert_eq!(m.weight, None);
    assert_eq!(m.ideal_weight, None);
    assert_eq!(m.energy_need, None);
    // Cats are staged by age alone.
    assert_eq!(m.life_stage, Some(LifeStage::Adult));
    assert_eq!(m.status, HealthStatus::Problem);
    assert_eq!(m.issue, Some(Issue::WeightUnavailable));
    assert_eq!(
        sink.status_changes(),
        [(HealthStatus::Ok, HealthStatus::Problem)]
    );

    reader.set(WEIGHT_SENSOR, "4.1");
    service.refresh(&reader, &clock(), &mut sink);
    assert_eq!(
        sink.status_changes(),
        [
            (HealthStatus::Ok, HealthStatus::Problem),
            (HealthStatus::Problem, HealthStatus::Ok)
        ]
    );
}

#[test]
fn missing_sensor_state_is_unavailable() {
    let reader = MockReader::new();
    let (service, _) = started(dog_entry(), &reader);
    let m = service.last_metrics().unwrap();
    assert_eq!(m.issue, Some(Issue::WeightUnavailable));
    // Dogs under 96 months are staged by weight as well.
    assert_eq!(m.life_stage, None);
}

#[test]
fn weight_thresholds_raise_issues() {
    let mut reader = MockReader::new().with(WEIGHT_SENSOR, "0");
    let (mut service, mut sink) = started(dog_entry(), &reader);
    assert_eq!(service.last_metrics().unwrap().issue, Some(Issue::WeightLow));

    reader.set(WEIGHT_SENSOR, "100");
    let m = service.refresh(&reader, &clock(), &mut sink);
    assert_eq!(m.issue, Some(Issue::WeightHigh));
    // Sanity bounds are not applied to the calculators.
    assert_eq!(m.ideal_weight, Some(100.0));
    assert!(m.energy_need.is_some());
}

#[test]
fn incomplete_profile_leaves_energy_unknown() {
    let mut entry = cat_entry();
    entry.data.temperament = None;
    let reader = MockReader::new().with(WEIGHT_SENSOR, "4.0");
    let (service, _) = started(entry, &reader);

    assert!(service.profile().is_none());
    let m = service.last_metrics().unwrap();
    assert_eq!(m.ideal_weight, Some(4.0));
    assert_eq!(m.life_stage, Some(LifeStage::Adult));
    assert_eq!(m.energy_need, None);
}

#[test]
fn unknown_breed_leaves_energy_unknown() {
    let mut entry = dog_entry();
    entry.data.breed = Some("dire_wolf".into());
    let reader = MockReader::new().with(WEIGHT_SENSOR, "10");
    let (service, _) = started(entry, &reader);
    assert_eq!(service.last_metrics().unwrap().energy_need, None);
}

#[test]
fn unparsable_body_condition_leaves_ideal_and_energy_unknown() {
    let mut entry = cat_entry();
    entry.options.morphology = Some("ideal".into());
    let reader = MockReader::new().with(WEIGHT_SENSOR, "4.0");
    let (service, _) = started(entry, &reader);
    let m = service.last_metrics().unwrap();
    assert_eq!(m.ideal_weight, None);
    assert_eq!(m.energy_need, None);
}

// ── Last measurement ─────────────────────────────────────────

#[test]
fn last_measurement_keeps_last_parsed_timestamp() {
    let mut entry = cat_entry();
    entry.options.last_time_sensor = Some(LAST_TIME_SENSOR.into());
    let mut reader = MockReader::new()
        .with(WEIGHT_SENSOR, "4.0")
        .with(LAST_TIME_SENSOR, "2025-06-15T07:45:00+00:00");
    let (mut service, mut sink) = started(entry, &reader);

    let first = service.last_measurement().unwrap();
    assert_eq!(first.to_rfc3339(), "2025-06-15T07:45:00+00:00");
    assert_eq!(service.last_metrics().unwrap().status, HealthStatus::Ok);
    assert_eq!(
        service.monitored_sensors().collect::<Vec<_>>(),
        [WEIGHT_SENSOR, LAST_TIME_SENSOR]
    );

    reader.set(LAST_TIME_SENSOR, "this morning");
    let m = service.refresh(&reader, &clock(), &mut sink);
    assert_eq!(m.issue, Some(Issue::LastTimeInvalidFormat));
    assert_eq!(m.last_measurement_time, Some(first));

    reader.remove(LAST_TIME_SENSOR);
    reader.set(WEIGHT_SENSOR, "0");
    let m = service.refresh(&reader, &clock(), &mut sink);
    // The timestamp issue replaces the weight issue.
    assert_eq!(m.issue, Some(Issue::LastTimeUnavailable));
    assert_eq!(service.last_measurement(), Some(first));
}

// ── Commands ─────────────────────────────────────────────────

#[test]
fn update_options_rebuilds_profile_and_refreshes() {
    let reader = MockReader::new().with(WEIGHT_SENSOR, "4.0");
    let (mut service, mut sink) = started(cat_entry(), &reader);

    let mut options = cat_entry().options;
    options.morphology = Some("9_very_obese".into());
    service
        .handle_command(ScaleCommand::UpdateOptions(options), &reader, &clock(), &mut sink)
        .unwrap();

    let m = service.last_metrics().unwrap();
    assert_eq!(m.ideal_weight, Some(2.8));
    // 0.8 × 100 × 2.8^0.667
    assert_eq!(m.energy_need, Some(159));
    assert_eq!(sink.last_metrics(), Some(m));
}

#[test]
fn rejected_options_keep_current_setup() {
    let reader = MockReader::new().with(WEIGHT_SENSOR, "4.0");
    let (mut service, mut sink) = started(cat_entry(), &reader);

    let options = PetConfig {
        morphology: Some("1_very_thin".into()),
        ..PetConfig::default()
    };
    let result =
        service.handle_command(ScaleCommand::UpdateOptions(options), &reader, &clock(), &mut sink);
    assert!(result.is_err());
    assert_eq!(service.config().morphology.as_deref(), Some("5_ideal"));
    assert_eq!(service.last_metrics().unwrap().energy_need, Some(252));
}

#[test]
fn refresh_command_recomputes() {
    let mut reader = MockReader::new().with(WEIGHT_SENSOR, "4.0");
    let (mut service, mut sink) = started(cat_entry(), &reader);
    assert_eq!(service.refresh_count(), 1);

    reader.set(WEIGHT_SENSOR, "5.0");
    service
        .handle_command(ScaleCommand::Refresh, &reader, &clock(), &mut sink)
        .unwrap();
    assert_eq!(service.refresh_count(), 2);
    assert_eq!(service.last_metrics().unwrap().weight, Some(5.0));
}

#[test]
fn identical_inputs_give_identical_metrics() {
    let reader = MockReader::new().with(WEIGHT_SENSOR, "6.37");
    let (mut service, mut sink) = started(dog_entry(), &reader);
    let first = service.last_metrics().cloned().unwrap();
    let second = service.refresh(&reader, &clock(), &mut sink).clone();
    assert_eq!(first, second);
}
