//! Integration tests for config entries loaded from host JSON.

use petscale::app::service::PetScaleService;
use petscale::config::{ConfigEntry, ConfigKey};
use petscale::profile::{AttributeProfile, SpeciesTraits, Temperament};

use crate::mock_ports::{MockReader, RecordingSink, clock};

const HOST_ENTRY: &str = r#"{
    "data": {
        "name": "Mia",
        "animal_type": "cat",
        "breed": "siamese",
        "birthday": "2024-12-01",
        "reproductive": "spayed",
        "activity": "active_sporty",
        "temperament": "active",
        "living_environment": "indoors",
        "morphology": "5_ideal",
        "weight": "sensor.old_scale"
    },
    "options": {
        "weight": "sensor.mia_weight",
        "morphology": "",
        "living_environment": "outdoors_winter"
    }
}"#;

#[test]
fn options_layer_wins_unless_empty() {
    let entry = ConfigEntry::from_json(HOST_ENTRY).unwrap();
    assert_eq!(entry.option(ConfigKey::WeightSensor), Some("sensor.mia_weight"));
    assert_eq!(entry.option(ConfigKey::Morphology), Some("5_ideal"));
    assert_eq!(entry.option(ConfigKey::LivingEnvironment), Some("outdoors_winter"));
}

#[test]
fn merged_entry_builds_typed_profile() {
    let entry = ConfigEntry::from_json(HOST_ENTRY).unwrap();
    let profile = AttributeProfile::from_config(&entry.merged()).unwrap();
    assert_eq!(
        profile.traits,
        SpeciesTraits::Cat {
            temperament: Temperament::Active
        }
    );
    assert_eq!(profile.breed.as_str(), "siamese");
}

#[test]
fn service_reads_the_option_sensor() {
    let mut service = PetScaleService::setup_from_json(HOST_ENTRY).unwrap();
    let reader = MockReader::new()
        .with("sensor.old_scale", "99")
        .with("sensor.mia_weight", "3.1");
    let mut sink = RecordingSink::new();
    service.start(&reader, &clock(), &mut sink);

    let m = service.last_metrics().unwrap();
    assert_eq!(m.weight, Some(3.1));
    // Born 2024-12-01, weighed 2025-06-15: six whole months.
    assert_eq!(m.life_stage.map(|s| s.as_str()), Some("kitten_6_8"));
    assert!(m.energy_need.is_some());
}

#[test]
fn metrics_serialize_for_the_host() {
    let mut service = PetScaleService::setup_from_json(HOST_ENTRY).unwrap();
    let reader = MockReader::new().with("sensor.mia_weight", "unknown");
    let mut sink = RecordingSink::new();
    let json = service.refresh(&reader, &clock(), &mut sink).to_json().unwrap();

    assert!(json.contains(r#""status":"problem""#));
    assert!(json.contains(r#""issue":"weight_unavailable""#));
    assert!(json.contains(r#""animal_type":"cat""#));
    assert!(json.contains(r#""ideal_weight":null"#));
    assert!(!json.contains("last_measurement_time"));
}
