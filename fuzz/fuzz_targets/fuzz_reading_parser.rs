//! Fuzz target: host state parsers
//!
//! Drives arbitrary sensor states through the weight and timestamp parsers
//! and the status classifier, verifying:
//! - No panics for any input
//! - A weight reading is always finite and non-negative
//! - A `problem` status always carries an issue
//!
//! cargo fuzz run fuzz_reading_parser

#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use petscale::life_stage::classify_life_stage;
use petscale::reading::{LastMeasurement, WeightReading};
use petscale::status::{HealthStatus, evaluate};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    // First line is the weight state, the remainder the timestamp state.
    let (weight_state, rest) = text.split_once('\n').unwrap_or((text, ""));

    let weight = WeightReading::from_state(weight_state);
    if let Some(kg) = weight.kg() {
        assert!(kg.is_finite() && kg >= 0.0);
    }

    let last = LastMeasurement::from_state(rest);
    for report in [evaluate(weight, None), evaluate(weight, Some(&last))] {
        assert_eq!(report.status == HealthStatus::Problem, report.issue.is_some());
    }

    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let _ = classify_life_stage("dog", Some(rest), today, weight.kg());
    let _ = classify_life_stage("cat", Some(weight_state), today, None);
});
