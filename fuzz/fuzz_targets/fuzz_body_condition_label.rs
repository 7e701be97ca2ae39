//! Fuzz target: body-condition label parsing
//!
//! Feeds arbitrary UTF-8 as the body-condition label and verifies:
//! - No panics in the index parser or the ideal-weight calculator
//! - A parsed index outside 1–9 never yields an ideal weight
//! - Every known label round-trips through its index
//!
//! cargo fuzz run fuzz_body_condition_label

#![no_main]

use libfuzzer_sys::fuzz_target;
use petscale::ideal_weight::ideal_weight;
use petscale::profile::{BodyCondition, parse_body_condition_index};

fuzz_target!(|data: &[u8]| {
    let Ok(label) = core::str::from_utf8(data) else {
        return;
    };

    let index = parse_body_condition_index(label);
    for species in ["dog", "cat"] {
        let ideal = ideal_weight(Some(10.0), label, species);
        match index {
            Ok(i) if (1..=9).contains(&i) => assert!(ideal.is_some()),
            _ => assert!(ideal.is_none()),
        }
    }

    if let Ok(condition) = label.parse::<BodyCondition>() {
        assert_eq!(BodyCondition::from_index(condition.index()), Some(condition));
        assert_eq!(index.ok(), Some(condition.index()));
    }
});
