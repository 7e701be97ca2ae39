//! Life-stage classifier.
//!
//! Maps a birth date (and, for dogs, the current weight) to a life-stage
//! key.  Ages are calendar-aware whole years/months, never a 30-day
//! approximation.  The stage is recomputed on every evaluation because a
//! growing puppy can move between weight bands from one reading to the next.
//!
//! ## Cats
//!
//! | age (months) | stage              |
//! |--------------|--------------------|
//! | [2, 4)       | `kitten_2_4`       |
//! | [4, 6)       | `kitten_4_6`       |
//! | [6, 8)       | `kitten_6_8`       |
//! | [8, 12)      | `young_adult_8_12` |
//! | [12, 84)     | `adult`            |
//! | [84, ∞)      | `senior`           |
//!
//! ## Dogs
//!
//! 96 months and over is `senior` whatever the weight.  Younger dogs are
//! matched against [`PUPPY_STAGES`]; no match means `adult`.

use chrono::{Datelike, NaiveDate};

use crate::error::{CalcError, Result};
use crate::profile::{LifeStage, Species};
use crate::tables::{CAT_SENIOR_MONTHS, DOG_SENIOR_MONTHS, PUPPY_STAGES};

/// Parse a `YYYY-MM-DD` birth date.
pub fn parse_birth_date(raw: &str) -> Result<NaiveDate> {
    if raw.is_empty() {
        return Err(CalcError::missing("birthday"));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| CalcError::unparsable("birthday", raw))
}

/// Whole years between `birth` and `today`, floored.
pub fn age_in_years(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years
}

/// Whole months between `birth` and `today`, floored: a month only counts
/// once its day-of-month has been reached.
pub fn age_in_months(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut months = (today.year() - birth.year()) * 12 + today.month() as i32 - birth.month() as i32;
    if today.day() < birth.day() {
        months -= 1;
    }
    months
}

/// Cat stage for an age in months.  Kittens younger than two months have
/// no stage.
pub fn classify_cat(age_months: u32) -> Option<LifeStage> {
    Some(match age_months {
        0..2 => return None,
        2..4 => LifeStage::Kitten2To4,
        4..6 => LifeStage::Kitten4To6,
        6..8 => LifeStage::Kitten6To8,
        8..12 => LifeStage::YoungAdult8To12,
        m if m < CAT_SENIOR_MONTHS => LifeStage::Adult,
        _ => LifeStage::Senior,
    })
}

/// Dog stage for an age in months and the current weight.
pub fn classify_dog(age_months: u32, weight_kg: f64) -> LifeStage {
    if age_months >= DOG_SENIOR_MONTHS {
        return LifeStage::Senior;
    }
    PUPPY_STAGES
        .iter()
        .find(|row| row.matches(weight_kg, age_months))
        .map_or(LifeStage::Adult, |row| row.stage)
}

/// Classify with typed inputs.
///
/// A birth date after `today` is unparsable.  A dog below the senior age
/// needs a finite, non-negative weight reading.
pub fn classify(
    species: Species,
    birth: NaiveDate,
    today: NaiveDate,
    weight_kg: Option<f64>,
) -> Result<LifeStage> {
    let months = age_in_months(birth, today);
    let Ok(months) = u32::try_from(months) else {
        return Err(CalcError::unparsable("birthday", birth.to_string()));
    };

    match species {
        Species::Cat => classify_cat(months)
            .ok_or_else(|| CalcError::unknown_key("cat life stage", format!("{months} months"))),
        Species::Dog if months >= DOG_SENIOR_MONTHS => Ok(LifeStage::Senior),
        Species::Dog => {
            let weight = weight_kg.ok_or_else(|| CalcError::missing("weight"))?;
            if !weight.is_finite() || weight < 0.0 {
                return Err(CalcError::unparsable("weight", weight.to_string()));
            }
            Ok(classify_dog(months, weight))
        }
    }
}

/// Classify from raw host values.
pub fn try_classify_life_stage(
    species: &str,
    birth_date: Option<&str>,
    today: NaiveDate,
    weight_kg: Option<f64>,
) -> Result<LifeStage> {
    let species: Species = species.parse()?;
    let birth = parse_birth_date(birth_date.unwrap_or_default())?;
    classify(species, birth, today, weight_kg)
}

/// Host-facing classifier: logs the reason and yields `None` when the stage
/// cannot be determined.
pub fn classify_life_stage(
    species: &str,
    birth_date: Option<&str>,
    today: NaiveDate,
    weight_kg: Option<f64>,
) -> Option<LifeStage> {
    try_classify_life_stage(species, birth_date, today, weight_kg)
        .inspect_err(|e| e.log("life stage"))
        .ok()
}
