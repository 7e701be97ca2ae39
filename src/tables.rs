//! Static factor tables.
//!
//! Every categorical attribute maps to a dimensionless multiplier applied
//! to the base energy.  The typed lookups below are exhaustive `match`es
//! over the attribute enums; [`factor`] is the string-keyed entry point for
//! hosts that still hold raw config keys, and it reports a miss as
//! [`CalcError::UnknownKey`] rather than falling back to a neutral 1.0.

use crate::error::{CalcError, Result};
use crate::profile::{
    Activity, Appetite, BodyCondition, Breed, Environment, LifeStage, Reproductive, Species,
    Temperament,
};

// ---------------------------------------------------------------------------
// Breed
// ---------------------------------------------------------------------------

/// Breed key → factor.  Dog and cat breeds share one table.
pub const BREED_FACTORS: &[(&str, f64)] = &[
    ("abyssinian", 1.2),
    ("afghan_hound", 1.2),
    ("affenpinscher", 1.0),
    ("akita_inu", 1.0),
    ("alaskan_malamute", 0.8),
    ("american_akita", 1.0),
    ("american_bobtail", 1.0),
    ("american_bulldog", 1.0),
    ("american_cocker_spaniel", 0.9),
    ("american_curl", 1.0),
    ("american_shepherd", 1.0),
    ("american_shorthair", 1.0),
    ("american_staffordshire_terrier", 1.0),
    ("anatolian_shepherd_dog", 0.9),
    ("ardennes_cattle_dog", 1.0),
    ("ariegeois", 1.0),
    ("australian_cattle_dog", 1.0),
    ("australian_kelpie", 1.0),
    ("australian_shepherd", 1.0),
    ("american_wirehair", 1.0),
    ("azawakh", 1.2),
    ("balinese", 1.0),
    ("basset_artesien_normand", 1.0),
    ("basset_fauve_de_bretagne", 1.0),
    ("basset_hound", 0.9),
    ("bavarian_mountain_hound", 1.0),
    ("beagle", 0.9),
    ("beagle_harrier", 1.0),
    ("bearded_collie", 1.0),
    ("beauceron", 1.0),
    ("bedlington_terrier", 1.0),
    ("belgian_shepherd_gronendael", 1.0),
    ("belgian_shepherd_laekenois", 1.0),
    ("belgian_shepherd_malinois", 1.0),
    ("belgian_shepherd_tervuren", 1.0),
    ("bengal", 1.1),
    ("bernese_mountain_dog", 0.9),
    ("bichon_frise", 1.0),
    ("birman", 1.0),
    ("blue_gascony_basset", 1.0),
    ("bolognese", 1.0),
    ("bombay", 1.0),
    ("border_collie", 1.0),
    ("border_terrier", 1.0),
    ("borzoi", 1.2),
    ("boston_terrier", 1.0),
    ("bouvier_des_flandres", 1.0),
    ("boxer", 1.1),
    ("briard", 1.0),
    ("british_longhair", 1.0),
    ("british_shorthair", 1.0),
    ("brittany_spaniel", 1.0),
    ("brussels_griffon", 1.0),
    ("bull_terrier", 1.0),
    ("bullmastiff", 0.9),
    ("burmese", 1.0),
    ("cairn_terrier", 0.9),
    ("cane_corso", 1.0),
    ("catalan_sheepdog", 1.0),
    ("cavalier_king_charles_spaniel", 0.9),
    ("chartreux", 1.0),
    ("chihuahua", 1.0),
    ("chinese_crested_dog", 1.0),
    ("chow_chow", 0.9),
    ("cirneco_dell_etna", 1.0),
    ("clumber_spaniel", 1.0),
    ("cocker_spaniel", 0.9),
    ("collie", 0.9),
    ("cornish_rex", 1.0),
    ("coton_de_tulear", 1.0),
    ("curly_coated_retriever", 0.8),
    ("czechoslovakian_wolfdog", 1.0),
    ("dalmatian", 1.0),
    ("dandie_dinmont_terrier", 1.0),
    ("devon_rex", 1.0),
    ("doberman_pinscher", 1.1),
    ("dogo_argentino", 1.0),
    ("dogue_de_bordeaux", 0.9),
    ("domestic_longhair", 1.0),
    ("domestic_mediumhair", 1.0),
    ("domestic_shorthair", 1.0),
    ("dutch_shepherd", 1.0),
    ("east_siberian_laika", 0.8),
    ("egyptian_mau", 1.0),
    ("english_bulldog", 0.9),
    ("english_cocker_spaniel", 0.9),
    ("entlebucher_mountain_dog", 1.0),
    ("eurasier", 1.0),
    ("exotic_shorthair", 1.0),
    ("finnish_lapphund", 0.8),
    ("flat_coated_retriever", 0.8),
    ("fox_terrier", 1.0),
    ("french_bulldog", 1.0),
    ("french_pointer", 1.0),
    ("german_shepherd", 1.0),
    ("german_pointer", 1.0),
    ("golden_retriever", 0.8),
    ("great_dane", 1.2),
    ("great_pyrenees", 0.9),
    ("greater_swiss_mountain_dog", 1.0),
    ("greenland_dog", 0.8),
    ("greyhound", 1.2),
    ("griffon_fauve_de_bourgogne", 1.0),
    ("havana_brown", 1.0),
    ("highland_fold", 1.0),
    ("icelandic_sheepdog", 0.8),
    ("irish_wolfhound", 1.2),
    ("italian_greyhound", 1.2),
    ("jack_russell_terrier", 1.0),
    ("japanese_bobtail", 1.0),
    ("japanese_chin", 1.0),
    ("javanese", 1.0),
    ("kai_ken", 1.0),
    ("karelian_bear_dog", 0.8),
    ("king_charles_spaniel", 1.0),
    ("komondor", 0.9),
    ("korat", 1.0),
    ("lagotto_romagnolo", 1.0),
    ("landseer", 0.9),
    ("lapphund_swedish", 0.8),
    ("leonberger", 0.9),
    ("lhasa_apso", 1.0),
    ("lowchen", 1.0),
    ("magyar_agar", 1.2),
    ("maine_coon", 1.0),
    ("maltese", 1.0),
    ("manchester_terrier", 1.0),
    ("mandarin", 1.0),
    ("manx", 1.0),
    ("mastiff", 0.9),
    ("miniature_pinscher", 1.0),
    ("miniature_poodle", 1.0),
    ("mixed_breed_or_other_breed", 1.0),
    ("munchkin", 1.0),
    ("neapolitan_mastiff", 0.9),
    ("norwegian_buhund", 0.8),
    ("norwegian_elkhound", 0.8),
    ("norwegian_forest", 1.0),
    ("norwegian_lundehund", 0.8),
    ("old_english_sheepdog", 1.0),
    ("oriental_shorthair", 1.1),
    ("papillon", 1.0),
    ("parson_russell_terrier", 1.0),
    ("pekingese", 1.0),
    ("persian", 1.0),
    ("pixie_bob", 1.0),
    ("pointer", 1.0),
    ("polish_greyhound", 1.2),
    ("porcelaine", 1.0),
    ("portuguese_water_dog", 1.0),
    ("prague_ratter", 1.0),
    ("pug", 0.9),
    ("pyrenean_shepherd", 1.0),
    ("ragdoll", 1.0),
    ("rhodesian_ridgeback", 1.0),
    ("rottweiler", 0.9),
    ("russian_blue", 1.0),
    ("russian_european_laika", 0.8),
    ("saarloos_wolfdog", 1.0),
    ("sacred_birman", 1.0),
    ("saint_bernard", 0.9),
    ("saluki", 1.2),
    ("samoyed", 0.8),
    ("savannah", 1.1),
    ("scottish_deerhound", 1.2),
    ("scottish_fold", 1.0),
    ("shetland_sheepdog", 0.9),
    ("shiba_inu", 1.0),
    ("shih_tzu", 1.0),
    ("siamese", 1.0),
    ("siberian", 1.0),
    ("siberian_husky", 0.9),
    ("snowshoe", 1.0),
    ("somali", 1.0),
    ("spanish_greyhound", 1.2),
    ("spanish_mastiff", 0.9),
    ("spanish_water_dog", 1.0),
    ("sphynx", 1.2),
    ("standard_pinscher", 1.0),
    ("standard_poodle", 1.0),
    ("swedish_elkhound", 0.8),
    ("thai", 1.0),
    ("tibetan_mastiff", 0.9),
    ("tibetan_spaniel", 1.0),
    ("tonkinese", 1.0),
    ("toy_poodle", 1.0),
    ("turkish_angora", 1.0),
    ("turkish_van", 1.0),
    ("vizsla", 1.0),
    ("weimaraner", 1.1),
    ("west_siberian_laika", 0.8),
    ("white_swiss_shepherd", 1.0),
    ("wirehaired_pointing_griffon", 1.0),
];

// ---------------------------------------------------------------------------
// Attribute factors
// ---------------------------------------------------------------------------

pub const fn activity_factor(activity: Activity) -> f64 {
    match activity {
        Activity::VeryCalm => 0.8,
        Activity::Calm | Activity::NoOutdoorAccess => 0.9,
        Activity::Normal | Activity::LimitedOutdoorAccess => 1.0,
        Activity::ActiveSporty | Activity::OutdoorAccess => 1.1,
        Activity::HyperactiveVerySporty => 1.2,
        Activity::Convalescent => 0.7,
    }
}

pub const fn appetite_factor(appetite: Appetite) -> f64 {
    match appetite {
        Appetite::SmallEater | Appetite::Normal | Appetite::HeartyEater => 1.0,
    }
}

pub const fn temperament_factor(temperament: Temperament) -> f64 {
    match temperament {
        Temperament::VeryCalm => 0.8,
        Temperament::Calm => 0.9,
        Temperament::Normal => 1.0,
        Temperament::Active | Temperament::SlightlyStressed | Temperament::Stressed => 1.1,
        Temperament::HighlyStressed => 1.2,
    }
}

pub const fn reproductive_factor(reproductive: Reproductive) -> f64 {
    match reproductive {
        Reproductive::Intact => 1.0,
        Reproductive::Neutered | Reproductive::Spayed => 0.8,
    }
}

pub const fn environment_factor(environment: Environment) -> f64 {
    match environment {
        Environment::Indoors | Environment::OutdoorsSummer20 => 1.0,
        Environment::OutdoorsSummer => 1.05,
        Environment::OutdoorsSummer30 => 1.2,
        Environment::OutdoorsWinter => 1.18,
        Environment::OutdoorsWinter0 => 1.3,
        Environment::OutdoorsWinter10 => 1.1,
    }
}

/// Energy factor for the body condition ("morphology").
pub const fn body_condition_factor(condition: BodyCondition) -> f64 {
    match condition {
        BodyCondition::VeryThin => 1.2,
        BodyCondition::Underweight | BodyCondition::SlightlyUnderweight => 1.1,
        BodyCondition::Ideal4 | BodyCondition::Ideal5 => 1.0,
        BodyCondition::SlightlyOverweight | BodyCondition::Overweight => 0.9,
        BodyCondition::Obese | BodyCondition::VeryObese => 0.8,
    }
}

/// Life-stage factor from the species' own table.  A puppy key looked up
/// for a cat (or a kitten key for a dog) is a miss.
pub fn life_stage_factor(species: Species, stage: LifeStage) -> Result<f64> {
    let factor = match species {
        Species::Cat => cat_life_stage_factor(stage),
        Species::Dog => dog_life_stage_factor(stage),
    };
    factor.ok_or_else(|| {
        let table = match species {
            Species::Cat => "cat life stage",
            Species::Dog => "dog life stage",
        };
        CalcError::unknown_key(table, stage.as_str())
    })
}

const fn cat_life_stage_factor(stage: LifeStage) -> Option<f64> {
    match stage {
        LifeStage::Kitten2To4 => Some(1.9),
        LifeStage::Kitten4To6 => Some(1.6),
        LifeStage::Kitten6To8 => Some(1.3),
        LifeStage::YoungAdult8To12 => Some(1.1),
        LifeStage::Adult | LifeStage::Senior => Some(1.0),
        _ => None,
    }
}

const fn dog_life_stage_factor(stage: LifeStage) -> Option<f64> {
    match stage {
        LifeStage::PuppyLow3To4
        | LifeStage::Puppy20From3To5
        | LifeStage::Puppy35From3To6
        | LifeStage::Puppy50From3To5 => Some(1.6),
        LifeStage::PuppyHigh3To6 => Some(1.7),
        LifeStage::Puppy35From7To8
        | LifeStage::Puppy50From6To7
        | LifeStage::PuppyHigh7To8 => Some(1.4),
        LifeStage::PuppyLow5To7 | LifeStage::Puppy20From6To9 => Some(1.3),
        LifeStage::Puppy35From9To10
        | LifeStage::Puppy50From8To13
        | LifeStage::PuppyHigh9To13 => Some(1.2),
        LifeStage::PuppyLow8To10
        | LifeStage::Puppy20From10To12
        | LifeStage::Puppy35From11To15
        | LifeStage::Puppy50From14To18
        | LifeStage::PuppyHigh14To21 => Some(1.1),
        LifeStage::Adult | LifeStage::Senior => Some(1.0),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Ideal-weight percentages
// ---------------------------------------------------------------------------

/// Scale applied to the current weight.  Thin animals scale up, overweight
/// animals scale down, 5 is neutral.
pub const fn ideal_weight_scale(condition: BodyCondition, species: Species) -> f64 {
    let (dog, cat) = match condition {
        BodyCondition::VeryThin => (1.4, 1.3),
        BodyCondition::Underweight => (1.3, 1.225),
        BodyCondition::SlightlyUnderweight => (1.2, 1.15),
        BodyCondition::Ideal4 => (1.1, 1.075),
        BodyCondition::Ideal5 => (1.0, 1.0),
        BodyCondition::SlightlyOverweight => (0.9, 0.925),
        BodyCondition::Overweight => (0.8, 0.85),
        BodyCondition::Obese => (0.7, 0.775),
        BodyCondition::VeryObese => (0.6, 0.7),
    };
    match species {
        Species::Dog => dog,
        Species::Cat => cat,
    }
}

/// Scale for a raw `index` (1–9) and species, `None` outside 1–9.
pub fn ideal_weight_percentage(index: u8, species: Species) -> Option<f64> {
    BodyCondition::from_index(index).map(|condition| ideal_weight_scale(condition, species))
}

// ---------------------------------------------------------------------------
// Life-stage brackets
// ---------------------------------------------------------------------------

/// Cats and dogs at or beyond these ages (months) are senior.
pub const CAT_SENIOR_MONTHS: u32 = 84;
pub const DOG_SENIOR_MONTHS: u32 = 96;

/// One row of the dog puppy-stage table.
///
/// The weight band is half-open `[min, max)`; the age band is inclusive on
/// both ends.  Rows within one weight band never overlap.
#[derive(Debug, Clone, Copy)]
pub struct PuppyStage {
    pub min_kg: f64,
    pub max_kg: f64,
    pub min_months: u32,
    pub max_months: u32,
    pub stage: LifeStage,
}

impl PuppyStage {
    const fn new(
        (min_kg, max_kg): (f64, f64),
        (min_months, max_months): (u32, u32),
        stage: LifeStage,
    ) -> Self {
        Self {
            min_kg,
            max_kg,
            min_months,
            max_months,
            stage,
        }
    }

    pub fn matches(&self, weight_kg: f64, age_months: u32) -> bool {
        (self.min_kg..self.max_kg).contains(&weight_kg)
            && (self.min_months..=self.max_months).contains(&age_months)
    }
}

/// Dog puppy stages by current weight band and age in months.
pub const PUPPY_STAGES: [PuppyStage; 18] = [
    PuppyStage::new((0.0, 10.0), (3, 4), LifeStage::PuppyLow3To4),
    PuppyStage::new((0.0, 10.0), (5, 7), LifeStage::PuppyLow5To7),
    PuppyStage::new((0.0, 10.0), (8, 10), LifeStage::PuppyLow8To10),
    PuppyStage::new((10.0, 21.0), (3, 5), LifeStage::Puppy20From3To5),
    PuppyStage::new((10.0, 21.0), (6, 9), LifeStage::Puppy20From6To9),
    PuppyStage::new((10.0, 21.0), (10, 12), LifeStage::Puppy20From10To12),
    PuppyStage::new((21.0, 36.0), (3, 6), LifeStage::Puppy35From3To6),
    PuppyStage::new((21.0, 36.0), (7, 8), LifeStage::Puppy35From7To8),
    PuppyStage::new((21.0, 36.0), (9, 10), LifeStage::Puppy35From9To10),
    PuppyStage::new((21.0, 36.0), (11, 15), LifeStage::Puppy35From11To15),
    PuppyStage::new((36.0, 51.0), (3, 5), LifeStage::Puppy50From3To5),
    PuppyStage::new((36.0, 51.0), (6, 7), LifeStage::Puppy50From6To7),
    PuppyStage::new((36.0, 51.0), (8, 13), LifeStage::Puppy50From8To13),
    PuppyStage::new((36.0, 51.0), (14, 18), LifeStage::Puppy50From14To18),
    PuppyStage::new((51.0, f64::INFINITY), (3, 6), LifeStage::PuppyHigh3To6),
    PuppyStage::new((51.0, f64::INFINITY), (7, 8), LifeStage::PuppyHigh7To8),
    PuppyStage::new((51.0, f64::INFINITY), (9, 13), LifeStage::PuppyHigh9To13),
    PuppyStage::new((51.0, f64::INFINITY), (14, 21), LifeStage::PuppyHigh14To21),
];

// ---------------------------------------------------------------------------
// String-keyed lookup
// ---------------------------------------------------------------------------

/// Which factor table a lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorKind {
    Breed,
    LifeStage(Species),
    Activity,
    Reproductive,
    BodyCondition,
    Environment,
    Appetite,
    Temperament,
}

impl FactorKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breed => "breed",
            Self::LifeStage(_) => "life stage",
            Self::Activity => "activity",
            Self::Reproductive => "reproductive",
            Self::BodyCondition => "morphology",
            Self::Environment => "living environment",
            Self::Appetite => "appetite",
            Self::Temperament => "temperament",
        }
    }
}

/// Look up the factor for a raw key.  An unregistered key is a miss, never
/// a default.
pub fn factor(kind: FactorKind, key: &str) -> Result<f64> {
    Ok(match kind {
        FactorKind::Breed => key.parse::<Breed>()?.factor(),
        FactorKind::LifeStage(species) => life_stage_factor(species, key.parse()?)?,
        FactorKind::Activity => activity_factor(key.parse()?),
        FactorKind::Reproductive => reproductive_factor(key.parse()?),
        FactorKind::BodyCondition => body_condition_factor(key.parse()?),
        FactorKind::Environment => environment_factor(key.parse()?),
        FactorKind::Appetite => appetite_factor(key.parse()?),
        FactorKind::Temperament => temperament_factor(key.parse()?),
    })
}
