//! Closed categorical attributes chosen once at setup.
//!
//! Each attribute is an enum keyed by the same string the host stores in
//! its config entry.  Parsing an unregistered key fails with
//! [`CalcError::UnknownKey`], so a factor lookup over a parsed value can
//! never miss.  The factor values themselves live in [`crate::tables`].

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CalcError;
use crate::tables::BREED_FACTORS;

/// Declares a string-keyed attribute enum with `as_str`, `FromStr`,
/// `Display` and serde support under the same keys.
macro_rules! keyed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident in $table:literal {
            $( $variant:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( #[serde(rename = $key)] $variant, )+
        }

        impl $name {
            /// Every value, in table order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];
            /// Name of the factor table this attribute indexes.
            pub const TABLE: &'static str = $table;

            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $key, )+
                }
            }
        }

        impl FromStr for $name {
            type Err = CalcError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $key => Ok(Self::$variant), )+
                    other => Err(CalcError::unknown_key($table, other)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

keyed_enum! {
    /// Day-to-day activity level.
    pub enum Activity in "activity" {
        VeryCalm => "very_calm",
        Calm => "calm",
        Normal => "normal",
        ActiveSporty => "active_sporty",
        HyperactiveVerySporty => "hyperactive_very_sporty",
        Convalescent => "convalescent",
        NoOutdoorAccess => "no_outdoor_access",
        LimitedOutdoorAccess => "limited_outdoor_access",
        OutdoorAccess => "outdoor_access",
    }
}

keyed_enum! {
    /// Appetite (dogs only).
    pub enum Appetite in "appetite" {
        SmallEater => "small_eater",
        Normal => "normal",
        HeartyEater => "hearty_eater",
    }
}

keyed_enum! {
    /// Temperament (cats only).
    pub enum Temperament in "temperament" {
        VeryCalm => "very_calm",
        Calm => "calm",
        Normal => "normal",
        Active => "active",
        SlightlyStressed => "slightly_stressed",
        Stressed => "stressed",
        HighlyStressed => "highly_stressed",
    }
}

keyed_enum! {
    pub enum Reproductive in "reproductive" {
        Intact => "intact",
        Neutered => "neutered",
        Spayed => "spayed",
    }
}

keyed_enum! {
    /// Where the animal lives, with outdoor temperature bands.
    pub enum Environment in "living environment" {
        Indoors => "indoors",
        OutdoorsSummer => "outdoors_summer",
        OutdoorsSummer20 => "outdoors_summer_20",
        OutdoorsSummer30 => "outdoors_summer_30",
        OutdoorsWinter => "outdoors_winter",
        OutdoorsWinter0 => "outdoors_winter_0",
        OutdoorsWinter10 => "outdoors_winter_10",
    }
}

keyed_enum! {
    /// Nine-point body-condition score, labelled `<index>_<descriptor>`.
    pub enum BodyCondition in "morphology" {
        VeryThin => "1_very_thin",
        Underweight => "2_underweight",
        SlightlyUnderweight => "3_slightly_underweight",
        Ideal4 => "4_ideal",
        Ideal5 => "5_ideal",
        SlightlyOverweight => "6_slightly_overweight",
        Overweight => "7_overweight",
        Obese => "8_obese",
        VeryObese => "9_very_obese",
    }
}

keyed_enum! {
    /// Growth/age bucket.  Kitten and puppy keys are species-scoped; `adult`
    /// and `senior` are shared.
    pub enum LifeStage in "life stage" {
        Kitten2To4 => "kitten_2_4",
        Kitten4To6 => "kitten_4_6",
        Kitten6To8 => "kitten_6_8",
        YoungAdult8To12 => "young_adult_8_12",
        PuppyLow3To4 => "puppy_low_3_4",
        PuppyLow5To7 => "puppy_low_5_7",
        PuppyLow8To10 => "puppy_low_8_10",
        Puppy20From3To5 => "puppy_20_3_5",
        Puppy20From6To9 => "puppy_20_6_9",
        Puppy20From10To12 => "puppy_20_10_12",
        Puppy35From3To6 => "puppy_35_3_6",
        Puppy35From7To8 => "puppy_35_7_8",
        Puppy35From9To10 => "puppy_35_9_10",
        Puppy35From11To15 => "puppy_35_11_15",
        Puppy50From3To5 => "puppy_50_3_5",
        Puppy50From6To7 => "puppy_50_6_7",
        Puppy50From8To13 => "puppy_50_8_13",
        Puppy50From14To18 => "puppy_50_14_18",
        PuppyHigh3To6 => "puppy_high_3_6",
        PuppyHigh7To8 => "puppy_high_7_8",
        PuppyHigh9To13 => "puppy_high_9_13",
        PuppyHigh14To21 => "puppy_high_14_21",
        Adult => "adult",
        Senior => "senior",
    }
}

impl BodyCondition {
    /// The 1–9 body-condition index.
    pub const fn index(self) -> u8 {
        match self {
            Self::VeryThin => 1,
            Self::Underweight => 2,
            Self::SlightlyUnderweight => 3,
            Self::Ideal4 => 4,
            Self::Ideal5 => 5,
            Self::SlightlyOverweight => 6,
            Self::Overweight => 7,
            Self::Obese => 8,
            Self::VeryObese => 9,
        }
    }

    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::VeryThin),
            2 => Some(Self::Underweight),
            3 => Some(Self::SlightlyUnderweight),
            4 => Some(Self::Ideal4),
            5 => Some(Self::Ideal5),
            6 => Some(Self::SlightlyOverweight),
            7 => Some(Self::Overweight),
            8 => Some(Self::Obese),
            9 => Some(Self::VeryObese),
            _ => None,
        }
    }
}

/// Extract the leading body-condition index from a `<index>_<descriptor>`
/// label.  Only the token before the first `_` is read, so `"5"` and
/// `"5_anything"` both yield 5.  The index is not range-checked here.
pub fn parse_body_condition_index(label: &str) -> Result<u8, CalcError> {
    if label.is_empty() {
        return Err(CalcError::missing("morphology"));
    }
    let head = label.split('_').next().unwrap_or_default();
    head.parse::<u8>()
        .map_err(|_| CalcError::unparsable("morphology", label))
}

// ---------------------------------------------------------------------------
// Breed
// ---------------------------------------------------------------------------

/// A breed registered in the breed factor table.
///
/// Holds a position into [`BREED_FACTORS`]; the only way to build one is to
/// parse a registered key, so the lookup is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Breed(usize);

impl Breed {
    pub const TABLE: &'static str = "breed";

    pub fn as_str(self) -> &'static str {
        BREED_FACTORS[self.0].0
    }

    pub fn factor(self) -> f64 {
        BREED_FACTORS[self.0].1
    }

    /// Iterate every registered breed.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BREED_FACTORS.len()).map(Self)
    }
}

impl FromStr for Breed {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BREED_FACTORS
            .iter()
            .position(|(key, _)| *key == s)
            .map(Self)
            .ok_or_else(|| CalcError::unknown_key(Self::TABLE, s))
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Breed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Breed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}
