//! The two supported species.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    pub const ALL: &'static [Self] = &[Self::Dog, Self::Cat];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
        }
    }
}

impl FromStr for Species {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dog" => Ok(Self::Dog),
            "cat" => Ok(Self::Cat),
            other => Err(CalcError::InvalidSpecies(other.to_owned())),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
