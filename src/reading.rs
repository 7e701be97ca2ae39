//! Host state parsing.
//!
//! The host reports every sensor as a string state.  These helpers turn
//! the weight and last-measurement states into typed readings; nothing
//! here fails, a bad state simply becomes an unavailable reading.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use log::debug;

/// States the host uses when a sensor has no value.
const ABSENT_STATES: [&str; 3] = ["", "unknown", "unavailable"];

fn is_absent(state: &str) -> bool {
    ABSENT_STATES.contains(&state)
}

// ---------------------------------------------------------------------------
// Weight
// ---------------------------------------------------------------------------

/// Current weight reading in kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightReading {
    Kg(f64),
    Unavailable,
}

impl WeightReading {
    /// Parse a host weight state.  Non-numeric, non-finite and negative
    /// values are unavailable.
    pub fn from_state(state: &str) -> Self {
        let state = state.trim();
        if is_absent(state) {
            return Self::Unavailable;
        }
        match state.parse::<f64>() {
            Ok(kg) if kg.is_finite() && kg >= 0.0 => Self::Kg(kg),
            _ => {
                debug!("weight state {state:?} is not a usable reading");
                Self::Unavailable
            }
        }
    }

    pub fn from_optional_state(state: Option<&str>) -> Self {
        state.map_or(Self::Unavailable, Self::from_state)
    }

    pub const fn kg(self) -> Option<f64> {
        match self {
            Self::Kg(kg) => Some(kg),
            Self::Unavailable => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Last measurement time
// ---------------------------------------------------------------------------

/// Timestamp of the last weighing, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LastMeasurement {
    At(DateTime<FixedOffset>),
    /// The sensor reported text that is not a timestamp.
    InvalidFormat(String),
    Unavailable,
}

impl LastMeasurement {
    /// Parse a host timestamp state.
    ///
    /// Accepts RFC 3339 and `YYYY-MM-DD HH:MM:SS` with an optional
    /// `+HH:MM` offset.  A timestamp without an offset is taken as UTC.
    pub fn from_state(state: &str) -> Self {
        let state = state.trim();
        if is_absent(state) {
            return Self::Unavailable;
        }
        if let Ok(at) = DateTime::parse_from_rfc3339(state) {
            return Self::At(at);
        }
        if let Ok(at) = DateTime::parse_from_str(state, "%Y-%m-%d %H:%M:%S%:z") {
            return Self::At(at);
        }
        for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(state, fmt) {
                return Self::At(naive.and_utc().fixed_offset());
            }
        }
        Self::InvalidFormat(state.to_owned())
    }

    pub fn from_optional_state(state: Option<&str>) -> Self {
        state.map_or(Self::Unavailable, Self::from_state)
    }

    pub const fn at(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Self::At(at) => Some(at),
            _ => None,
        }
    }
}
