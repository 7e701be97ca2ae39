//! PetScale library.
//!
//! Ideal-weight and daily energy-need calculators for dogs and cats, plus
//! the service that wires them to a host's sensors.
//!
//! The three host-facing calculators never fail: any missing, malformed or
//! unknown input is logged and reported as `None`.
//!
//! - [`classify_life_stage`]: birth date (and weight, for dogs) to a
//!   life-stage key.
//! - [`ideal_weight`]: current weight scaled by the body-condition index.
//! - [`energy_need`]: combined attribute factor times the allometric base
//!   energy of the ideal weight.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod energy;
pub mod error;
pub mod ideal_weight;
pub mod life_stage;
pub mod profile;
pub mod reading;
pub mod status;
pub mod tables;

pub use energy::energy_need;
pub use error::{CalcError, Result};
pub use ideal_weight::ideal_weight;
pub use life_stage::classify_life_stage;
