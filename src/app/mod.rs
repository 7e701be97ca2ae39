//! Application core: wires the calculators to the host.
//!
//! The service reads sensor states, recomputes life stage, ideal weight,
//! energy need and status, and emits the results.  All interaction with
//! the host happens through **port traits** defined in [`ports`], keeping
//! this layer testable without a real host.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
