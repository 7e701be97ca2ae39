//! Port traits: the boundary between the calculators and the host.
//!
//! ```text
//!   Host ──▶ ReadingPort / ClockPort ──▶ PetScaleService ──▶ MetricsSink
//! ```
//!
//! The [`PetScaleService`](super::service::PetScaleService) takes these
//! as generic arguments at each call site, so the calculators never reach
//! into host state directly.

use chrono::NaiveDate;

use super::events::ScaleEvent;

// ───────────────────────────────────────────────────────────────
// Reading port (host → domain)
// ───────────────────────────────────────────────────────────────

/// Yields the current state of a host sensor.
pub trait ReadingPort {
    /// Raw state string for `entity_id`, or `None` if the host has no such
    /// sensor.
    fn read_state(&self, entity_id: &str) -> Option<String>;
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Source of "today" for age computation.
pub trait ClockPort {
    fn today(&self) -> NaiveDate;
}

// ───────────────────────────────────────────────────────────────
// Metrics sink (domain → host presentation)
// ───────────────────────────────────────────────────────────────

/// The service emits every [`ScaleEvent`] through this port.  Adapters
/// decide how results are presented.
pub trait MetricsSink {
    fn emit(&mut self, event: &ScaleEvent);
}
