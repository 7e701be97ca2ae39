//! Inbound commands to the service.
//!
//! These represent actions requested by the host that the
//! [`PetScaleService`](super::service::PetScaleService) interprets and
//! acts upon.

use crate::config::PetConfig;

/// Commands the host can send into the service.
#[derive(Debug, Clone)]
pub enum ScaleCommand {
    /// A monitored sensor changed: recompute every metric.
    Refresh,

    /// Replace the options layer of the config entry.  The profile is
    /// rebuilt from scratch and the metrics refreshed.
    UpdateOptions(PetConfig),
}
