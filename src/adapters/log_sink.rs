//! Log-based metrics sink adapter.
//!
//! Implements [`MetricsSink`] by writing each event as one structured line
//! through the `log` facade.  A host that renders sensors would implement
//! the same trait.

use log::info;

use crate::app::events::ScaleEvent;
use crate::app::ports::MetricsSink;

/// Placeholder for an unknown value in log lines.
const UNKNOWN: &str = "unknown";

fn or_unknown<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| UNKNOWN.to_owned(), |v| v.to_string())
}

/// Adapter that logs every [`ScaleEvent`].
#[derive(Debug, Default)]
pub struct LogMetricsSink;

impl LogMetricsSink {
    pub fn new() -> Self {
        Self
    }
}

impl MetricsSink for LogMetricsSink {
    fn emit(&mut self, event: &ScaleEvent) {
        match event {
            ScaleEvent::MetricsUpdated(m) => {
                info!(
                    "METRICS | {} | weight={}kg ideal={}kg | body={} | stage={} | \
                     energy={}kcal | status={} issue={} | last={}",
                    m.name.as_deref().unwrap_or("-"),
                    or_unknown(m.weight),
                    or_unknown(m.ideal_weight),
                    m.body_type.as_deref().unwrap_or(UNKNOWN),
                    or_unknown(m.life_stage),
                    or_unknown(m.energy_need),
                    m.status,
                    m.issue.map_or("none", |i| i.as_str()),
                    or_unknown(m.last_measurement_time.map(|t| t.to_rfc3339())),
                );
            }
            ScaleEvent::StatusChanged { from, to } => {
                info!("STATUS | {from} -> {to}");
            }
            ScaleEvent::Started { name, species } => {
                info!(
                    "START | name={} animal_type={}",
                    name.as_deref().unwrap_or("-"),
                    or_unknown(*species),
                );
            }
        }
    }
}
