//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter    | Implements   | Connects to              |
//! |------------|--------------|--------------------------|
//! | `log_sink` | MetricsSink  | `log` facade             |
//! | `time`     | ClockPort    | System clock / fixed day |

pub mod log_sink;
pub mod time;
