//! Integration test driver for the `tests/integration/` submodules.
//!
//! Each `mod` below maps to a file that drives the service against mock
//! ports.  No real host is required.

mod config_tests;
mod mock_ports;
mod service_tests;
