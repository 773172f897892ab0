//! Marine sensor network simulator.
//!
//! Places a small field of seeded sensor nodes, optionally clusters them,
//! builds a nearest-neighbor collection route to a surface base station, and
//! costs each node's link under RF, cabled or acoustic transport.

pub mod common;
pub mod report;
pub mod simulation;

pub use simulation::{ConfigurationError, Configuration, ResultBundle, TransportType, run_simulation};
