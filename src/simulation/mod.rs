//! Sensor network simulation core.
//!
//! One run turns a [`Configuration`] into a [`ResultBundle`]:
//! - Seeded node placement and the fixed base station
//! - Optional one-pass clustering around fixed centers
//! - Greedy nearest-neighbor collection route
//! - Per-node link cost under the selected transport model
//!
//! ## Module Organization
//!
//! - `types`: Core data structures (configuration, nodes, clusters, route, metrics)
//! - `error`: The configuration error returned by a run
//! - `geometry`: Distance helpers
//! - `node_generator`: Seeded node placement and base station position
//! - `clustering`: Nearest-center cluster assignment
//! - `routing`: Nearest-neighbor route construction
//! - `link_model`: Transport constants, delay and energy calculations
//! - `network`: Validation and orchestration of a full run
//!
//! ## Public API
//!
//! The main entry point is [`run_simulation`]. It is synchronous, keeps no
//! state between calls, and returns a bundle owned entirely by the caller.

pub mod clustering;
pub mod error;
pub mod geometry;
pub mod link_model;
pub mod network;
pub mod node_generator;
pub mod routing;
pub mod types;

pub use error::ConfigurationError;
pub use network::{run_simulation, validate_configuration};

// Re-export commonly used types
pub use types::{AggregateResult, Cluster, Configuration, LinkMetric, Node, Point, ResultBundle, Route, TransportType};
