//! Type definitions for the simulation.
//!
//! Contains all data structures used across the simulation including:
//! - Run configuration (node count, area, transport, feature toggles, seed)
//! - Geometry primitives (points, nodes)
//! - Derived structures (clusters, route)
//! - Per-node link metrics and the aggregated result bundle

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ConfigurationError;

/// Simple 2D point in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A sensor node. `index` is its position in generation order and stays
/// stable for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Node {
    pub index: usize,
    pub position: Point,
}

/// Physical transport used between a node and the base station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    /// RF telemetry, only usable near the surface.
    #[default]
    Rf,
    /// Cabled / fiber link.
    Cabled,
    /// Underwater acoustic modem.
    Acoustic,
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportType::Rf => write!(f, "RF Telemetry"),
            TransportType::Cabled => write!(f, "Cabled / Fiber"),
            TransportType::Acoustic => write!(f, "Acoustic"),
        }
    }
}

impl FromStr for TransportType {
    type Err = ConfigurationError;

    /// Accepts the short names (`rf`, `cabled`, `acoustic`) as well as the
    /// display labels, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rf" | "rf telemetry" | "radio" => Ok(TransportType::Rf),
            "cabled" | "cabled / fiber" | "fiber" | "cable" => Ok(TransportType::Cabled),
            "acoustic" => Ok(TransportType::Acoustic),
            _ => Err(ConfigurationError::UnknownTransport(s.to_string())),
        }
    }
}

/// Parameters for a single simulation run.
///
/// Loaded from TOML with kebab-case keys; any key left out falls back to
/// [`Configuration::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Configuration {
    /// Number of sensor nodes to place (at least 1).
    pub node_count: usize,
    /// Side length of the square ocean area in meters (must exceed 100).
    pub area_size: f64,
    /// Transport model used for the link cost computation.
    #[serde(rename = "transport")]
    pub transport_type: TransportType,
    /// Partition nodes into clusters around fixed centers.
    #[serde(rename = "clustering")]
    pub clustering_enabled: bool,
    /// Apply the SOFAR channel distance discount. Only honoured for acoustic transport.
    #[serde(rename = "sofar")]
    pub sofar_enabled: bool,
    /// Seed for node placement.
    #[serde(rename = "seed")]
    pub random_seed: u64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            node_count: 10,
            area_size: 1200.0,
            transport_type: TransportType::Rf,
            clustering_enabled: false,
            sofar_enabled: false,
            random_seed: 3,
        }
    }
}

impl Configuration {
    /// Whether the SOFAR discount takes effect for this run.
    pub fn sofar_active(&self) -> bool {
        self.sofar_enabled && self.transport_type == TransportType::Acoustic
    }
}

/// A group of nodes assigned to the nearest fixed center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    pub center: Node,
    /// Assigned nodes in generation order (the center included).
    pub members: Vec<Node>,
}

/// Greedy collection tour from the base station through every node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Polyline starting at the base station, `node_count + 1` points long.
    pub waypoints: Vec<Point>,
    /// Node indices in the order they are visited.
    pub visit_order: Vec<usize>,
}

impl Route {
    /// Length of the polyline in meters.
    pub fn total_length(&self) -> f64 {
        self.waypoints.windows(2).map(|w| super::geometry::distance(&w[0], &w[1])).sum()
    }
}

/// Cost of a direct link between one node and the base station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinkMetric {
    pub node_index: usize,
    /// True Euclidean distance in meters (never the SOFAR-adjusted value).
    pub distance: f64,
    /// Propagation delay in seconds.
    pub delay: f64,
    /// Energy in abstract units.
    pub energy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AggregateResult {
    pub total_energy: f64,
    pub total_delay: f64,
    pub total_sync_overhead: f64,
}

/// Everything a presentation layer needs to render one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultBundle {
    pub configuration: Configuration,
    pub nodes: Vec<Node>,
    pub base_station: Point,
    /// Empty unless clustering was enabled.
    pub clusters: Vec<Cluster>,
    pub route: Route,
    /// One entry per node, ordered by node index.
    pub link_metrics: Vec<LinkMetric>,
    pub aggregates: AggregateResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_parses_short_names_and_labels() {
        assert_eq!("rf".parse::<TransportType>().unwrap(), TransportType::Rf);
        assert_eq!("Cabled / Fiber".parse::<TransportType>().unwrap(), TransportType::Cabled);
        assert_eq!(" ACOUSTIC ".parse::<TransportType>().unwrap(), TransportType::Acoustic);
        assert!(matches!("sonar".parse::<TransportType>(), Err(ConfigurationError::UnknownTransport(name)) if name == "sonar"));
    }

    #[test]
    fn sofar_only_applies_to_acoustic() {
        let mut config = Configuration {
            sofar_enabled: true,
            ..Configuration::default()
        };
        assert!(!config.sofar_active());
        config.transport_type = TransportType::Acoustic;
        assert!(config.sofar_active());
        config.sofar_enabled = false;
        assert!(!config.sofar_active());
    }

    #[test]
    fn route_length_sums_segments() {
        let route = Route {
            waypoints: vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(3.0, 10.0)],
            visit_order: vec![0, 1],
        };
        assert!((route.total_length() - 11.0).abs() < 1e-12);
    }

    #[test]
    fn configuration_defaults_match_ui_defaults() {
        let config = Configuration::default();
        assert_eq!(config.node_count, 10);
        assert_eq!(config.area_size, 1200.0);
        assert_eq!(config.transport_type, TransportType::Rf);
        assert_eq!(config.random_seed, 3);
    }
}
