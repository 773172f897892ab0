//! Physical-layer cost of a direct node to base station link.
//!
//! Contains helpers for:
//! - Fixed per-transport propagation speed, energy coefficient and sync overhead
//! - Propagation delay, with the SOFAR channel distance discount for acoustic links
//! - Energy cost, always proportional to the true distance
//!
//! Units:
//! - Distance: meters
//! - Time: seconds (f64)
//! - Energy: abstract units

use super::geometry::distance;
use super::types::{LinkMetric, Node, Point, TransportType};

/// Fraction of the true distance used for the delay of an acoustic link when
/// the SOFAR channel effect is enabled. Energy is not discounted.
pub const SOFAR_DISTANCE_FACTOR: f64 = 0.8;

/// Constants of one transport model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportProfile {
    /// Signal propagation speed in m/s.
    pub propagation_speed: f64,

    /// Energy units spent per meter of link distance.
    pub energy_coefficient: f64,

    /// Fixed synchronization time charged per node (s), independent of distance.
    pub sync_overhead: f64,
}

const RF_PROFILE: TransportProfile = TransportProfile {
    propagation_speed: 3e8,
    energy_coefficient: 0.06,
    sync_overhead: 0.00002,
};

const CABLED_PROFILE: TransportProfile = TransportProfile {
    propagation_speed: 2e8,
    energy_coefficient: 0.015,
    sync_overhead: 0.00001,
};

// Speed of sound in sea water.
const ACOUSTIC_PROFILE: TransportProfile = TransportProfile {
    propagation_speed: 1500.0,
    energy_coefficient: 0.12,
    sync_overhead: 0.002,
};

impl TransportType {
    pub fn profile(&self) -> TransportProfile {
        match self {
            TransportType::Rf => RF_PROFILE,
            TransportType::Cabled => CABLED_PROFILE,
            TransportType::Acoustic => ACOUSTIC_PROFILE,
        }
    }

    /// Qualitative trade-offs of the transport, as shown next to the results.
    pub fn characteristics(&self) -> &'static [&'static str] {
        match self {
            TransportType::Rf => &["Very low delay", "Large energy consumption underwater", "Good only for surface & short marine zones"],
            TransportType::Cabled => &["Reliable and low-energy", "High installation cost", "Ideal for permanent observatories"],
            TransportType::Acoustic => &["Works deep underwater", "Slow due to low sound speed", "SOFAR channel improves long-range transmission"],
        }
    }
}

/// Propagation delay (s) over `distance` meters.
///
/// The SOFAR discount only applies to acoustic transport; for other
/// transports `sofar_enabled` is ignored.
pub fn propagation_delay(distance: f64, transport: TransportType, sofar_enabled: bool) -> f64 {
    let effective_distance = if sofar_enabled && transport == TransportType::Acoustic {
        distance * SOFAR_DISTANCE_FACTOR
    } else {
        distance
    };
    effective_distance / transport.profile().propagation_speed
}

/// Energy (abstract units) to send over `distance` meters.
pub fn energy_cost(distance: f64, transport: TransportType) -> f64 {
    transport.profile().energy_coefficient * distance
}

/// Cost of the direct link between `node` and the base station.
///
/// The metric reports the true distance even when the delay used the
/// SOFAR-discounted one.
pub fn link_metric(node: &Node, base_station: &Point, transport: TransportType, sofar_enabled: bool) -> LinkMetric {
    let d = distance(&node.position, base_station);
    LinkMetric {
        node_index: node.index,
        distance: d,
        delay: propagation_delay(d, transport, sofar_enabled),
        energy: energy_cost(d, transport),
    }
}
