//! Error type for invalid run configurations.

use thiserror::Error;

use super::node_generator::NODE_MARGIN;

/// Raised before any computation when a configuration cannot produce a run.
/// No other part of the pipeline fails on well-formed input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("node_count must be at least 1")]
    NoNodes,
    #[error("area_size {} m is too small, it must exceed {} m to leave a {} m margin on each side", .area_size, 2.0 * NODE_MARGIN, NODE_MARGIN)]
    AreaTooSmall { area_size: f64 },
    #[error("unknown transport type '{0}', expected rf, cabled or acoustic")]
    UnknownTransport(String),
}
